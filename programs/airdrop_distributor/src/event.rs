use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Operator of the distributor
    pub operator: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,
    /// Initial merkle root committed at creation
    pub merkle_root: [u8; 32],
}

/// Event emitted when the distribution is activated or paused
#[event]
pub struct StatusUpdated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Operator who changed the status
    pub operator: Pubkey,
    /// New gating flag value
    pub active: bool,
}

/// Event emitted when the release percentage is raised
#[event]
pub struct ReleasePercentSet {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Operator who set the percentage
    pub operator: Pubkey,
    /// Previous release percentage in basis points
    pub old_release_bps: u16,
    /// New release percentage in basis points
    pub release_bps: u16,
}

/// Event emitted when the merkle root is rotated
#[event]
pub struct MerkleRootSet {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Operator who set the merkle root
    pub operator: Pubkey,
    /// The merkle root hash
    pub merkle_root: [u8; 32],
}

/// Event emitted when tokens are claimed
#[event]
pub struct TokensClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount of tokens paid out in this transaction
    pub amount_claimed: u64,
    /// Cumulative amount claimed by this claimant so far
    pub total_claimed_by_user: u64,
    /// Entitlement committed for this claimant in the merkle tree
    pub entitlement: u64,
    /// Total amount claimed from the distributor by all users
    pub total_claimed: u64,
}

/// Event emitted when remaining tokens are withdrawn
#[event]
pub struct TokensWithdrawn {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount_withdrawn: u64,
}

/// Event emitted when a ClaimRecord account is closed
#[event]
pub struct ClaimRecordClosed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant who closed the account
    pub claimant: Pubkey,
    /// Total amount that was claimed by this user
    pub claimed_amount: u64,
}
