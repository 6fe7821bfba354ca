use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Only operator can perform this action")]
    OnlyOperator,
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Invalid operator account")]
    InvalidOperator,

    // Distribution state errors
    #[msg("Distribution is not active")]
    DistributionInactive,
    #[msg("Distribution is still active")]
    DistributionStillActive,

    // Release percentage errors
    #[msg("Release percentage exceeds 10000 basis points")]
    ReleasePercentTooHigh,
    #[msg("Release percentage cannot decrease")]
    ReleasePercentDecreased,

    // Merkle proof errors
    #[msg("No merkle root set")]
    NoMerkleRoot,
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid proof")]
    InvalidProof,

    // Claim accounting errors
    #[msg("Nothing to claim at the current release percentage")]
    NothingToClaim,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Distributor account must be owned by this program")]
    DistributorNotOwnedByProgram,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
