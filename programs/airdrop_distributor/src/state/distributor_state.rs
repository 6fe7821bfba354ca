use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::AirdropError;

/**
 * Main distributor state account
 *
 * This struct holds the full configuration of an airdrop campaign: the
 * merkle commitment, the gating flag, the release percentage, and the
 * claim totals. It is mutated only through the program's instructions.
 *
 * Derivation: ["distributor", token_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_distributor (paused, release_bps = 0)
 * 2. Updated by set_status / set_release_percent / set_merkle_root
 * 3. Updated during claims (total_claimed increments)
 * 4. Closed during withdraw
 */
#[account]
#[derive(Default, Debug)]
pub struct AirdropDistributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple campaigns for the same token/owner pair
    pub nonce: u32,

    /// Owner of the distributor
    /// - Can withdraw remaining tokens while the distribution is paused
    pub owner: Pubkey,

    /// Operator who can manage the distribution
    /// - Can set status, release percentage, and merkle root
    pub operator: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA treasury holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Initial total amount of tokens deposited
    /// - Set during distributor creation
    pub initial_total_amount: u64,

    /// Total amount of tokens claimed by all users
    /// - Incremented with each successful claim
    pub total_claimed: u64,

    /// Gating flag for the distribution
    /// - Claims only succeed while true
    /// - Withdraw and claim-record cleanup only while false
    pub active: bool,

    /// Release percentage in basis points (10000 = 100%)
    /// - Starts at 0, raised by the operator over the life of the drop
    /// - Fraction of every entitlement that is currently claimable
    pub release_bps: u16,

    /// Merkle root for claim verification
    /// - Commits to all (claimant, entitlement) pairs
    /// - Can be rotated by the operator without resetting claim records
    pub merkle_root: [u8; 32],
}

impl AirdropDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<AirdropDistributor>();

    /// Amount of an entitlement unlocked at the current release percentage
    ///
    /// Computes floor(entitlement * release_bps / 10000) in u128 so the
    /// intermediate product cannot overflow. With release_bps capped at
    /// 10000 the result always fits back into u64; the conversion guards
    /// against a corrupted percentage anyway.
    pub fn unlocked_amount(&self, entitlement: u64) -> Result<u64> {
        let unlocked = (entitlement as u128) * (self.release_bps as u128) / (BPS_DENOMINATOR as u128);
        u64::try_from(unlocked).map_err(|_| error!(AirdropError::ArithmeticOverflow))
    }
}
