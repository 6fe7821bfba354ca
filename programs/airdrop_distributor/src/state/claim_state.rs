use anchor_lang::prelude::*;

/**
 * Individual claim record account
 *
 * This struct is the per-claimant entry of the entitlement ledger: how much
 * of their entitlement a user has already received. It never decreases, so
 * repeat claims pay out only the newly unlocked delta as the release
 * percentage rises.
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed), starting at zero
 * 2. Raised with each subsequent claim
 * 3. Can be closed once the distribution is paused, for rent reclamation
 *
 * Design Notes:
 * - One ClaimRecord account per (distributor, claimant) pair
 * - Persists across merkle root rotations, preventing double payouts when
 *   a claimant is re-committed with a larger entitlement
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Total amount claimed by this user (cumulative)
    pub claimed_amount: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    /// Portion of the unlocked amount not yet paid out
    ///
    /// Zero when the claimant has already received everything currently
    /// unlocked, including the case where the unlocked amount dropped below
    /// the recorded total after a root rotation.
    pub fn pending_amount(&self, unlocked: u64) -> u64 {
        unlocked.saturating_sub(self.claimed_amount)
    }
}
