use anchor_lang::prelude::*;

/**
 * Nonce state account
 *
 * Tracks the campaign counter for each owner so new distributors get a
 * unique nonce without the caller having to pick one.
 *
 * Derivation: ["owner_nonce", owner]
 *
 * Lifecycle:
 * 1. Created on first distributor creation (using init_if_needed)
 * 2. Incremented with each new distributor
 * 3. Persistent across campaigns
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Increments with each distributor creation
    /// - Ensures unique nonces for each owner's distributors
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();
}
