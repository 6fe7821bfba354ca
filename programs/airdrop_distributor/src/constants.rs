use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the airdrop
 * distributor program. These constants control release-percentage precision
 * and PDA derivation.
 */

#[constant]
/// ===== RELEASE PERCENTAGE CONSTANTS =====

/// Denominator of the release percentage, in basis points
/// - 10000 bps = 100%
/// - Unlocked amount = entitlement * release_bps / BPS_DENOMINATOR
/// - Integer division floors, so rounding never favors the claimant
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound for the release percentage
/// - setReleasePercent rejects values above this
/// - At this value every entitlement is fully unlocked
pub const MAX_RELEASE_BPS: u16 = 10_000;

/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Tracks a per-owner campaign counter
/// - Enables automatic nonce assignment for distributors
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner, nonce]
/// - Creates unique distributor accounts for each (token, owner, nonce) combination
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - One treasury vault per distributor, controlled by the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - One cumulative claim counter per (distributor, claimant) pair
/// - Persists across merkle root rotations
pub const CLAIM_SEED: &str = "claim";
