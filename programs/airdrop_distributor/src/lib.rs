use anchor_lang::prelude::*;

declare_id!("7fKxU3nq2remJd4GamKjWvGAh6Qu9cQ4dEh59oaZAdrp");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Distributor Program
 *
 * A Solana program for distributing tokens to a merkle-committed set of
 * recipients with a progressive, operator-controlled release percentage.
 *
 * Key Features:
 * - Merkle tree-based claim verification against an operator-held root
 * - Progressive unlock: each entitlement is claimable up to
 *   entitlement * release_bps / 10000, raised over the life of the drop
 * - Cumulative per-claimant accounting: repeat claims pay out only the
 *   newly unlocked delta, never the full entitlement again
 * - Pausable distribution (claims gated on an operator-controlled flag)
 * - Root rotation without resetting previous claims
 * - Operator delegation (separate owner and operator roles)
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Owner Nonce PDA: per-owner campaign counter (automatic nonce management)
 * - Distributor PDA: root, status, release percentage, totals
 * - Token Vault PDA: treasury holding the tokens to be distributed
 * - Claim Record PDAs: cumulative claimed amount per claimant
 *
 * Workflow:
 * 1. Owner creates the distributor with an initial root and deposits tokens
 * 2. Operator activates the distribution and raises the release percentage
 * 3. Users claim unlocked tokens with valid merkle proofs, topping up as the
 *    percentage rises
 * 4. Owner pauses the distribution and withdraws any remaining tokens
 * 5. Users can optionally close their ClaimRecord accounts to reclaim rent
 */
#[program]
pub mod airdrop_distributor {
    use super::*;

    /**
     * Creates a new airdrop distributor
     *
     * Initializes a distribution campaign with automatic nonce management.
     * The owner deposits tokens into a vault controlled by the distributor
     * PDA and commits the initial merkle root. The distribution starts
     * paused with a release percentage of zero.
     *
     * @param ctx - Account context containing distributor, vault, counter, and owner accounts
     * @param initial_total_amount - Amount of tokens deposited into the vault
     * @param merkle_root - 32-byte root committing to all (claimant, entitlement) pairs
     *
     * Access Control: Owner only
     */
    pub fn create_distributor(
        ctx: Context<CreateDistributor>,
        initial_total_amount: u64,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_create_distributor(ctx, initial_total_amount, merkle_root)
    }

    /**
     * Activates or pauses the distribution
     *
     * Claims only succeed while the distribution is active; withdrawal and
     * claim-record cleanup only while it is paused.
     *
     * @param ctx - Account context containing distributor and operator accounts
     * @param active - New gating flag value
     *
     * Access Control: Operator only
     */
    pub fn set_status(ctx: Context<SetStatus>, active: bool) -> Result<()> {
        handle_set_status(ctx, active)
    }

    /**
     * Raises the release percentage
     *
     * Sets the fraction of every entitlement that is currently claimable,
     * in basis points (10000 = 100%). Decreases are rejected: claimed
     * amounts are cumulative and cannot be walked back.
     *
     * @param ctx - Account context containing distributor and operator accounts
     * @param release_bps - New release percentage in basis points, at most 10000
     *
     * Access Control: Operator only
     */
    pub fn set_release_percent(ctx: Context<SetReleasePercent>, release_bps: u16) -> Result<()> {
        handle_set_release_percent(ctx, release_bps)
    }

    /**
     * Rotates the merkle root used for claim verification
     *
     * The root represents a tree of all eligible (claimant, entitlement)
     * pairs. Claim records persist across rotations, so re-committing a
     * claimant with a larger entitlement tops them up instead of paying
     * twice.
     *
     * @param ctx - Account context containing distributor and operator accounts
     * @param merkle_root - 32-byte hash representing the merkle tree root
     *
     * Access Control: Operator only
     */
    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_set_merkle_root(ctx, merkle_root)
    }

    /**
     * Claims currently unlocked tokens with merkle proof verification
     *
     * Pays out the difference between the claimant's unlocked amount
     * (entitlement scaled by the release percentage) and whatever they have
     * already received. Fails with NothingToClaim once that difference is
     * zero.
     *
     * @param ctx - Account context containing distributor, claim record, and token accounts
     * @param entitlement - Maximum amount this claimant is eligible for, as committed in the tree
     * @param proof - Array of 32-byte sibling hashes forming the merkle proof
     *
     * Access Control: Any user with a valid merkle proof
     */
    pub fn claim(ctx: Context<Claim>, entitlement: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, entitlement, proof)
    }

    /**
     * Withdraws remaining tokens from a paused distribution
     *
     * Returns the undistributed vault balance to the owner and closes the
     * distributor and vault accounts.
     *
     * @param ctx - Account context containing distributor, vault, and owner accounts
     *
     * Access Control: Owner only, while the distribution is paused
     */
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        handle_withdraw(ctx)
    }

    /**
     * Closes a ClaimRecord account and reclaims rent
     *
     * Available once the distribution is paused or the distributor has been
     * closed, so claimants can recover the cost of participation.
     *
     * @param ctx - Account context containing claim record and claimant accounts
     *
     * Access Control: Claimant only (enforced by PDA seeds)
     */
    pub fn close_claim_record(ctx: Context<CloseClaimRecord>) -> Result<()> {
        handle_close_claim_record(ctx)
    }
}
