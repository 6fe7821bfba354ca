use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for rotating the merkle root
 *
 * This instruction allows the designated operator to replace the root that
 * claims are verified against. Each leaf of the committed tree is a
 * (claimant, entitlement) pair.
 *
 * Access Control: Only the operator can set the merkle root
 *
 * Business Logic:
 * - Claim records persist across rotations: a claimant re-committed with a
 *   larger entitlement is topped up rather than paid from scratch
 * - A rotation to a set that no longer contains a claimant simply leaves
 *   their record inert (their proofs stop verifying)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    /// The distributor account to update
    /// - Must be a valid existing distributor PDA
    /// - Will be modified to set the merkle_root
    #[account(mut)]
    pub distributor: Account<'info, AirdropDistributor>,

    /// The operator who can set the merkle root
    /// - Must match the operator stored in the distributor state
    #[account(constraint = operator.key() == distributor.operator @ AirdropError::OnlyOperator)]
    pub operator: Signer<'info>,
}

/**
 * Rotates the merkle root used for claim verification
 *
 * The tree construction must match the on-chain verifier: each leaf is
 * hash(claimant || entitlement_le), intermediate nodes hash their children
 * in lexicographic order.
 *
 * @param ctx - The account context containing distributor and operator accounts
 * @param merkle_root - 32-byte hash representing the root of the merkle tree
 */
pub fn handle_set_merkle_root(
    ctx: Context<SetMerkleRoot>,
    merkle_root: [u8; 32],
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    // Validate that the merkle root is not empty
    // An empty merkle root would allow no valid claims
    require!(merkle_root != [0; 32], AirdropError::InvalidMerkleRoot);

    // Set the merkle root for claim verification
    distributor.merkle_root = merkle_root;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(MerkleRootSet {
        distributor: distributor.key(),
        operator: ctx.accounts.operator.key(),
        merkle_root,
    });

    Ok(())
}
