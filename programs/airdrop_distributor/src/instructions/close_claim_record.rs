use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;

/**
 * Account context for closing claim record accounts
 *
 * This instruction allows users to close their ClaimRecord accounts once
 * the distribution has been paused (or the distributor closed entirely),
 * reclaiming the rent paid during account creation.
 *
 * Access Control: Only the original claimant can close their ClaimRecord
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseClaimRecord<'info> {
    /// ClaimRecord account to be closed, rent returned to claimant
    /// - Must be a valid existing ClaimRecord account
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        mut,
        close = claimant,
        seeds = [CLAIM_SEED.as_bytes(), distributor_key.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// The claimant who originally created the ClaimRecord account
    /// - Will receive the reclaimed rent
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Distributor account used for PDA derivation and status validation
    /// CHECK: Either closed or valid AirdropDistributor
    pub distributor_key: AccountInfo<'info>,
}

/**
 * Closes a ClaimRecord account and returns rent to the claimant
 *
 * @param ctx - The account context containing the ClaimRecord and claimant accounts
 *
 * Validation Process:
 * 1. If the distributor still exists, it must belong to this program and be paused
 * 2. Anchor transfers the lamports and closes the account
 */
pub fn handle_close_claim_record(ctx: Context<CloseClaimRecord>) -> Result<()> {
    let distributor_key = &ctx.accounts.distributor_key;

    // Only validate if distributor account still exists; after withdraw the
    // distributor is gone and records may always be cleaned up
    if distributor_key.data_len() != 0 {
        // Explicitly verify the distributor account is owned by this program
        require!(
            distributor_key.owner == &crate::ID,
            AirdropError::DistributorNotOwnedByProgram
        );

        // Deserialize distributor data to check the status flag
        let distributor_data = distributor_key.try_borrow_data()?;
        let distributor = AirdropDistributor::try_deserialize(&mut distributor_data.as_ref())?;

        // A record of a live distribution must stay: it is what prevents
        // re-claiming already paid amounts
        require!(!distributor.active, AirdropError::DistributionStillActive);
    }

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ClaimRecordClosed {
        distributor: ctx.accounts.distributor_key.key(),
        claimant: ctx.accounts.claimant.key(),
        claimed_amount: ctx.accounts.claim_record.claimed_amount,
    });

    Ok(())
}
