use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for setting the distribution status
 *
 * This instruction allows the designated operator to activate or pause the
 * distribution. Claims only succeed while the distribution is active;
 * withdrawal and claim-record cleanup are only available while it is paused.
 *
 * Access Control: Only the operator can set the status
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetStatus<'info> {
    /// The distributor account to update
    /// - Must be a valid existing distributor PDA
    /// - Will be modified to set the active flag
    #[account(mut)]
    pub distributor: Account<'info, AirdropDistributor>,

    /// The operator who can set the status
    /// - Must match the operator stored in the distributor state
    #[account(constraint = operator.key() == distributor.operator @ AirdropError::OnlyOperator)]
    pub operator: Signer<'info>,
}

/**
 * Activates or pauses the distribution
 *
 * Setting the flag to its current value is allowed and has no effect beyond
 * the emitted event.
 *
 * @param ctx - The account context containing distributor and operator accounts
 * @param active - New gating flag value
 */
pub fn handle_set_status(ctx: Context<SetStatus>, active: bool) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    distributor.active = active;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(StatusUpdated {
        distributor: distributor.key(),
        operator: ctx.accounts.operator.key(),
        active,
    });

    Ok(())
}
