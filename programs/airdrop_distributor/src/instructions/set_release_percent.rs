use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for setting the release percentage
 *
 * This instruction allows the designated operator to raise the fraction of
 * every entitlement that is currently claimable, expressed in basis points
 * (10000 = 100%).
 *
 * Access Control: Only the operator can set the release percentage
 *
 * Business Logic:
 * - The percentage starts at 0, so nothing is claimable until the operator
 *   performs the first raise
 * - Decreases are rejected: claimed amounts are cumulative and a lower
 *   percentage would strand accounts above the new unlock level
 * - At 10000 bps every entitlement is fully unlocked
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetReleasePercent<'info> {
    /// The distributor account to update
    /// - Must be a valid existing distributor PDA
    /// - Will be modified to set release_bps
    #[account(mut)]
    pub distributor: Account<'info, AirdropDistributor>,

    /// The operator who can set the release percentage
    /// - Must match the operator stored in the distributor state
    #[account(constraint = operator.key() == distributor.operator @ AirdropError::OnlyOperator)]
    pub operator: Signer<'info>,
}

/**
 * Raises the release percentage of the distribution
 *
 * @param ctx - The account context containing distributor and operator accounts
 * @param release_bps - New release percentage in basis points, at most 10000
 */
pub fn handle_set_release_percent(
    ctx: Context<SetReleasePercent>,
    release_bps: u16,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    // Percentage is bounded by 100%
    require!(
        release_bps <= MAX_RELEASE_BPS,
        AirdropError::ReleasePercentTooHigh
    );

    // Monotone: the unlock level never moves backwards
    require!(
        release_bps >= distributor.release_bps,
        AirdropError::ReleasePercentDecreased
    );

    let old_release_bps = distributor.release_bps;
    distributor.release_bps = release_bps;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ReleasePercentSet {
        distributor: distributor.key(),
        operator: ctx.accounts.operator.key(),
        old_release_bps,
        release_bps,
    });

    Ok(())
}
