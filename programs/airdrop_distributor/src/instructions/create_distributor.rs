use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop distributor
 *
 * This instruction initializes a new distribution campaign:
 * - Creates or updates a nonce state PDA to track campaign numbers
 * - Creates a distributor PDA with an auto-incremented nonce
 * - Creates a token vault PDA that serves as the treasury
 * - Transfers the initial token amount from owner to the vault
 * - Commits the initial merkle root and sets up the operator
 *
 * The distribution starts paused with a release percentage of zero; the
 * operator activates it and unlocks entitlements afterwards.
 *
 * Access Control: Only the owner can create a distributor
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks campaign numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main distributor account (PDA)
    /// - Stores all distribution parameters and state
    /// - Derived from: ["distributor", token_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = AirdropDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, AirdropDistributor>,

    /// Token vault account (PDA) holding the tokens to be distributed
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the tokens to be deposited
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the distributor
    /// - Can withdraw remaining tokens while the distribution is paused
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The operator account that can manage the distribution
    /// - Can set status, release percentage, and merkle root
    /// CHECK: This account is validated by storing its key in the distributor state
    pub operator: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new airdrop distributor with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_total_amount - Amount of tokens deposited into the vault
 * @param merkle_root - Initial root committing to all (claimant, entitlement) pairs
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    initial_total_amount: u64,
    merkle_root: [u8; 32],
) -> Result<()> {
    // Validate initial total amount
    require!(initial_total_amount > 0, AirdropError::InvalidAmount);

    // Validate the initial root: an all-zero root would allow no valid claims
    require!(merkle_root != [0; 32], AirdropError::InvalidMerkleRoot);

    // Validate operator is not empty account
    require!(
        ctx.accounts.operator.key() != Pubkey::default(),
        AirdropError::InvalidOperator
    );

    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let distributor = &mut ctx.accounts.distributor;

    // Calculate nonce number with overflow protection
    let current_nonce = owner_nonce
        .nonce
        .checked_add(1)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    // Update nonce state with current nonce
    owner_nonce.nonce = current_nonce;

    // Initialize distributor state with auto-assigned nonce
    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = current_nonce;
    distributor.owner = ctx.accounts.owner.key();
    distributor.operator = ctx.accounts.operator.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.initial_total_amount = initial_total_amount;
    distributor.merkle_root = merkle_root;
    // Note: total_claimed, active, release_bps use default values (0 / paused)

    // Transfer tokens from owner to vault so the treasury can cover claims
    // Uses transfer_checked for compatibility with both SPL Token and Token 2022
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_total_amount,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for owner-signed transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        operator: ctx.accounts.operator.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        initial_total_amount,
        merkle_root,
    });

    Ok(())
}
