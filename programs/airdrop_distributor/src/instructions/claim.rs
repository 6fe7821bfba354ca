use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{hash_leaf, transfer_token, verify};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * This instruction lets an eligible user withdraw the portion of their
 * entitlement that the current release percentage has unlocked. The
 * instruction verifies a merkle proof for (claimant, entitlement), raises
 * the claimant's cumulative claim record, and transfers the delta from the
 * vault.
 *
 * The claimant's identity is the transaction signer, never an instruction
 * argument, so nobody can claim on another account's behalf.
 *
 * Access Control: Any user with a valid merkle proof can claim
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor account containing distribution parameters
    /// - Must be a valid existing distributor PDA
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub distributor: Account<'info, AirdropDistributor>,

    /// Individual claim record for this claimant
    /// - Tracks how much this user has already received
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the tokens to be distributed
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the distributor's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant attempting to claim tokens
    /// - Must sign the transaction
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a token claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param entitlement - Maximum amount this user is eligible for (from the merkle tree)
 * @param proof - Array of 32-byte hashes forming the merkle proof path
 *
 * Validation Process:
 * 1. Distribution must be active and a merkle root must be set
 * 2. Verify merkle proof for the (claimant, entitlement) pair
 * 3. Compute the unlocked amount at the current release percentage
 * 4. Pay out the difference to what was already claimed, if any
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    entitlement: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let claim_record = &mut ctx.accounts.claim_record;

    // ===== VALIDATION PHASE =====

    // Claims are gated on the operator-controlled status flag
    require!(distributor.active, AirdropError::DistributionInactive);

    // Ensure a merkle root has been set (required for claim verification)
    require!(distributor.merkle_root != [0; 32], AirdropError::NoMerkleRoot);

    // ===== MERKLE PROOF VERIFICATION =====

    let claimant_account = &ctx.accounts.claimant;

    // Recreate this user's leaf of the committed tree. An entitlement value
    // that differs from the committed one produces a different leaf hash and
    // fails verification before any accounting is touched.
    let leaf = hash_leaf(&claimant_account.key(), entitlement);

    require!(
        verify(proof, distributor.merkle_root, leaf),
        AirdropError::InvalidProof
    );

    // ===== CLAIM ACCOUNTING =====

    // Unlocked portion of the entitlement at the current release percentage
    let unlocked = distributor.unlocked_amount(entitlement)?;

    // Only the newly unlocked delta is payable; the rest was already sent
    let pending_amount = claim_record.pending_amount(unlocked);
    require!(pending_amount > 0, AirdropError::NothingToClaim);

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.token_vault.amount >= pending_amount,
        AirdropError::InsufficientVaultBalance
    );

    // Prepare immutable copies before the mutable updates below
    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    // ===== EFFECTS PHASE (State Updates) =====

    // Raise the cumulative record to the unlocked level (CEI pattern -
    // effects before interactions)
    claim_record.claimed_amount = unlocked;

    // Calculate new total claimed amount with overflow protection
    let new_total_claimed = distributor
        .total_claimed
        .checked_add(pending_amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    // Update distributor's total claimed amount
    distributor.total_claimed = new_total_claimed;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for the vault transfer
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer the delta from vault to claimant using PDA authority.
    // A failed transfer aborts the transaction, so the record update above
    // never persists without the payout.
    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        pending_amount,
        ctx.accounts.token_mint.decimals,
        Some(signer), // PDA signing for secure transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(TokensClaimed {
        distributor: distributor_key,
        claimant: ctx.accounts.claimant.key(),
        amount_claimed: pending_amount,
        total_claimed_by_user: unlocked,
        entitlement,
        total_claimed: new_total_claimed,
    });

    Ok(())
}
