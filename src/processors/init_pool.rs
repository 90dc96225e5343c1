//! `InitPool` (§4.3): creates a token-token pool's PDA, vaults, and LP
//! mint, then seeds it with the caller's first deposit.
//!
//! # Account order
//! 0. Payer / user authority (signer, writable)
//! 1. Pool state PDA (writable, uninitialized)
//! 2. Token A mint
//! 3. Token B mint
//! 4. Token A vault PDA (writable, uninitialized)
//! 5. Token B vault PDA (writable, uninitialized)
//! 6. LP mint PDA (writable, uninitialized)
//! 7. User's token A account (writable)
//! 8. User's token B account (writable)
//! 9. User's LP token account (writable, uninitialized, signer — the
//!    LP mint does not exist before this instruction runs, so the
//!    user's LP account is created and initialized here too)
//! 10. SPL Token program
//! 11. System program
//! 12. Rent sysvar

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program::invoke_signed;
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;
use solana_program::rent::Rent;
use solana_program::sysvar::Sysvar;

use crate::constants::{LP_MINT_DECIMALS, LP_MINT_SEED_PREFIX, POOL_SEED_PREFIX, VAULT_SEED_PREFIX};
use crate::math;
use crate::state::Pool;
use crate::token;
use crate::types::error::AmmError;
use crate::utils::validation::{validate_pda, validate_signer, validate_writable};

pub fn process_init_pool(program_id: &Pubkey, accounts: &[AccountInfo], amount_a: u64, amount_b: u64) -> ProgramResult {
    if amount_a == 0 || amount_b == 0 {
        msg!("InitPool: both amounts must be positive");
        return Err(AmmError::InsufficientLiquidity.into());
    }

    let iter = &mut accounts.iter();
    let payer = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_a_mint = next_account_info(iter)?;
    let token_b_mint = next_account_info(iter)?;
    let vault_a = next_account_info(iter)?;
    let vault_b = next_account_info(iter)?;
    let lp_mint = next_account_info(iter)?;
    let user_token_a = next_account_info(iter)?;
    let user_token_b = next_account_info(iter)?;
    let user_lp_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;
    let system_program = next_account_info(iter)?;
    let rent_sysvar = next_account_info(iter)?;

    validate_signer(payer, "Payer")?;
    validate_writable(payer, "Payer")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(vault_a, "Vault A")?;
    validate_writable(vault_b, "Vault B")?;
    validate_writable(lp_mint, "LP mint")?;
    validate_writable(user_token_a, "User token A account")?;
    validate_writable(user_token_b, "User token B account")?;
    validate_writable(user_lp_account, "User LP account")?;

    if pool_account.owner == program_id {
        msg!("InitPool: pool already initialized");
        return Err(AmmError::PoolAlreadyInitialized.into());
    }

    let pool_bump = validate_pda(
        pool_account,
        &[POOL_SEED_PREFIX, token_a_mint.key.as_ref(), token_b_mint.key.as_ref()],
        program_id,
        "Pool PDA",
    )?;
    let pool_seeds_bump = [pool_bump];
    let pool_signer_seeds: &[&[u8]] = &[
        POOL_SEED_PREFIX,
        token_a_mint.key.as_ref(),
        token_b_mint.key.as_ref(),
        &pool_seeds_bump,
    ];

    let vault_a_bump = validate_pda(
        vault_a,
        &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), token_a_mint.key.as_ref()],
        program_id,
        "Vault A PDA",
    )?;
    let vault_a_bump_arr = [vault_a_bump];
    let vault_a_seeds: &[&[u8]] = &[
        VAULT_SEED_PREFIX,
        pool_account.key.as_ref(),
        token_a_mint.key.as_ref(),
        &vault_a_bump_arr,
    ];

    let vault_b_bump = validate_pda(
        vault_b,
        &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), token_b_mint.key.as_ref()],
        program_id,
        "Vault B PDA",
    )?;
    let vault_b_bump_arr = [vault_b_bump];
    let vault_b_seeds: &[&[u8]] = &[
        VAULT_SEED_PREFIX,
        pool_account.key.as_ref(),
        token_b_mint.key.as_ref(),
        &vault_b_bump_arr,
    ];

    let lp_mint_bump = validate_pda(lp_mint, &[LP_MINT_SEED_PREFIX, pool_account.key.as_ref()], program_id, "LP mint PDA")?;
    let lp_mint_bump_arr = [lp_mint_bump];
    let lp_mint_seeds: &[&[u8]] = &[LP_MINT_SEED_PREFIX, pool_account.key.as_ref(), &lp_mint_bump_arr];

    let rent = Rent::get()?;

    // Create pool state account, signed by the pool PDA's own seeds.
    invoke_signed(
        &solana_program::system_instruction::create_account(
            payer.key,
            pool_account.key,
            rent.minimum_balance(Pool::LEN),
            Pool::LEN as u64,
            program_id,
        ),
        &[payer.clone(), pool_account.clone(), system_program.clone()],
        &[pool_signer_seeds],
    )?;

    token::create_and_initialize_token_account(
        system_program,
        token_program,
        payer,
        vault_a,
        token_a_mint,
        pool_account.key,
        rent_sysvar,
        rent.minimum_balance(spl_token::state::Account::LEN),
        vault_a_seeds,
    )?;

    token::create_and_initialize_token_account(
        system_program,
        token_program,
        payer,
        vault_b,
        token_b_mint,
        pool_account.key,
        rent_sysvar,
        rent.minimum_balance(spl_token::state::Account::LEN),
        vault_b_seeds,
    )?;

    token::create_and_initialize_mint(
        system_program,
        token_program,
        payer,
        lp_mint,
        pool_account.key,
        rent_sysvar,
        LP_MINT_DECIMALS,
        rent.minimum_balance(spl_token::state::Mint::LEN),
        lp_mint_seeds,
    )?;

    token::transfer_signed(token_program, user_token_a, vault_a, payer, amount_a)?;
    token::transfer_signed(token_program, user_token_b, vault_b, payer, amount_b)?;

    token::create_and_initialize_user_token_account(
        system_program,
        token_program,
        payer,
        user_lp_account,
        lp_mint,
        payer.key,
        rent_sysvar,
        rent.minimum_balance(spl_token::state::Account::LEN),
    )?;

    let deposit = math::compute_deposit(amount_a, amount_b, 0, 0, 0)?;

    token::mint_to_pda_signed(
        token_program,
        lp_mint,
        user_lp_account,
        pool_account,
        deposit.minted_shares,
        pool_signer_seeds,
    )?;

    let pool = Pool {
        token_a: *token_a_mint.key,
        token_b: *token_b_mint.key,
        bump: pool_bump,
        reserve_a: amount_a,
        reserve_b: amount_b,
        total_lp_supply: deposit.minted_shares,
        fee_collected_a: 0,
        fee_collected_b: 0,
        fee_treasury: *payer.key,
    };
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!(
        "InitPool: created {} / {}, reserves ({}, {}), minted {} LP",
        token_a_mint.key,
        token_b_mint.key,
        amount_a,
        amount_b,
        deposit.minted_shares
    );
    Ok(())
}
