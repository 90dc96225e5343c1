//! `AddLiquidity` / `RemoveLiquidity` (§4.3): proportional deposit and
//! redeem against an existing token-token pool.
//!
//! # Account order (both instructions)
//! 0. User authority (signer)
//! 1. Pool state PDA (writable)
//! 2. Token A vault PDA (writable)
//! 3. Token B vault PDA (writable)
//! 4. LP mint PDA (writable)
//! 5. User's token A account (writable)
//! 6. User's token B account (writable)
//! 7. User's LP token account (writable)
//! 8. SPL Token program

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;

use crate::constants::{LP_MINT_SEED_PREFIX, POOL_SEED_PREFIX, VAULT_SEED_PREFIX};
use crate::math;
use crate::state::Pool;
use crate::token;
use crate::types::error::AmmError;
use crate::utils::validation::{
    unpack_and_validate_token_account, validate_owned_by_program, validate_pda, validate_signer, validate_writable,
};

struct LoadedPoolAccounts<'a, 'info> {
    user_authority: &'a AccountInfo<'info>,
    pool_account: &'a AccountInfo<'info>,
    vault_a: &'a AccountInfo<'info>,
    vault_b: &'a AccountInfo<'info>,
    lp_mint: &'a AccountInfo<'info>,
    user_token_a: &'a AccountInfo<'info>,
    user_token_b: &'a AccountInfo<'info>,
    user_lp_account: &'a AccountInfo<'info>,
    token_program: &'a AccountInfo<'info>,
    pool: Pool,
}

fn load_and_validate<'a, 'info>(
    program_id: &Pubkey,
    accounts: &'a [AccountInfo<'info>],
) -> Result<LoadedPoolAccounts<'a, 'info>, solana_program::program_error::ProgramError> {
    let iter = &mut accounts.iter();
    let user_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let vault_a = next_account_info(iter)?;
    let vault_b = next_account_info(iter)?;
    let lp_mint = next_account_info(iter)?;
    let user_token_a = next_account_info(iter)?;
    let user_token_b = next_account_info(iter)?;
    let user_lp_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_signer(user_authority, "User authority")?;
    validate_owned_by_program(pool_account, program_id, "Pool state")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(vault_a, "Vault A")?;
    validate_writable(vault_b, "Vault B")?;
    validate_writable(lp_mint, "LP mint")?;
    validate_writable(user_token_a, "User token A account")?;
    validate_writable(user_token_b, "User token B account")?;
    validate_writable(user_lp_account, "User LP account")?;

    let pool = Pool::unpack_from_slice(&pool_account.data.borrow())?;

    validate_pda(
        pool_account,
        &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref()],
        program_id,
        "Pool PDA",
    )?;
    validate_pda(
        vault_a,
        &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_a.as_ref()],
        program_id,
        "Vault A PDA",
    )?;
    validate_pda(
        vault_b,
        &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_b.as_ref()],
        program_id,
        "Vault B PDA",
    )?;
    validate_pda(lp_mint, &[LP_MINT_SEED_PREFIX, pool_account.key.as_ref()], program_id, "LP mint PDA")?;

    Ok(LoadedPoolAccounts {
        user_authority,
        pool_account,
        vault_a,
        vault_b,
        lp_mint,
        user_token_a,
        user_token_b,
        user_lp_account,
        token_program,
        pool,
    })
}

pub fn process_add_liquidity(program_id: &Pubkey, accounts: &[AccountInfo], amount_a: u64, amount_b: u64) -> ProgramResult {
    let mut loaded = load_and_validate(program_id, accounts)?;

    let user_token_a_data = unpack_and_validate_token_account(
        loaded.user_token_a,
        "User token A account",
        Some(loaded.user_authority.key),
        Some(&loaded.pool.token_a),
    )?;
    if user_token_a_data.amount < amount_a {
        msg!("AddLiquidity: user holds {} of token A, needs {}", user_token_a_data.amount, amount_a);
        return Err(AmmError::InsufficientInputBalance.into());
    }
    let user_token_b_data = unpack_and_validate_token_account(
        loaded.user_token_b,
        "User token B account",
        Some(loaded.user_authority.key),
        Some(&loaded.pool.token_b),
    )?;
    if user_token_b_data.amount < amount_b {
        msg!("AddLiquidity: user holds {} of token B, needs {}", user_token_b_data.amount, amount_b);
        return Err(AmmError::InsufficientInputBalance.into());
    }

    let deposit = math::compute_deposit(
        amount_a,
        amount_b,
        loaded.pool.reserve_a,
        loaded.pool.reserve_b,
        loaded.pool.total_lp_supply,
    )?;

    token::transfer_signed(
        loaded.token_program,
        loaded.user_token_a,
        loaded.vault_a,
        loaded.user_authority,
        deposit.actual_a,
    )?;
    token::transfer_signed(
        loaded.token_program,
        loaded.user_token_b,
        loaded.vault_b,
        loaded.user_authority,
        deposit.actual_b,
    )?;

    let bump = [loaded.pool.bump];
    let pool_seeds: &[&[u8]] = &[POOL_SEED_PREFIX, loaded.pool.token_a.as_ref(), loaded.pool.token_b.as_ref(), &bump];

    token::mint_to_pda_signed(
        loaded.token_program,
        loaded.lp_mint,
        loaded.user_lp_account,
        loaded.pool_account,
        deposit.minted_shares,
        pool_seeds,
    )?;

    loaded.pool.reserve_a = loaded.pool.reserve_a.checked_add(deposit.actual_a).ok_or(AmmError::MathOverflow)?;
    loaded.pool.reserve_b = loaded.pool.reserve_b.checked_add(deposit.actual_b).ok_or(AmmError::MathOverflow)?;
    loaded.pool.total_lp_supply = loaded
        .pool
        .total_lp_supply
        .checked_add(deposit.minted_shares)
        .ok_or(AmmError::MathOverflow)?;
    loaded.pool.pack_into_slice(&mut loaded.pool_account.data.borrow_mut());

    msg!(
        "AddLiquidity: deposited ({}, {}), minted {} LP",
        deposit.actual_a,
        deposit.actual_b,
        deposit.minted_shares
    );
    Ok(())
}

pub fn process_remove_liquidity(program_id: &Pubkey, accounts: &[AccountInfo], lp_amount: u64) -> ProgramResult {
    let mut loaded = load_and_validate(program_id, accounts)?;

    let user_lp_data = unpack_and_validate_token_account(
        loaded.user_lp_account,
        "User LP account",
        Some(loaded.user_authority.key),
        Some(loaded.lp_mint.key),
    )?;
    if user_lp_data.amount < lp_amount {
        msg!("RemoveLiquidity: user holds {} LP, requested {}", user_lp_data.amount, lp_amount);
        return Err(AmmError::InsufficientLPBalance.into());
    }
    if lp_amount > loaded.pool.total_lp_supply {
        msg!("RemoveLiquidity: requested {} exceeds total supply {}", lp_amount, loaded.pool.total_lp_supply);
        return Err(AmmError::InsufficientLPBalance.into());
    }

    let redeem = math::compute_redeem(
        lp_amount,
        loaded.pool.reserve_a,
        loaded.pool.reserve_b,
        loaded.pool.total_lp_supply,
    )?;

    token::burn_signed(loaded.token_program, loaded.user_lp_account, loaded.lp_mint, loaded.user_authority, lp_amount)?;

    let bump = [loaded.pool.bump];
    let pool_seeds: &[&[u8]] = &[POOL_SEED_PREFIX, loaded.pool.token_a.as_ref(), loaded.pool.token_b.as_ref(), &bump];

    token::transfer_pda_signed(
        loaded.token_program,
        loaded.vault_a,
        loaded.user_token_a,
        loaded.pool_account,
        redeem.payout_a,
        pool_seeds,
    )?;
    token::transfer_pda_signed(
        loaded.token_program,
        loaded.vault_b,
        loaded.user_token_b,
        loaded.pool_account,
        redeem.payout_b,
        pool_seeds,
    )?;

    loaded.pool.reserve_a = loaded.pool.reserve_a.checked_sub(redeem.payout_a).ok_or(AmmError::MathOverflow)?;
    loaded.pool.reserve_b = loaded.pool.reserve_b.checked_sub(redeem.payout_b).ok_or(AmmError::MathOverflow)?;
    loaded.pool.total_lp_supply = loaded.pool.total_lp_supply.checked_sub(lp_amount).ok_or(AmmError::MathOverflow)?;
    loaded.pool.pack_into_slice(&mut loaded.pool_account.data.borrow_mut());

    msg!("RemoveLiquidity: burned {} LP, paid out ({}, {})", lp_amount, redeem.payout_a, redeem.payout_b);
    Ok(())
}
