//! `Swap` (§4.3): single constant-product swap against a token-token
//! pool.
//!
//! # Account order
//! 0. User authority (signer)
//! 1. Pool state PDA (writable)
//! 2. Token A vault PDA (writable)
//! 3. Token B vault PDA (writable)
//! 4. User's input-side token account (writable)
//! 5. User's output-side token account (writable)
//! 6. SPL Token program

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;

use crate::constants::{POOL_SEED_PREFIX, VAULT_SEED_PREFIX};
use crate::math;
use crate::state::Pool;
use crate::token;
use crate::types::error::AmmError;
use crate::utils::validation::{
    unpack_and_validate_token_account, validate_owned_by_program, validate_pda, validate_signer, validate_writable,
};

pub fn process_swap(program_id: &Pubkey, accounts: &[AccountInfo], amount_in: u64, direction_a_to_b: bool) -> ProgramResult {
    let iter = &mut accounts.iter();
    let user_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let vault_a = next_account_info(iter)?;
    let vault_b = next_account_info(iter)?;
    let user_token_in = next_account_info(iter)?;
    let user_token_out = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_signer(user_authority, "User authority")?;
    validate_owned_by_program(pool_account, program_id, "Pool state")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(vault_a, "Vault A")?;
    validate_writable(vault_b, "Vault B")?;
    validate_writable(user_token_in, "User input token account")?;
    validate_writable(user_token_out, "User output token account")?;

    let mut pool = Pool::unpack_from_slice(&pool_account.data.borrow())?;

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

    let (vault_in, vault_out, reserve_in, reserve_out, input_mint) = if direction_a_to_b {
        (vault_a, vault_b, pool.reserve_a, pool.reserve_b, pool.token_a)
    } else {
        (vault_b, vault_a, pool.reserve_b, pool.reserve_a, pool.token_b)
    };

    let user_input_data =
        unpack_and_validate_token_account(user_token_in, "User input token account", Some(user_authority.key), Some(&input_mint))?;
    if user_input_data.amount < amount_in {
        msg!("Swap: user holds {} of the input token, needs {}", user_input_data.amount, amount_in);
        return Err(AmmError::InsufficientInputBalance.into());
    }

    let swap = math::compute_swap_output(amount_in, reserve_in, reserve_out)?;
    if swap.amount_out == 0 {
        msg!("Swap: computed output is zero");
        return Err(AmmError::ZeroOutput.into());
    }

    let k_before = (reserve_in as u128) * (reserve_out as u128);
    let k_after = (swap.new_reserve_in as u128) * (swap.new_reserve_out as u128);
    if k_after < k_before {
        msg!("Swap: constant-product invariant would decrease");
        return Err(AmmError::InvariantBroken.into());
    }

    token::transfer_signed(token_program, user_token_in, vault_in, user_authority, amount_in)?;

    let bump = [pool.bump];
    let pool_seeds: &[&[u8]] = &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref(), &bump];
    token::transfer_pda_signed(token_program, vault_out, user_token_out, pool_account, swap.amount_out, pool_seeds)?;

    if direction_a_to_b {
        pool.reserve_a = swap.new_reserve_in;
        pool.reserve_b = swap.new_reserve_out;
        pool.fee_collected_a = pool.fee_collected_a.checked_add(swap.fee_in).ok_or(AmmError::MathOverflow)?;
    } else {
        pool.reserve_b = swap.new_reserve_in;
        pool.reserve_a = swap.new_reserve_out;
        pool.fee_collected_b = pool.fee_collected_b.checked_add(swap.fee_in).ok_or(AmmError::MathOverflow)?;
    }
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("Swap: {} in, {} out, fee {}", amount_in, swap.amount_out, swap.fee_in);
    Ok(())
}
