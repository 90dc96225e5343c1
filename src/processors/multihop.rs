//! `MultihopSwap` (§4.5): atomic chain of constant-product swaps across
//! independently owned pools.
//!
//! # Account order
//! 0. User authority (signer)
//! 1. SPL Token program
//! 2.. `h` contiguous 7-account hop windows, each:
//!    `(pool, token_in_mint, token_out_mint, vault_in, vault_out, user_in_account, user_out_account)`

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;

use crate::constants::{ACCOUNTS_PER_HOP, MIN_HOPS, POOL_SEED_PREFIX, VAULT_SEED_PREFIX};
use crate::math;
use crate::state::Pool;
use crate::token;
use crate::types::error::AmmError;
use crate::utils::validation::{unpack_and_validate_token_account, validate_pda, validate_signer, validate_writable};

struct Hop<'a, 'info> {
    pool_account: &'a AccountInfo<'info>,
    token_in_mint: &'a AccountInfo<'info>,
    token_out_mint: &'a AccountInfo<'info>,
    vault_in: &'a AccountInfo<'info>,
    vault_out: &'a AccountInfo<'info>,
    user_in_account: &'a AccountInfo<'info>,
    user_out_account: &'a AccountInfo<'info>,
}

pub fn process_multihop_swap(program_id: &Pubkey, accounts: &[AccountInfo], amount_in: u64, minimum_amount_out: u64) -> ProgramResult {
    let iter = &mut accounts.iter();
    let user_authority = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;
    validate_signer(user_authority, "User authority")?;

    let hop_accounts: Vec<&AccountInfo> = iter.collect();
    if hop_accounts.len() % ACCOUNTS_PER_HOP != 0 {
        msg!("MultihopSwap: account count {} is not a multiple of {}", hop_accounts.len(), ACCOUNTS_PER_HOP);
        return Err(AmmError::InvalidAccountOrder.into());
    }
    let hop_count = hop_accounts.len() / ACCOUNTS_PER_HOP;
    if hop_count < MIN_HOPS {
        msg!("MultihopSwap: {} hops, minimum is {}", hop_count, MIN_HOPS);
        return Err(AmmError::InvalidAccountOrder.into());
    }

    let hops: Vec<Hop> = hop_accounts
        .chunks(ACCOUNTS_PER_HOP)
        .map(|window| Hop {
            pool_account: window[0],
            token_in_mint: window[1],
            token_out_mint: window[2],
            vault_in: window[3],
            vault_out: window[4],
            user_in_account: window[5],
            user_out_account: window[6],
        })
        .collect();

    let mut current_amount = amount_in;

    for (index, hop) in hops.iter().enumerate() {
        let mut pool = Pool::unpack_from_slice(&hop.pool_account.data.borrow())?;

        validate_pda(
            hop.pool_account,
            &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref()],
            program_id,
            "Hop pool PDA",
        )?;

        let direction_a_to_b = if *hop.token_in_mint.key == pool.token_a {
            true
        } else if *hop.token_in_mint.key == pool.token_b {
            false
        } else {
            msg!("MultihopSwap: hop {} input mint does not belong to its pool", index);
            return Err(AmmError::InvalidAccountOrder.into());
        };
        if direction_a_to_b && *hop.token_out_mint.key != pool.token_b {
            return Err(AmmError::InvalidAccountOrder.into());
        }
        if !direction_a_to_b && *hop.token_out_mint.key != pool.token_a {
            return Err(AmmError::InvalidAccountOrder.into());
        }

        validate_pda(
            hop.vault_in,
            &[VAULT_SEED_PREFIX, hop.pool_account.key.as_ref(), hop.token_in_mint.key.as_ref()],
            program_id,
            "Hop input vault PDA",
        )?;
        validate_pda(
            hop.vault_out,
            &[VAULT_SEED_PREFIX, hop.pool_account.key.as_ref(), hop.token_out_mint.key.as_ref()],
            program_id,
            "Hop output vault PDA",
        )?;
        validate_writable(hop.pool_account, "Hop pool state")?;
        validate_writable(hop.vault_in, "Hop input vault")?;
        validate_writable(hop.vault_out, "Hop output vault")?;
        validate_writable(hop.user_in_account, "Hop user input account")?;
        validate_writable(hop.user_out_account, "Hop user output account")?;

        let (reserve_in, reserve_out) = if direction_a_to_b {
            (pool.reserve_a, pool.reserve_b)
        } else {
            (pool.reserve_b, pool.reserve_a)
        };

        let user_input_data = unpack_and_validate_token_account(
            hop.user_in_account,
            "Hop user input account",
            Some(user_authority.key),
            Some(hop.token_in_mint.key),
        )?;
        if user_input_data.amount < current_amount {
            msg!(
                "MultihopSwap: hop {} user holds {} of the input token, needs {}",
                index,
                user_input_data.amount,
                current_amount
            );
            return Err(AmmError::InsufficientInputBalance.into());
        }

        let swap = math::compute_swap_output(current_amount, reserve_in, reserve_out)?;
        let is_final_hop = index == hops.len() - 1;
        if is_final_hop && swap.amount_out < minimum_amount_out {
            msg!("MultihopSwap: final hop output {} below minimum {}", swap.amount_out, minimum_amount_out);
            return Err(AmmError::SlippageExceeded.into());
        }
        if swap.amount_out == 0 {
            return Err(AmmError::ZeroOutput.into());
        }

        let k_before = (reserve_in as u128) * (reserve_out as u128);
        let k_after = (swap.new_reserve_in as u128) * (swap.new_reserve_out as u128);
        if k_after < k_before {
            msg!("MultihopSwap: hop {} constant-product invariant would decrease", index);
            return Err(AmmError::InvariantBroken.into());
        }

        token::transfer_signed(token_program, hop.user_in_account, hop.vault_in, user_authority, current_amount)?;

        let bump = [pool.bump];
        let pool_seeds: &[&[u8]] = &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref(), &bump];
        token::transfer_pda_signed(token_program, hop.vault_out, hop.user_out_account, hop.pool_account, swap.amount_out, pool_seeds)?;

        if direction_a_to_b {
            pool.reserve_a = swap.new_reserve_in;
            pool.reserve_b = swap.new_reserve_out;
            pool.fee_collected_a = pool.fee_collected_a.checked_add(swap.fee_in).ok_or(AmmError::MathOverflow)?;
        } else {
            pool.reserve_b = swap.new_reserve_in;
            pool.reserve_a = swap.new_reserve_out;
            pool.fee_collected_b = pool.fee_collected_b.checked_add(swap.fee_in).ok_or(AmmError::MathOverflow)?;
        }
        pool.pack_into_slice(&mut hop.pool_account.data.borrow_mut());

        msg!("MultihopSwap: hop {} {} in, {} out", index, current_amount, swap.amount_out);
        current_amount = swap.amount_out;
    }

    msg!("MultihopSwap: route complete, {} in, {} out across {} hops", amount_in, current_amount, hop_count);
    Ok(())
}
