//! Read-only view handlers (§4.7).
//!
//! Each handler deserializes the named account(s) and emits a
//! structured `msg!` log; none mutate state. Per §7 ("User-visible
//! behavior"), a missing or corrupt account is reported via log only —
//! these never fail the instruction, so off-chain callers can probe for
//! existence without juggling error codes.

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;

use crate::math;
use crate::state::{NativePool, Pool};

/// # Account order
/// 0. Pool state PDA
pub fn process_get_pool_info(accounts: &[AccountInfo]) -> ProgramResult {
    let iter = &mut accounts.iter();
    let pool_account = next_account_info(iter)?;

    let data = pool_account.data.borrow();
    match Pool::unpack_from_slice(&data) {
        Ok(pool) => {
            msg!("GetPoolInfo: pool {}", pool_account.key);
            msg!("  token_a={} token_b={}", pool.token_a, pool.token_b);
            msg!("  reserve_a={} reserve_b={}", pool.reserve_a, pool.reserve_b);
            msg!("  total_lp_supply={}", pool.total_lp_supply);
            msg!("  fee_collected_a={} fee_collected_b={}", pool.fee_collected_a, pool.fee_collected_b);
            msg!("  fee_treasury={}", pool.fee_treasury);
        }
        Err(_) => {
            msg!("GetPoolInfo: account {} is not a valid pool", pool_account.key);
        }
    }
    Ok(())
}

/// No registry of pools is kept on-chain — pool PDAs are derived
/// per-pair, not indexed — so enumeration is an off-chain concern via
/// `getProgramAccounts` filtered on this program id and `Pool::LEN`.
pub fn process_get_total_pools() -> ProgramResult {
    msg!("GetTotalPools: this program keeps no on-chain pool registry");
    msg!("GetTotalPools: enumerate via getProgramAccounts filtered by program id and account size {}", Pool::LEN);
    Ok(())
}

/// # Account order
/// none (target mint is carried in the instruction payload)
pub fn process_find_pools_by_token(target: Pubkey) -> ProgramResult {
    msg!("FindPoolsByToken: this program keeps no on-chain pool registry");
    msg!("FindPoolsByToken: enumerate via getProgramAccounts, filter decoded pools where token_a == {} or token_b == {}", target, target);
    Ok(())
}

/// # Account order
/// 0. Pool state PDA
pub fn process_get_swap_quote(accounts: &[AccountInfo], amount_in: u64, token_in: Pubkey) -> ProgramResult {
    let iter = &mut accounts.iter();
    let pool_account = next_account_info(iter)?;

    let data = pool_account.data.borrow();
    let pool = match Pool::unpack_from_slice(&data) {
        Ok(pool) => pool,
        Err(_) => {
            msg!("GetSwapQuote: account {} is not a valid pool", pool_account.key);
            return Ok(());
        }
    };

    let Some((reserve_in, reserve_out, _)) = pool.reserves_for_input(&token_in) else {
        msg!("GetSwapQuote: {} is not a side of pool {}", token_in, pool_account.key);
        return Ok(());
    };

    match math::compute_swap_output(amount_in, reserve_in, reserve_out) {
        Ok(quote) => {
            msg!("GetSwapQuote: pool {} amount_in={} amount_out={}", pool_account.key, amount_in, quote.amount_out);
            msg!("  fee_in={} reserve_in'={} reserve_out'={}", quote.fee_in, quote.new_reserve_in, quote.new_reserve_out);
            if reserve_in > 0 && reserve_out > 0 {
                msg!("  spot_rate={}/{}", reserve_out, reserve_in);
            }
        }
        Err(err) => {
            msg!("GetSwapQuote: quote computation failed: {:?}", err);
        }
    }
    Ok(())
}

/// `MultihopSwapWithPath`/`GetMultihopQuote` are reserved opcodes (§6) —
/// no wire payload is defined for them yet.
pub fn process_get_multihop_quote() -> ProgramResult {
    msg!("GetMultihopQuote: reserved, not yet wired to a payload format");
    Ok(())
}

/// # Account order
/// 0. Native pool state PDA
pub fn process_get_native_pool_info(accounts: &[AccountInfo]) -> ProgramResult {
    let iter = &mut accounts.iter();
    let pool_account = next_account_info(iter)?;

    let data = pool_account.data.borrow();
    match NativePool::unpack_from_slice(&data) {
        Ok(pool) => {
            msg!("GetNativeSOLPoolInfo: pool {}", pool_account.key);
            msg!("  token_mint={}", pool.token_mint);
            msg!("  reserve_sol={} reserve_token={}", pool.reserve_sol, pool.reserve_token);
            msg!("  total_lp_supply={}", pool.total_lp_supply);
            msg!("  fee_collected_sol={} fee_collected_token={}", pool.fee_collected_sol, pool.fee_collected_token);
            msg!("  fee_treasury={}", pool.fee_treasury);
        }
        Err(_) => {
            msg!("GetNativeSOLPoolInfo: account {} is not a valid native pool", pool_account.key);
        }
    }
    Ok(())
}

/// # Account order
/// 0. Native pool state PDA
pub fn process_get_native_swap_quote(accounts: &[AccountInfo], amount_in: u64, is_sol_to_token: bool) -> ProgramResult {
    let iter = &mut accounts.iter();
    let pool_account = next_account_info(iter)?;

    let data = pool_account.data.borrow();
    let pool = match NativePool::unpack_from_slice(&data) {
        Ok(pool) => pool,
        Err(_) => {
            msg!("GetNativeSOLSwapQuote: account {} is not a valid native pool", pool_account.key);
            return Ok(());
        }
    };

    let (reserve_in, reserve_out) = if is_sol_to_token {
        (pool.reserve_sol, pool.reserve_token)
    } else {
        (pool.reserve_token, pool.reserve_sol)
    };

    match math::compute_swap_output(amount_in, reserve_in, reserve_out) {
        Ok(quote) => {
            msg!("GetNativeSOLSwapQuote: pool {} amount_in={} amount_out={}", pool_account.key, amount_in, quote.amount_out);
            msg!("  fee_in={} reserve_in'={} reserve_out'={}", quote.fee_in, quote.new_reserve_in, quote.new_reserve_out);
            if reserve_in > 0 && reserve_out > 0 {
                msg!("  spot_rate={}/{}", reserve_out, reserve_in);
            }
        }
        Err(err) => {
            msg!("GetNativeSOLSwapQuote: quote computation failed: {:?}", err);
        }
    }
    Ok(())
}
