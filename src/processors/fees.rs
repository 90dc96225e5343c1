//! Fee ledger operations (§4.6): `CollectFees`, `SetFeeTreasury`,
//! `WithdrawFees`, and their native-pool counterparts.
//!
//! Per §9 ("Fee accounting vs. reserve mirroring"), the fee accumulators
//! are a read-only annotation of how much of the vault balance is
//! attributable to retained fees; the worked example S5 is the contract
//! this module follows: collecting or withdrawing fees moves tokens out
//! of the vault but leaves cached reserves untouched.

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;

use crate::constants::{NATIVE_POOL_SEED_PREFIX, NATIVE_VAULT_SEED_PREFIX, POOL_SEED_PREFIX, VAULT_SEED_PREFIX};
use crate::state::{NativePool, Pool};
use crate::token;
use crate::types::error::AmmError;
use crate::utils::validation::{validate_owned_by_program, validate_pda, validate_signer, validate_writable};

fn require_treasury(signer: &AccountInfo, treasury: &Pubkey) -> ProgramResult {
    validate_signer(signer, "Treasury")?;
    if signer.key != treasury {
        msg!("caller is not the current fee treasury");
        return Err(AmmError::Unauthorized.into());
    }
    Ok(())
}

/// # Account order (CollectFees / WithdrawFees / SetFeeTreasury)
/// 0. Treasury authority (signer)
/// 1. Pool state PDA (writable)
/// 2. Token A vault PDA (writable)
/// 3. Token B vault PDA (writable)
/// 4. Treasury's token A account (writable)
/// 5. Treasury's token B account (writable)
/// 6. SPL Token program
pub fn process_collect_fees(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let iter = &mut accounts.iter();
    let treasury_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let vault_a = next_account_info(iter)?;
    let vault_b = next_account_info(iter)?;
    let treasury_token_a = next_account_info(iter)?;
    let treasury_token_b = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_owned_by_program(pool_account, program_id, "Pool state")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(vault_a, "Vault A")?;
    validate_writable(vault_b, "Vault B")?;
    validate_writable(treasury_token_a, "Treasury token A account")?;
    validate_writable(treasury_token_b, "Treasury token B account")?;
    let mut pool = Pool::unpack_from_slice(&pool_account.data.borrow())?;
    require_treasury(treasury_authority, &pool.fee_treasury)?;

    validate_pda(
        pool_account,
        &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref()],
        program_id,
        "Pool PDA",
    )?;
    validate_pda(vault_a, &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_a.as_ref()], program_id, "Vault A PDA")?;
    validate_pda(vault_b, &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_b.as_ref()], program_id, "Vault B PDA")?;

    let bump = [pool.bump];
    let pool_seeds: &[&[u8]] = &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref(), &bump];

    let (amount_a, amount_b) = (pool.fee_collected_a, pool.fee_collected_b);
    if amount_a > 0 {
        token::transfer_pda_signed(token_program, vault_a, treasury_token_a, pool_account, amount_a, pool_seeds)?;
    }
    if amount_b > 0 {
        token::transfer_pda_signed(token_program, vault_b, treasury_token_b, pool_account, amount_b, pool_seeds)?;
    }

    pool.fee_collected_a = 0;
    pool.fee_collected_b = 0;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("CollectFees: moved ({}, {}) to treasury", amount_a, amount_b);
    Ok(())
}

pub fn process_withdraw_fees(program_id: &Pubkey, accounts: &[AccountInfo], amount_a: u64, amount_b: u64) -> ProgramResult {
    let iter = &mut accounts.iter();
    let treasury_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let vault_a = next_account_info(iter)?;
    let vault_b = next_account_info(iter)?;
    let treasury_token_a = next_account_info(iter)?;
    let treasury_token_b = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_owned_by_program(pool_account, program_id, "Pool state")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(vault_a, "Vault A")?;
    validate_writable(vault_b, "Vault B")?;
    validate_writable(treasury_token_a, "Treasury token A account")?;
    validate_writable(treasury_token_b, "Treasury token B account")?;
    let mut pool = Pool::unpack_from_slice(&pool_account.data.borrow())?;
    require_treasury(treasury_authority, &pool.fee_treasury)?;

    if amount_a > pool.fee_collected_a || amount_b > pool.fee_collected_b {
        msg!("WithdrawFees: requested ({}, {}) exceeds accumulators ({}, {})", amount_a, amount_b, pool.fee_collected_a, pool.fee_collected_b);
        return Err(AmmError::InsufficientLiquidity.into());
    }

    validate_pda(
        pool_account,
        &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref()],
        program_id,
        "Pool PDA",
    )?;
    validate_pda(vault_a, &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_a.as_ref()], program_id, "Vault A PDA")?;
    validate_pda(vault_b, &[VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_b.as_ref()], program_id, "Vault B PDA")?;

    let bump = [pool.bump];
    let pool_seeds: &[&[u8]] = &[POOL_SEED_PREFIX, pool.token_a.as_ref(), pool.token_b.as_ref(), &bump];

    if amount_a > 0 {
        token::transfer_pda_signed(token_program, vault_a, treasury_token_a, pool_account, amount_a, pool_seeds)?;
    }
    if amount_b > 0 {
        token::transfer_pda_signed(token_program, vault_b, treasury_token_b, pool_account, amount_b, pool_seeds)?;
    }

    pool.fee_collected_a -= amount_a;
    pool.fee_collected_b -= amount_b;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("WithdrawFees: withdrew ({}, {})", amount_a, amount_b);
    Ok(())
}

/// # Account order
/// 0. Treasury authority (signer)
/// 1. Pool state PDA (writable)
pub fn process_set_fee_treasury(program_id: &Pubkey, accounts: &[AccountInfo], new_treasury: Pubkey) -> ProgramResult {
    let iter = &mut accounts.iter();
    let treasury_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;

    validate_owned_by_program(pool_account, program_id, "Pool state")?;
    validate_writable(pool_account, "Pool state")?;
    let mut pool = Pool::unpack_from_slice(&pool_account.data.borrow())?;
    require_treasury(treasury_authority, &pool.fee_treasury)?;

    pool.fee_treasury = new_treasury;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("SetFeeTreasury: updated to {}", new_treasury);
    Ok(())
}

/// # Account order (native-pool fee ops)
/// 0. Treasury authority (signer)
/// 1. Pool state PDA (writable)
/// 2. Token vault PDA (writable)
/// 3. Treasury's token account (writable)
/// 4. SPL Token program
pub fn process_collect_fees_native(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let iter = &mut accounts.iter();
    let treasury_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_vault = next_account_info(iter)?;
    let treasury_token_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_owned_by_program(pool_account, program_id, "Native pool state")?;
    validate_writable(pool_account, "Native pool state")?;
    validate_writable(token_vault, "Token vault")?;
    validate_writable(treasury_authority, "Treasury authority")?;
    validate_writable(treasury_token_account, "Treasury token account")?;
    let mut pool = NativePool::unpack_from_slice(&pool_account.data.borrow())?;
    require_treasury(treasury_authority, &pool.fee_treasury)?;

    validate_pda(pool_account, &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref()], program_id, "Native pool PDA")?;
    validate_pda(
        token_vault,
        &[NATIVE_VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_mint.as_ref()],
        program_id,
        "Native vault PDA",
    )?;

    let sol_amount = pool.fee_collected_sol;
    let token_amount = pool.fee_collected_token;

    if sol_amount > 0 {
        **pool_account.try_borrow_mut_lamports()? = pool_account.lamports().checked_sub(sol_amount).ok_or(AmmError::MathOverflow)?;
        **treasury_authority.try_borrow_mut_lamports()? =
            treasury_authority.lamports().checked_add(sol_amount).ok_or(AmmError::MathOverflow)?;
    }
    if token_amount > 0 {
        let bump = [pool.bump];
        let pool_seeds: &[&[u8]] = &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref(), &bump];
        token::transfer_pda_signed(token_program, token_vault, treasury_token_account, pool_account, token_amount, pool_seeds)?;
    }

    pool.fee_collected_sol = 0;
    pool.fee_collected_token = 0;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("CollectFeesNativeSOL: moved ({}, {}) to treasury", sol_amount, token_amount);
    Ok(())
}

pub fn process_withdraw_fees_native(program_id: &Pubkey, accounts: &[AccountInfo], amount_sol: u64, amount_token: u64) -> ProgramResult {
    let iter = &mut accounts.iter();
    let treasury_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_vault = next_account_info(iter)?;
    let treasury_token_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_owned_by_program(pool_account, program_id, "Native pool state")?;
    validate_writable(pool_account, "Native pool state")?;
    validate_writable(token_vault, "Token vault")?;
    validate_writable(treasury_authority, "Treasury authority")?;
    validate_writable(treasury_token_account, "Treasury token account")?;
    let mut pool = NativePool::unpack_from_slice(&pool_account.data.borrow())?;
    require_treasury(treasury_authority, &pool.fee_treasury)?;

    if amount_sol > pool.fee_collected_sol || amount_token > pool.fee_collected_token {
        return Err(AmmError::InsufficientLiquidity.into());
    }

    validate_pda(pool_account, &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref()], program_id, "Native pool PDA")?;
    validate_pda(
        token_vault,
        &[NATIVE_VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_mint.as_ref()],
        program_id,
        "Native vault PDA",
    )?;

    if amount_sol > 0 {
        **pool_account.try_borrow_mut_lamports()? = pool_account.lamports().checked_sub(amount_sol).ok_or(AmmError::MathOverflow)?;
        **treasury_authority.try_borrow_mut_lamports()? =
            treasury_authority.lamports().checked_add(amount_sol).ok_or(AmmError::MathOverflow)?;
    }
    if amount_token > 0 {
        let bump = [pool.bump];
        let pool_seeds: &[&[u8]] = &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref(), &bump];
        token::transfer_pda_signed(token_program, token_vault, treasury_token_account, pool_account, amount_token, pool_seeds)?;
    }

    pool.fee_collected_sol -= amount_sol;
    pool.fee_collected_token -= amount_token;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("WithdrawFeesNativeSOL: withdrew ({}, {})", amount_sol, amount_token);
    Ok(())
}

/// # Account order
/// 0. Treasury authority (signer)
/// 1. Pool state PDA (writable)
pub fn process_set_fee_treasury_native(program_id: &Pubkey, accounts: &[AccountInfo], new_treasury: Pubkey) -> ProgramResult {
    let iter = &mut accounts.iter();
    let treasury_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;

    validate_owned_by_program(pool_account, program_id, "Native pool state")?;
    validate_writable(pool_account, "Native pool state")?;
    let mut pool = NativePool::unpack_from_slice(&pool_account.data.borrow())?;
    require_treasury(treasury_authority, &pool.fee_treasury)?;

    pool.fee_treasury = new_treasury;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("SetFeeTreasuryNativeSOL: updated to {}", new_treasury);
    Ok(())
}
