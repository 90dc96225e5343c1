//! Native-asset (SOL-paired) pool state machine (§4.4).
//!
//! Lamport inflows from the user are ordinary system-program transfers;
//! lamport outflows are direct balance writes on the program-owned pool
//! account, since no system transfer can move lamports out of a
//! non-system-owned account (§9, "Native-lamport transfers").

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program::{invoke, invoke_signed};
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;
use solana_program::rent::Rent;
use solana_program::sysvar::Sysvar;

use crate::constants::{
    LP_MINT_DECIMALS, NATIVE_LP_MINT_SEED_PREFIX, NATIVE_POOL_SEED_PREFIX, NATIVE_VAULT_SEED_PREFIX,
};
use crate::math;
use crate::state::NativePool;
use crate::token;
use crate::types::error::AmmError;
use crate::utils::rent::validate_native_reserve_floor;
use crate::utils::validation::{
    unpack_and_validate_token_account, validate_owned_by_program, validate_pda, validate_signer, validate_writable,
};

/// # Account order
/// 0. Payer / user authority (signer, writable)
/// 1. Pool state PDA (writable, uninitialized) — also holds lamport reserve
/// 2. Token mint
/// 3. Token vault PDA (writable, uninitialized)
/// 4. LP mint PDA (writable, uninitialized)
/// 5. User's token account (writable)
/// 6. User's LP token account (writable, uninitialized, signer — the
///    LP mint does not exist before this instruction runs)
/// 7. SPL Token program
/// 8. System program
/// 9. Rent sysvar
pub fn process_init_native_pool(program_id: &Pubkey, accounts: &[AccountInfo], amount_sol: u64, amount_token: u64) -> ProgramResult {
    if amount_sol == 0 || amount_token == 0 {
        msg!("InitNativeSOLPool: both amounts must be positive");
        return Err(AmmError::InsufficientLiquidity.into());
    }

    let iter = &mut accounts.iter();
    let payer = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_mint = next_account_info(iter)?;
    let token_vault = next_account_info(iter)?;
    let lp_mint = next_account_info(iter)?;
    let user_token_account = next_account_info(iter)?;
    let user_lp_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;
    let system_program = next_account_info(iter)?;
    let rent_sysvar = next_account_info(iter)?;

    validate_signer(payer, "Payer")?;
    validate_writable(payer, "Payer")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(token_vault, "Token vault")?;
    validate_writable(lp_mint, "LP mint")?;
    validate_writable(user_token_account, "User token account")?;
    validate_writable(user_lp_account, "User LP account")?;

    if pool_account.owner == program_id {
        msg!("InitNativeSOLPool: pool already initialized");
        return Err(AmmError::PoolAlreadyInitialized.into());
    }

    let pool_bump = validate_pda(
        pool_account,
        &[NATIVE_POOL_SEED_PREFIX, token_mint.key.as_ref()],
        program_id,
        "Native pool PDA",
    )?;
    let pool_bump_arr = [pool_bump];
    let pool_seeds: &[&[u8]] = &[NATIVE_POOL_SEED_PREFIX, token_mint.key.as_ref(), &pool_bump_arr];

    let vault_bump = validate_pda(
        token_vault,
        &[NATIVE_VAULT_SEED_PREFIX, pool_account.key.as_ref(), token_mint.key.as_ref()],
        program_id,
        "Native vault PDA",
    )?;
    let vault_bump_arr = [vault_bump];
    let vault_seeds: &[&[u8]] = &[
        NATIVE_VAULT_SEED_PREFIX,
        pool_account.key.as_ref(),
        token_mint.key.as_ref(),
        &vault_bump_arr,
    ];

    let lp_mint_bump = validate_pda(lp_mint, &[NATIVE_LP_MINT_SEED_PREFIX, pool_account.key.as_ref()], program_id, "Native LP mint PDA")?;
    let lp_mint_bump_arr = [lp_mint_bump];
    let lp_mint_seeds: &[&[u8]] = &[NATIVE_LP_MINT_SEED_PREFIX, pool_account.key.as_ref(), &lp_mint_bump_arr];

    let rent = Rent::get()?;
    let pool_rent_exempt = rent.minimum_balance(NativePool::LEN);
    let pool_lamports = pool_rent_exempt.checked_add(amount_sol).ok_or(AmmError::MathOverflow)?;

    invoke_signed(
        &solana_program::system_instruction::create_account(
            payer.key,
            pool_account.key,
            pool_lamports,
            NativePool::LEN as u64,
            program_id,
        ),
        &[payer.clone(), pool_account.clone(), system_program.clone()],
        &[pool_seeds],
    )?;

    token::create_and_initialize_token_account(
        system_program,
        token_program,
        payer,
        token_vault,
        token_mint,
        pool_account.key,
        rent_sysvar,
        rent.minimum_balance(spl_token::state::Account::LEN),
        vault_seeds,
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

    token::transfer_signed(token_program, user_token_account, token_vault, payer, amount_token)?;

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

    let deposit = math::compute_deposit(amount_sol, amount_token, 0, 0, 0)?;

    token::mint_to_pda_signed(
        token_program,
        lp_mint,
        user_lp_account,
        pool_account,
        deposit.minted_shares,
        pool_seeds,
    )?;

    let pool = NativePool {
        native_marker: solana_program::system_program::id(),
        token_mint: *token_mint.key,
        bump: pool_bump,
        reserve_sol: amount_sol,
        reserve_token: amount_token,
        total_lp_supply: deposit.minted_shares,
        fee_collected_sol: 0,
        fee_collected_token: 0,
        fee_treasury: *payer.key,
    };
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!(
        "InitNativeSOLPool: created for mint {}, reserves ({}, {}), minted {} LP",
        token_mint.key,
        amount_sol,
        amount_token,
        deposit.minted_shares
    );
    Ok(())
}

fn load_native_pool(
    program_id: &Pubkey,
    pool_account: &AccountInfo,
    token_vault: &AccountInfo,
) -> Result<NativePool, solana_program::program_error::ProgramError> {
    validate_owned_by_program(pool_account, program_id, "Native pool state")?;
    let pool = NativePool::unpack_from_slice(&pool_account.data.borrow())?;

    validate_pda(
        pool_account,
        &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref()],
        program_id,
        "Native pool PDA",
    )?;
    validate_pda(
        token_vault,
        &[NATIVE_VAULT_SEED_PREFIX, pool_account.key.as_ref(), pool.token_mint.as_ref()],
        program_id,
        "Native vault PDA",
    )?;
    Ok(pool)
}

/// # Account order
/// 0. User authority (signer, writable)
/// 1. Pool state PDA (writable)
/// 2. Token vault PDA (writable)
/// 3. User's token account (writable)
/// 4. SPL Token program
/// 5. System program
pub fn process_swap_native_sol_to_token(program_id: &Pubkey, accounts: &[AccountInfo], amount_in: u64, minimum_amount_out: u64) -> ProgramResult {
    let iter = &mut accounts.iter();
    let user_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_vault = next_account_info(iter)?;
    let user_token_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;
    let system_program = next_account_info(iter)?;

    validate_signer(user_authority, "User authority")?;
    validate_writable(user_authority, "User authority")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(token_vault, "Token vault")?;
    validate_writable(user_token_account, "User token account")?;
    let mut pool = load_native_pool(program_id, pool_account, token_vault)?;

    let swap = math::compute_swap_output(amount_in, pool.reserve_sol, pool.reserve_token)?;
    if swap.amount_out < minimum_amount_out {
        msg!("SwapNativeSOLToToken: {} < minimum {}", swap.amount_out, minimum_amount_out);
        return Err(AmmError::SlippageExceeded.into());
    }
    if swap.amount_out == 0 {
        return Err(AmmError::ZeroOutput.into());
    }

    let k_before = (pool.reserve_sol as u128) * (pool.reserve_token as u128);
    let k_after = (swap.new_reserve_in as u128) * (swap.new_reserve_out as u128);
    if k_after < k_before {
        msg!("SwapNativeSOLToToken: constant-product invariant would decrease");
        return Err(AmmError::InvariantBroken.into());
    }

    invoke(
        &solana_program::system_instruction::transfer(user_authority.key, pool_account.key, amount_in),
        &[user_authority.clone(), pool_account.clone(), system_program.clone()],
    )?;

    let bump = [pool.bump];
    let pool_seeds: &[&[u8]] = &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref(), &bump];
    token::transfer_pda_signed(token_program, token_vault, user_token_account, pool_account, swap.amount_out, pool_seeds)?;

    pool.reserve_sol = swap.new_reserve_in;
    pool.reserve_token = swap.new_reserve_out;
    pool.fee_collected_sol = pool.fee_collected_sol.checked_add(swap.fee_in).ok_or(AmmError::MathOverflow)?;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("SwapNativeSOLToToken: {} lamports in, {} tokens out", amount_in, swap.amount_out);
    Ok(())
}

/// # Account order
/// 0. User authority (signer, writable)
/// 1. Pool state PDA (writable)
/// 2. Token vault PDA (writable)
/// 3. User's token account (writable)
/// 4. SPL Token program
pub fn process_swap_token_to_native_sol(program_id: &Pubkey, accounts: &[AccountInfo], amount_in: u64, minimum_amount_out: u64) -> ProgramResult {
    let iter = &mut accounts.iter();
    let user_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_vault = next_account_info(iter)?;
    let user_token_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_signer(user_authority, "User authority")?;
    validate_writable(user_authority, "User authority")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(token_vault, "Token vault")?;
    validate_writable(user_token_account, "User token account")?;
    let mut pool = load_native_pool(program_id, pool_account, token_vault)?;

    let user_token_data = unpack_and_validate_token_account(
        user_token_account,
        "User token account",
        Some(user_authority.key),
        Some(&pool.token_mint),
    )?;
    if user_token_data.amount < amount_in {
        msg!("SwapTokenToNativeSOL: user holds {} of the token, needs {}", user_token_data.amount, amount_in);
        return Err(AmmError::InsufficientInputBalance.into());
    }

    let swap = math::compute_swap_output(amount_in, pool.reserve_token, pool.reserve_sol)?;
    if swap.amount_out < minimum_amount_out {
        msg!("SwapTokenToNativeSOL: {} < minimum {}", swap.amount_out, minimum_amount_out);
        return Err(AmmError::SlippageExceeded.into());
    }
    if swap.amount_out == 0 {
        return Err(AmmError::ZeroOutput.into());
    }

    let k_before = (pool.reserve_token as u128) * (pool.reserve_sol as u128);
    let k_after = (swap.new_reserve_in as u128) * (swap.new_reserve_out as u128);
    if k_after < k_before {
        msg!("SwapTokenToNativeSOL: constant-product invariant would decrease");
        return Err(AmmError::InvariantBroken.into());
    }

    token::transfer_signed(token_program, user_token_account, token_vault, user_authority, amount_in)?;

    let rent = Rent::get()?;
    let rent_exempt_minimum = rent.minimum_balance(pool_account.data_len());
    let new_reserve_sol = swap.new_reserve_out;
    validate_native_reserve_floor(
        pool_account
            .lamports()
            .checked_sub(swap.amount_out)
            .ok_or(AmmError::MathOverflow)?,
        rent_exempt_minimum,
        new_reserve_sol,
    )?;

    **pool_account.try_borrow_mut_lamports()? = pool_account
        .lamports()
        .checked_sub(swap.amount_out)
        .ok_or(AmmError::MathOverflow)?;
    **user_authority.try_borrow_mut_lamports()? = user_authority
        .lamports()
        .checked_add(swap.amount_out)
        .ok_or(AmmError::MathOverflow)?;

    pool.reserve_token = swap.new_reserve_in;
    pool.reserve_sol = new_reserve_sol;
    pool.fee_collected_token = pool.fee_collected_token.checked_add(swap.fee_in).ok_or(AmmError::MathOverflow)?;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("SwapTokenToNativeSOL: {} tokens in, {} lamports out", amount_in, swap.amount_out);
    Ok(())
}

/// # Account order
/// 0. User authority (signer, writable)
/// 1. Pool state PDA (writable)
/// 2. Token vault PDA (writable)
/// 3. LP mint PDA (writable)
/// 4. User's token account (writable)
/// 5. User's LP token account (writable)
/// 6. SPL Token program
/// 7. System program
pub fn process_add_liquidity_native_sol(program_id: &Pubkey, accounts: &[AccountInfo], amount_sol: u64, amount_token: u64) -> ProgramResult {
    let iter = &mut accounts.iter();
    let user_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_vault = next_account_info(iter)?;
    let lp_mint = next_account_info(iter)?;
    let user_token_account = next_account_info(iter)?;
    let user_lp_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;
    let system_program = next_account_info(iter)?;

    validate_signer(user_authority, "User authority")?;
    validate_writable(user_authority, "User authority")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(token_vault, "Token vault")?;
    validate_writable(lp_mint, "LP mint")?;
    validate_writable(user_token_account, "User token account")?;
    validate_writable(user_lp_account, "User LP account")?;
    let mut pool = load_native_pool(program_id, pool_account, token_vault)?;
    validate_pda(lp_mint, &[NATIVE_LP_MINT_SEED_PREFIX, pool_account.key.as_ref()], program_id, "Native LP mint PDA")?;

    let user_token_data = unpack_and_validate_token_account(
        user_token_account,
        "User token account",
        Some(user_authority.key),
        Some(&pool.token_mint),
    )?;
    if user_token_data.amount < amount_token {
        msg!("AddLiquidityNativeSOL: user holds {} of the token, needs {}", user_token_data.amount, amount_token);
        return Err(AmmError::InsufficientInputBalance.into());
    }

    let deposit = math::compute_deposit(amount_sol, amount_token, pool.reserve_sol, pool.reserve_token, pool.total_lp_supply)?;

    invoke(
        &solana_program::system_instruction::transfer(user_authority.key, pool_account.key, deposit.actual_a),
        &[user_authority.clone(), pool_account.clone(), system_program.clone()],
    )?;
    token::transfer_signed(token_program, user_token_account, token_vault, user_authority, deposit.actual_b)?;

    let bump = [pool.bump];
    let pool_seeds: &[&[u8]] = &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref(), &bump];
    token::mint_to_pda_signed(token_program, lp_mint, user_lp_account, pool_account, deposit.minted_shares, pool_seeds)?;

    pool.reserve_sol = pool.reserve_sol.checked_add(deposit.actual_a).ok_or(AmmError::MathOverflow)?;
    pool.reserve_token = pool.reserve_token.checked_add(deposit.actual_b).ok_or(AmmError::MathOverflow)?;
    pool.total_lp_supply = pool.total_lp_supply.checked_add(deposit.minted_shares).ok_or(AmmError::MathOverflow)?;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!(
        "AddLiquidityNativeSOL: deposited ({}, {}), minted {} LP",
        deposit.actual_a,
        deposit.actual_b,
        deposit.minted_shares
    );
    Ok(())
}

/// # Account order
/// 0. User authority (signer, writable)
/// 1. Pool state PDA (writable)
/// 2. Token vault PDA (writable)
/// 3. LP mint PDA (writable)
/// 4. User's token account (writable)
/// 5. User's LP token account (writable)
/// 6. SPL Token program
pub fn process_remove_liquidity_native_sol(program_id: &Pubkey, accounts: &[AccountInfo], lp_amount: u64) -> ProgramResult {
    let iter = &mut accounts.iter();
    let user_authority = next_account_info(iter)?;
    let pool_account = next_account_info(iter)?;
    let token_vault = next_account_info(iter)?;
    let lp_mint = next_account_info(iter)?;
    let user_token_account = next_account_info(iter)?;
    let user_lp_account = next_account_info(iter)?;
    let token_program = next_account_info(iter)?;

    validate_signer(user_authority, "User authority")?;
    validate_writable(user_authority, "User authority")?;
    validate_writable(pool_account, "Pool state")?;
    validate_writable(token_vault, "Token vault")?;
    validate_writable(lp_mint, "LP mint")?;
    validate_writable(user_token_account, "User token account")?;
    validate_writable(user_lp_account, "User LP account")?;
    let mut pool = load_native_pool(program_id, pool_account, token_vault)?;
    validate_pda(lp_mint, &[NATIVE_LP_MINT_SEED_PREFIX, pool_account.key.as_ref()], program_id, "Native LP mint PDA")?;

    let user_lp_data = unpack_and_validate_token_account(
        user_lp_account,
        "User LP account",
        Some(user_authority.key),
        Some(lp_mint.key),
    )?;
    if user_lp_data.amount < lp_amount {
        return Err(AmmError::InsufficientLPBalance.into());
    }

    let redeem = math::compute_redeem(lp_amount, pool.reserve_sol, pool.reserve_token, pool.total_lp_supply)?;

    token::burn_signed(token_program, user_lp_account, lp_mint, user_authority, lp_amount)?;

    let rent = Rent::get()?;
    let rent_exempt_minimum = rent.minimum_balance(pool_account.data_len());
    let new_reserve_sol = pool.reserve_sol.checked_sub(redeem.payout_a).ok_or(AmmError::MathOverflow)?;
    validate_native_reserve_floor(
        pool_account
            .lamports()
            .checked_sub(redeem.payout_a)
            .ok_or(AmmError::MathOverflow)?,
        rent_exempt_minimum,
        new_reserve_sol,
    )?;

    **pool_account.try_borrow_mut_lamports()? = pool_account
        .lamports()
        .checked_sub(redeem.payout_a)
        .ok_or(AmmError::MathOverflow)?;
    **user_authority.try_borrow_mut_lamports()? = user_authority
        .lamports()
        .checked_add(redeem.payout_a)
        .ok_or(AmmError::MathOverflow)?;

    let bump = [pool.bump];
    let pool_seeds: &[&[u8]] = &[NATIVE_POOL_SEED_PREFIX, pool.token_mint.as_ref(), &bump];
    token::transfer_pda_signed(token_program, token_vault, user_token_account, pool_account, redeem.payout_b, pool_seeds)?;

    pool.reserve_sol = new_reserve_sol;
    pool.reserve_token = pool.reserve_token.checked_sub(redeem.payout_b).ok_or(AmmError::MathOverflow)?;
    pool.total_lp_supply = pool.total_lp_supply.checked_sub(lp_amount).ok_or(AmmError::MathOverflow)?;
    pool.pack_into_slice(&mut pool_account.data.borrow_mut());

    msg!("RemoveLiquidityNativeSOL: burned {} LP, paid out ({}, {})", lp_amount, redeem.payout_a, redeem.payout_b);
    Ok(())
}
