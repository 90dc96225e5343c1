//! Fungible-token adapter.
//!
//! Thin `invoke`/`invoke_signed` wrappers over `spl_token::instruction`,
//! the program's only collaborator for moving fungible-token balances
//! (§1, "fungible-token service").

use solana_program::account_info::AccountInfo;
use solana_program::entrypoint::ProgramResult;
use solana_program::program::{invoke, invoke_signed};
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;

/// Transfers `amount` from `source` to `destination`, authorized by a
/// plain signer (a user's own token account).
pub fn transfer_signed<'a>(
    token_program: &AccountInfo<'a>,
    source: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    invoke(
        &spl_token::instruction::transfer(
            token_program.key,
            source.key,
            destination.key,
            authority.key,
            &[],
            amount,
        )?,
        &[source.clone(), destination.clone(), authority.clone(), token_program.clone()],
    )
}

/// Transfers `amount` from `source` to `destination`, authorized by a
/// pool PDA signing with its seed set (vault outflows).
pub fn transfer_pda_signed<'a>(
    token_program: &AccountInfo<'a>,
    source: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    pool_authority: &AccountInfo<'a>,
    amount: u64,
    pool_seeds: &[&[u8]],
) -> ProgramResult {
    invoke_signed(
        &spl_token::instruction::transfer(
            token_program.key,
            source.key,
            destination.key,
            pool_authority.key,
            &[],
            amount,
        )?,
        &[source.clone(), destination.clone(), pool_authority.clone(), token_program.clone()],
        &[pool_seeds],
    )
}

/// Mints `amount` of LP tokens to `destination`, authorized by the pool
/// PDA signing with its seed set.
pub fn mint_to_pda_signed<'a>(
    token_program: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    pool_authority: &AccountInfo<'a>,
    amount: u64,
    pool_seeds: &[&[u8]],
) -> ProgramResult {
    invoke_signed(
        &spl_token::instruction::mint_to(
            token_program.key,
            mint.key,
            destination.key,
            pool_authority.key,
            &[],
            amount,
        )?,
        &[mint.clone(), destination.clone(), pool_authority.clone(), token_program.clone()],
        &[pool_seeds],
    )
}

/// Burns `amount` of LP tokens from `source`, authorized by the user
/// who owns that account.
pub fn burn_signed<'a>(
    token_program: &AccountInfo<'a>,
    source: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    invoke(
        &spl_token::instruction::burn(
            token_program.key,
            source.key,
            mint.key,
            authority.key,
            &[],
            amount,
        )?,
        &[source.clone(), mint.clone(), authority.clone(), token_program.clone()],
    )
}

/// Creates `account` as a system account sized and rent-funded for a
/// fungible-token account, then initializes it for `mint` under
/// `owner`.
pub fn create_and_initialize_token_account<'a>(
    system_program: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    payer: &AccountInfo<'a>,
    account: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    owner: &Pubkey,
    rent_sysvar: &AccountInfo<'a>,
    lamports: u64,
    account_seeds: &[&[u8]],
) -> ProgramResult {
    invoke_signed(
        &solana_program::system_instruction::create_account(
            payer.key,
            account.key,
            lamports,
            spl_token::state::Account::LEN as u64,
            token_program.key,
        ),
        &[payer.clone(), account.clone(), system_program.clone()],
        &[account_seeds],
    )?;

    invoke(
        &spl_token::instruction::initialize_account(
            token_program.key,
            account.key,
            mint.key,
            owner,
        )?,
        &[account.clone(), mint.clone(), rent_sysvar.clone(), token_program.clone()],
    )
}

/// Creates `account` as a system account sized and rent-funded for a
/// fungible-token account, then initializes it for `mint` under
/// `owner`. Unlike [`create_and_initialize_token_account`], `account`
/// is a plain keypair (it signs its own `create_account`), used for a
/// user's brand-new LP token account created in the same instruction
/// that first brings the LP mint into existence.
pub fn create_and_initialize_user_token_account<'a>(
    system_program: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    payer: &AccountInfo<'a>,
    account: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    owner: &Pubkey,
    rent_sysvar: &AccountInfo<'a>,
    lamports: u64,
) -> ProgramResult {
    invoke(
        &solana_program::system_instruction::create_account(
            payer.key,
            account.key,
            lamports,
            spl_token::state::Account::LEN as u64,
            token_program.key,
        ),
        &[payer.clone(), account.clone(), system_program.clone()],
    )?;

    invoke(
        &spl_token::instruction::initialize_account(
            token_program.key,
            account.key,
            mint.key,
            owner,
        )?,
        &[account.clone(), mint.clone(), rent_sysvar.clone(), token_program.clone()],
    )
}

/// Creates `mint` as a system account sized and rent-funded for an SPL
/// mint, then initializes it with `decimals` and `mint_authority`.
pub fn create_and_initialize_mint<'a>(
    system_program: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    payer: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    mint_authority: &Pubkey,
    rent_sysvar: &AccountInfo<'a>,
    decimals: u8,
    lamports: u64,
    mint_seeds: &[&[u8]],
) -> ProgramResult {
    invoke_signed(
        &solana_program::system_instruction::create_account(
            payer.key,
            mint.key,
            lamports,
            spl_token::state::Mint::LEN as u64,
            token_program.key,
        ),
        &[payer.clone(), mint.clone(), system_program.clone()],
        &[mint_seeds],
    )?;

    invoke(
        &spl_token::instruction::initialize_mint(
            token_program.key,
            mint.key,
            mint_authority,
            None,
            decimals,
        )?,
        &[mint.clone(), rent_sysvar.clone(), token_program.clone()],
    )
}
