//! Shared signer, PDA, and ownership validation helpers used across
//! every processor.

use solana_program::account_info::AccountInfo;
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program_pack::Pack;
use solana_program::pubkey::Pubkey;
use spl_token::state::Account as TokenAccount;

use crate::types::error::AmmError;

/// Validates that `account` signed the transaction.
pub fn validate_signer(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_signer {
        msg!("{} must be a signer", context);
        return Err(AmmError::InvalidAccountOrder.into());
    }
    Ok(())
}

/// Validates that `account` was passed as writable.
pub fn validate_writable(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_writable {
        msg!("{} must be writable", context);
        return Err(AmmError::InvalidAccountOrder.into());
    }
    Ok(())
}

/// Validates that `account`'s address matches the PDA derived from
/// `seeds` under `program_id`, returning the bump on success.
pub fn validate_pda(
    account: &AccountInfo,
    seeds: &[&[u8]],
    program_id: &Pubkey,
    context: &str,
) -> Result<u8, solana_program::program_error::ProgramError> {
    let (expected, bump) = Pubkey::find_program_address(seeds, program_id);
    if *account.key != expected {
        msg!("{}: PDA mismatch, expected {}", context, expected);
        return Err(AmmError::InvalidPDA.into());
    }
    Ok(bump)
}

/// Validates that `account` is owned by this program.
pub fn validate_owned_by_program(
    account: &AccountInfo,
    program_id: &Pubkey,
    context: &str,
) -> ProgramResult {
    if account.owner != program_id {
        msg!("{}: expected program ownership, found {}", context, account.owner);
        return Err(AmmError::InvalidOwner.into());
    }
    Ok(())
}

/// Unpacks `account` as an SPL token account and validates its owner
/// and (optionally) its mint.
pub fn unpack_and_validate_token_account(
    account: &AccountInfo,
    context: &str,
    expected_owner: Option<&Pubkey>,
    expected_mint: Option<&Pubkey>,
) -> Result<TokenAccount, solana_program::program_error::ProgramError> {
    let data = TokenAccount::unpack(&account.data.borrow()).map_err(|_| {
        msg!("{}: failed to unpack token account", context);
        AmmError::InvalidOwner
    })?;

    if let Some(owner) = expected_owner {
        if data.owner != *owner {
            msg!("{}: unexpected token account owner", context);
            return Err(AmmError::InvalidOwner.into());
        }
    }
    if let Some(mint) = expected_mint {
        if data.mint != *mint {
            msg!("{}: unexpected token account mint", context);
            return Err(AmmError::InvalidOwner.into());
        }
    }

    Ok(data)
}
