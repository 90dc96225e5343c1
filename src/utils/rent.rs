//! Rent-exemption helpers shared by the token-token and native-asset
//! pool processors.

use solana_program::account_info::AccountInfo;
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::rent::Rent;

use crate::types::error::AmmError;

/// Validates that `account` currently holds at least the rent-exempt
/// minimum for its data length.
pub fn validate_rent_exempt(account: &AccountInfo, rent: &Rent, context: &str) -> ProgramResult {
    let minimum = rent.minimum_balance(account.data_len());
    if account.lamports() < minimum {
        msg!("{}: below rent-exempt minimum ({} < {})", context, account.lamports(), minimum);
        return Err(AmmError::AccountNotRentExempt.into());
    }
    Ok(())
}

/// Validates that, after accounting for `reserve`, a native-asset pool
/// account's lamports would not drop below its rent floor (§3, §9).
pub fn validate_native_reserve_floor(
    pool_account_lamports: u64,
    rent_exempt_minimum: u64,
    reserve: u64,
) -> ProgramResult {
    let required = rent_exempt_minimum
        .checked_add(reserve)
        .ok_or(AmmError::MathOverflow)?;
    if pool_account_lamports < required {
        msg!(
            "native pool rent floor breached: have {}, need {}",
            pool_account_lamports,
            required
        );
        return Err(AmmError::RentFloorBreached.into());
    }
    Ok(())
}
