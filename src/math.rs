//! Constant-product invariant math.
//!
//! Pure functions with no account access, so they are exercised
//! directly by unit tests rather than through `solana-program-test`.
//! Every intermediate product that could exceed `u64` is carried
//! through `u128` and checked back down, per §9 of the specification.

use crate::types::error::AmmError;

/// Numerator/denominator for the 0.3% swap fee (§4.2, step 1).
const FEE_NUMERATOR: u128 = 997;
const FEE_DENOMINATOR: u128 = 1000;

fn to_u64(value: u128) -> Result<u64, AmmError> {
    u64::try_from(value).map_err(|_| AmmError::MathOverflow)
}

/// Integer square root via Newton's method. Six iterations are enough
/// to converge for any 128-bit operand (§9).
pub fn isqrt(value: u128) -> u128 {
    if value == 0 {
        return 0;
    }
    if value < 4 {
        return 1;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

/// Result of applying the constant-product swap formula (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutput {
    pub amount_out: u64,
    /// Fee retained in input-side units, accumulated into that side's
    /// fee counter.
    pub fee_in: u64,
    pub new_reserve_in: u64,
    pub new_reserve_out: u64,
}

/// Computes the output of swapping `amount_in` from the `in` side of a
/// pool with reserves `(reserve_in, reserve_out)` into the `out` side.
pub fn compute_swap_output(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
) -> Result<SwapOutput, AmmError> {
    if amount_in == 0 {
        return Ok(SwapOutput {
            amount_out: 0,
            fee_in: 0,
            new_reserve_in: reserve_in,
            new_reserve_out: reserve_out,
        });
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::EmptyPool);
    }

    let amount_in_128 = amount_in as u128;
    let reserve_in_128 = reserve_in as u128;
    let reserve_out_128 = reserve_out as u128;

    let amount_post_fee = amount_in_128
        .checked_mul(FEE_NUMERATOR)
        .ok_or(AmmError::MathOverflow)?
        / FEE_DENOMINATOR;

    let fee_in_128 = amount_in_128 - amount_post_fee;

    let numerator = amount_post_fee
        .checked_mul(reserve_out_128)
        .ok_or(AmmError::MathOverflow)?;
    let denominator = reserve_in_128
        .checked_add(amount_post_fee)
        .ok_or(AmmError::MathOverflow)?;
    let amount_out_128 = numerator / denominator;

    let new_reserve_in = reserve_in_128
        .checked_add(amount_in_128)
        .ok_or(AmmError::MathOverflow)?;
    let new_reserve_out = reserve_out_128
        .checked_sub(amount_out_128)
        .ok_or(AmmError::MathOverflow)?;

    Ok(SwapOutput {
        amount_out: to_u64(amount_out_128)?,
        fee_in: to_u64(fee_in_128)?,
        new_reserve_in: to_u64(new_reserve_in)?,
        new_reserve_out: to_u64(new_reserve_out)?,
    })
}

/// Result of the proportional-deposit formula (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositResult {
    pub actual_a: u64,
    pub actual_b: u64,
    pub minted_shares: u64,
}

/// Computes the actual deposit amounts and minted LP shares for
/// `AddLiquidity(desired_a, desired_b)` against a pool with reserves
/// `(reserve_a, reserve_b)` and existing LP supply `total_supply`.
pub fn compute_deposit(
    desired_a: u64,
    desired_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_supply: u64,
) -> Result<DepositResult, AmmError> {
    if total_supply == 0 {
        let product = (desired_a as u128)
            .checked_mul(desired_b as u128)
            .ok_or(AmmError::MathOverflow)?;
        if product == 0 {
            return Err(AmmError::InsufficientLiquidity);
        }
        let minted_shares = to_u64(isqrt(product))?;
        if minted_shares == 0 {
            return Err(AmmError::InsufficientLiquidity);
        }
        return Ok(DepositResult { actual_a: desired_a, actual_b: desired_b, minted_shares });
    }

    if reserve_a == 0 || reserve_b == 0 {
        return Err(AmmError::EmptyPool);
    }

    let desired_a_128 = desired_a as u128;
    let desired_b_128 = desired_b as u128;
    let reserve_a_128 = reserve_a as u128;
    let reserve_b_128 = reserve_b as u128;

    let a_needed_for_b = desired_b_128
        .checked_mul(reserve_a_128)
        .ok_or(AmmError::MathOverflow)?
        / reserve_b_128;

    let (actual_a_128, actual_b_128) = if a_needed_for_b <= desired_a_128 {
        (a_needed_for_b, desired_b_128)
    } else {
        let b_needed_for_a = desired_a_128
            .checked_mul(reserve_b_128)
            .ok_or(AmmError::MathOverflow)?
            / reserve_a_128;
        (desired_a_128, b_needed_for_a)
    };

    let supply_128 = total_supply as u128;
    let shares_from_a = actual_a_128
        .checked_mul(supply_128)
        .ok_or(AmmError::MathOverflow)?
        / reserve_a_128;
    let shares_from_b = actual_b_128
        .checked_mul(supply_128)
        .ok_or(AmmError::MathOverflow)?
        / reserve_b_128;
    let minted_shares_128 = shares_from_a.min(shares_from_b);

    let minted_shares = to_u64(minted_shares_128)?;
    if minted_shares == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    Ok(DepositResult {
        actual_a: to_u64(actual_a_128)?,
        actual_b: to_u64(actual_b_128)?,
        minted_shares,
    })
}

/// Result of the proportional-redeem formula (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedeemResult {
    pub payout_a: u64,
    pub payout_b: u64,
}

/// Computes the payout for burning `shares` LP tokens against a pool
/// with reserves `(reserve_a, reserve_b)` and LP supply `total_supply`.
pub fn compute_redeem(
    shares: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_supply: u64,
) -> Result<RedeemResult, AmmError> {
    if shares == 0 {
        return Ok(RedeemResult { payout_a: 0, payout_b: 0 });
    }
    if total_supply == 0 {
        return Err(AmmError::EmptyPool);
    }

    let shares_128 = shares as u128;
    let supply_128 = total_supply as u128;

    let payout_a_128 = shares_128
        .checked_mul(reserve_a as u128)
        .ok_or(AmmError::MathOverflow)?
        / supply_128;
    let payout_b_128 = shares_128
        .checked_mul(reserve_b as u128)
        .ok_or(AmmError::MathOverflow)?
        / supply_128;

    if payout_a_128 == 0 || payout_b_128 == 0 {
        return Err(AmmError::ZeroOutput);
    }

    Ok(RedeemResult { payout_a: to_u64(payout_a_128)?, payout_b: to_u64(payout_b_128)? })
}
