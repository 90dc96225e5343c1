//! Instruction wire format.
//!
//! A single opcode byte followed by a fixed-offset payload (§6 of the
//! specification). Decoding is hand-rolled rather than derived, the
//! same way `spl_token::instruction::TokenInstruction::unpack` decodes
//! its own discriminator-free wire format.

use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

use crate::types::error::AmmError;

/// One hop of a `MultihopSwap`/`MultihopSwapWithPath` account window is
/// not part of the instruction payload — hops are carried entirely as
/// contiguous account slices (§4.5) — so the instruction payload for
/// those opcodes only needs the amounts below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmmInstruction {
    /// 0
    InitPool { amount_a: u64, amount_b: u64 },
    /// 1
    AddLiquidity { amount_a: u64, amount_b: u64 },
    /// 2
    RemoveLiquidity { lp_amount: u64 },
    /// 3
    Swap { amount_in: u64, direction_a_to_b: bool },
    /// 4
    MultihopSwap { amount_in: u64, minimum_amount_out: u64 },
    /// 5 (reserved)
    MultihopSwapWithPath,
    /// 6
    GetPoolInfo,
    /// 7
    GetTotalPools,
    /// 8
    FindPoolsByToken { target: Pubkey },
    /// 9
    GetSwapQuote { amount_in: u64, token_in: Pubkey },
    /// 10 (reserved)
    GetMultihopQuote,
    /// 11
    InitNativeSOLPool { amount_sol: u64, amount_token: u64 },
    /// 12
    SwapNativeSOLToToken { amount_in: u64, minimum_amount_out: u64 },
    /// 13
    SwapTokenToNativeSOL { amount_in: u64, minimum_amount_out: u64 },
    /// 14
    AddLiquidityNativeSOL { amount_sol: u64, amount_token: u64 },
    /// 15
    RemoveLiquidityNativeSOL { lp_amount: u64 },
    /// 16
    GetNativeSOLPoolInfo,
    /// 17
    GetNativeSOLSwapQuote { amount_in: u64, is_sol_to_token: bool },
    /// 18 — not part of the original wire table; added to give the fee
    /// ledger operations of §4.6 an entry point (see DESIGN.md).
    CollectFees,
    /// 19
    SetFeeTreasury { new_treasury: Pubkey },
    /// 20
    WithdrawFees { amount_a: u64, amount_b: u64 },
    /// 21
    CollectFeesNativeSOL,
    /// 22
    SetFeeTreasuryNativeSOL { new_treasury: Pubkey },
    /// 23
    WithdrawFeesNativeSOL { amount_sol: u64, amount_token: u64 },
}

fn unpack_u64(input: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
    if input.len() < 8 {
        return Err(AmmError::InvalidInstructionData.into());
    }
    let (bytes, rest) = input.split_at(8);
    let value = u64::from_le_bytes(bytes.try_into().map_err(|_| AmmError::InvalidInstructionData)?);
    Ok((value, rest))
}

fn unpack_u8(input: &[u8]) -> Result<(u8, &[u8]), ProgramError> {
    let (byte, rest) = input.split_first().ok_or(AmmError::InvalidInstructionData)?;
    Ok((*byte, rest))
}

fn unpack_pubkey(input: &[u8]) -> Result<(Pubkey, &[u8]), ProgramError> {
    if input.len() < 32 {
        return Err(AmmError::InvalidInstructionData.into());
    }
    let (bytes, rest) = input.split_at(32);
    let array: [u8; 32] = bytes.try_into().map_err(|_| AmmError::InvalidInstructionData)?;
    Ok((Pubkey::new_from_array(array), rest))
}

impl AmmInstruction {
    /// Decodes the opcode byte and its payload per the §6 wire format.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&opcode, rest) = input.split_first().ok_or(AmmError::InvalidInstructionData)?;

        Ok(match opcode {
            0 => {
                let (amount_a, rest) = unpack_u64(rest)?;
                let (amount_b, _) = unpack_u64(rest)?;
                AmmInstruction::InitPool { amount_a, amount_b }
            }
            1 => {
                let (amount_a, rest) = unpack_u64(rest)?;
                let (amount_b, _) = unpack_u64(rest)?;
                AmmInstruction::AddLiquidity { amount_a, amount_b }
            }
            2 => {
                let (lp_amount, _) = unpack_u64(rest)?;
                AmmInstruction::RemoveLiquidity { lp_amount }
            }
            3 => {
                let (amount_in, rest) = unpack_u64(rest)?;
                let (direction, _) = unpack_u8(rest)?;
                AmmInstruction::Swap { amount_in, direction_a_to_b: direction != 0 }
            }
            4 => {
                let (amount_in, rest) = unpack_u64(rest)?;
                let (minimum_amount_out, _) = unpack_u64(rest)?;
                AmmInstruction::MultihopSwap { amount_in, minimum_amount_out }
            }
            5 => AmmInstruction::MultihopSwapWithPath,
            6 => AmmInstruction::GetPoolInfo,
            7 => AmmInstruction::GetTotalPools,
            8 => {
                let (target, _) = unpack_pubkey(rest)?;
                AmmInstruction::FindPoolsByToken { target }
            }
            9 => {
                let (amount_in, rest) = unpack_u64(rest)?;
                let (token_in, _) = unpack_pubkey(rest)?;
                AmmInstruction::GetSwapQuote { amount_in, token_in }
            }
            10 => AmmInstruction::GetMultihopQuote,
            11 => {
                let (amount_sol, rest) = unpack_u64(rest)?;
                let (amount_token, _) = unpack_u64(rest)?;
                AmmInstruction::InitNativeSOLPool { amount_sol, amount_token }
            }
            12 => {
                let (amount_in, rest) = unpack_u64(rest)?;
                let (minimum_amount_out, _) = unpack_u64(rest)?;
                AmmInstruction::SwapNativeSOLToToken { amount_in, minimum_amount_out }
            }
            13 => {
                let (amount_in, rest) = unpack_u64(rest)?;
                let (minimum_amount_out, _) = unpack_u64(rest)?;
                AmmInstruction::SwapTokenToNativeSOL { amount_in, minimum_amount_out }
            }
            14 => {
                let (amount_sol, rest) = unpack_u64(rest)?;
                let (amount_token, _) = unpack_u64(rest)?;
                AmmInstruction::AddLiquidityNativeSOL { amount_sol, amount_token }
            }
            15 => {
                let (lp_amount, _) = unpack_u64(rest)?;
                AmmInstruction::RemoveLiquidityNativeSOL { lp_amount }
            }
            16 => AmmInstruction::GetNativeSOLPoolInfo,
            17 => {
                let (amount_in, rest) = unpack_u64(rest)?;
                let (is_sol_to_token, _) = unpack_u8(rest)?;
                AmmInstruction::GetNativeSOLSwapQuote { amount_in, is_sol_to_token: is_sol_to_token != 0 }
            }
            18 => AmmInstruction::CollectFees,
            19 => {
                let (new_treasury, _) = unpack_pubkey(rest)?;
                AmmInstruction::SetFeeTreasury { new_treasury }
            }
            20 => {
                let (amount_a, rest) = unpack_u64(rest)?;
                let (amount_b, _) = unpack_u64(rest)?;
                AmmInstruction::WithdrawFees { amount_a, amount_b }
            }
            21 => AmmInstruction::CollectFeesNativeSOL,
            22 => {
                let (new_treasury, _) = unpack_pubkey(rest)?;
                AmmInstruction::SetFeeTreasuryNativeSOL { new_treasury }
            }
            23 => {
                let (amount_sol, rest) = unpack_u64(rest)?;
                let (amount_token, _) = unpack_u64(rest)?;
                AmmInstruction::WithdrawFeesNativeSOL { amount_sol, amount_token }
            }
            _ => return Err(AmmError::InvalidInstructionData.into()),
        })
    }
}
