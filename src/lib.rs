//! Constant-product AMM program: token-token pools with a 0.3% swap
//! fee, proportional liquidity provisioning, atomic multi-hop routing,
//! native-asset (SOL-paired) pools, and a fee ledger with treasury
//! governance. Raw opcode dispatch, no framework — account layouts are
//! fixed-offset and discriminator-free (§6).

use solana_program::account_info::AccountInfo;
use solana_program::declare_id;
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::pubkey::Pubkey;

declare_id!("AMMcpxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx");

#[cfg(not(feature = "no-entrypoint"))]
use solana_program::entrypoint;
#[cfg(not(feature = "no-entrypoint"))]
entrypoint!(process_instruction);

pub mod constants;
pub mod math;
pub mod pda;
pub mod processors;
pub mod state;
pub mod token;
pub mod utils;
pub mod types;

use processors::{fees, init_pool, liquidity, multihop, native_pool, swap, views};
use types::AmmInstruction;

/// Central instruction dispatcher. Decodes the opcode byte and its
/// fixed-offset payload, then routes to the matching processor.
pub fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let instruction = AmmInstruction::unpack(instruction_data)?;

    match instruction {
        AmmInstruction::InitPool { amount_a, amount_b } => init_pool::process_init_pool(program_id, accounts, amount_a, amount_b),
        AmmInstruction::AddLiquidity { amount_a, amount_b } => {
            liquidity::process_add_liquidity(program_id, accounts, amount_a, amount_b)
        }
        AmmInstruction::RemoveLiquidity { lp_amount } => liquidity::process_remove_liquidity(program_id, accounts, lp_amount),
        AmmInstruction::Swap { amount_in, direction_a_to_b } => swap::process_swap(program_id, accounts, amount_in, direction_a_to_b),
        AmmInstruction::MultihopSwap { amount_in, minimum_amount_out } => {
            multihop::process_multihop_swap(program_id, accounts, amount_in, minimum_amount_out)
        }
        AmmInstruction::MultihopSwapWithPath => {
            msg!("MultihopSwapWithPath: reserved opcode, not implemented");
            Err(types::AmmError::InvalidInstructionData.into())
        }
        AmmInstruction::GetPoolInfo => views::process_get_pool_info(accounts),
        AmmInstruction::GetTotalPools => views::process_get_total_pools(),
        AmmInstruction::FindPoolsByToken { target } => views::process_find_pools_by_token(target),
        AmmInstruction::GetSwapQuote { amount_in, token_in } => views::process_get_swap_quote(accounts, amount_in, token_in),
        AmmInstruction::GetMultihopQuote => views::process_get_multihop_quote(),
        AmmInstruction::InitNativeSOLPool { amount_sol, amount_token } => {
            native_pool::process_init_native_pool(program_id, accounts, amount_sol, amount_token)
        }
        AmmInstruction::SwapNativeSOLToToken { amount_in, minimum_amount_out } => {
            native_pool::process_swap_native_sol_to_token(program_id, accounts, amount_in, minimum_amount_out)
        }
        AmmInstruction::SwapTokenToNativeSOL { amount_in, minimum_amount_out } => {
            native_pool::process_swap_token_to_native_sol(program_id, accounts, amount_in, minimum_amount_out)
        }
        AmmInstruction::AddLiquidityNativeSOL { amount_sol, amount_token } => {
            native_pool::process_add_liquidity_native_sol(program_id, accounts, amount_sol, amount_token)
        }
        AmmInstruction::RemoveLiquidityNativeSOL { lp_amount } => {
            native_pool::process_remove_liquidity_native_sol(program_id, accounts, lp_amount)
        }
        AmmInstruction::GetNativeSOLPoolInfo => views::process_get_native_pool_info(accounts),
        AmmInstruction::GetNativeSOLSwapQuote { amount_in, is_sol_to_token } => {
            views::process_get_native_swap_quote(accounts, amount_in, is_sol_to_token)
        }
        AmmInstruction::CollectFees => fees::process_collect_fees(program_id, accounts),
        AmmInstruction::SetFeeTreasury { new_treasury } => fees::process_set_fee_treasury(program_id, accounts, new_treasury),
        AmmInstruction::WithdrawFees { amount_a, amount_b } => fees::process_withdraw_fees(program_id, accounts, amount_a, amount_b),
        AmmInstruction::CollectFeesNativeSOL => fees::process_collect_fees_native(program_id, accounts),
        AmmInstruction::SetFeeTreasuryNativeSOL { new_treasury } => {
            fees::process_set_fee_treasury_native(program_id, accounts, new_treasury)
        }
        AmmInstruction::WithdrawFeesNativeSOL { amount_sol, amount_token } => {
            fees::process_withdraw_fees_native(program_id, accounts, amount_sol, amount_token)
        }
    }
}
