//! Program-derived address derivation (§4.1).
//!
//! Pure functions over `Pubkey::find_program_address`. Seed order is
//! byte-exact and deliberately unsorted — pool identity is order
//! sensitive (§9, "Pool identity is order-sensitive").

use solana_program::pubkey::Pubkey;

use crate::constants::{
    LP_MINT_SEED_PREFIX, NATIVE_LP_MINT_SEED_PREFIX, NATIVE_POOL_SEED_PREFIX,
    NATIVE_VAULT_SEED_PREFIX, POOL_SEED_PREFIX, VAULT_SEED_PREFIX,
};

/// Derives the token-token pool state PDA from `["pool", token_a, token_b]`.
pub fn find_pool_address(program_id: &Pubkey, token_a: &Pubkey, token_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_SEED_PREFIX, token_a.as_ref(), token_b.as_ref()],
        program_id,
    )
}

/// Derives a token-token vault PDA from `["vault", pool, mint]`.
pub fn find_vault_address(program_id: &Pubkey, pool: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED_PREFIX, pool.as_ref(), mint.as_ref()], program_id)
}

/// Derives the token-token LP mint PDA from `["mint", pool]`.
pub fn find_lp_mint_address(program_id: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LP_MINT_SEED_PREFIX, pool.as_ref()], program_id)
}

/// Derives the native-asset pool state PDA from `["native_sol_pool", token_mint]`.
pub fn find_native_pool_address(program_id: &Pubkey, token_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NATIVE_POOL_SEED_PREFIX, token_mint.as_ref()], program_id)
}

/// Derives the native-asset token vault PDA from
/// `["native_sol_vault", pool, token_mint]`.
pub fn find_native_vault_address(program_id: &Pubkey, pool: &Pubkey, token_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[NATIVE_VAULT_SEED_PREFIX, pool.as_ref(), token_mint.as_ref()],
        program_id,
    )
}

/// Derives the native-asset LP mint PDA from `["native_sol_lp_mint", pool]`.
pub fn find_native_lp_mint_address(program_id: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NATIVE_LP_MINT_SEED_PREFIX, pool.as_ref()], program_id)
}
