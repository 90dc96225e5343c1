//! Constants for the constant-product AMM program.
//!
//! PDA seed prefixes, fee parameters, and account sizes shared across
//! the processors and state modules.

/// Numerator applied to the input amount before the constant-product
/// formula: `x * 997 / 1000` retains a 0.3% fee.
pub const FEE_NUMERATOR: u128 = 997;
pub const FEE_DENOMINATOR: u128 = 1000;

/// Decimals assigned to freshly-created LP mints.
pub const LP_MINT_DECIMALS: u8 = 9;

/// PDA seed prefix for token-token pool state accounts.
pub const POOL_SEED_PREFIX: &[u8] = b"pool";
/// PDA seed prefix for token-token vault accounts.
pub const VAULT_SEED_PREFIX: &[u8] = b"vault";
/// PDA seed prefix for token-token LP mint accounts.
pub const LP_MINT_SEED_PREFIX: &[u8] = b"mint";

/// PDA seed prefix for native-asset pool state accounts.
pub const NATIVE_POOL_SEED_PREFIX: &[u8] = b"native_sol_pool";
/// PDA seed prefix for native-asset token vault accounts.
pub const NATIVE_VAULT_SEED_PREFIX: &[u8] = b"native_sol_vault";
/// PDA seed prefix for native-asset LP mint accounts.
pub const NATIVE_LP_MINT_SEED_PREFIX: &[u8] = b"native_sol_lp_mint";

/// Minimum number of hops a `MultihopSwap` instruction must describe.
pub const MIN_HOPS: usize = 2;
/// Number of accounts each hop contributes to the account window.
pub const ACCOUNTS_PER_HOP: usize = 7;
