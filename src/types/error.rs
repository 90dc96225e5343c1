//! AMM Error Types
//!
//! Structured error handling for the constant-product AMM program.
//! Every variant maps to a stable numeric code surfaced to clients via
//! `ProgramError::Custom`.

use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Comprehensive error types for the constant-product AMM program.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    /// Supplied accounts disagree with PDA derivation order.
    #[error("Invalid account order")]
    InvalidAccountOrder,

    /// A supplied account does not match its expected PDA.
    #[error("Invalid PDA")]
    InvalidPDA,

    /// An account is not owned by the expected program.
    #[error("Invalid account owner")]
    InvalidOwner,

    /// Swap attempted against a pool with a zero-reserve side.
    #[error("Pool has an empty reserve")]
    EmptyPool,

    /// Computed swap output rounded to zero.
    #[error("Swap output rounded to zero")]
    ZeroOutput,

    /// Computed output fell below the caller's minimum threshold.
    #[error("Slippage tolerance exceeded")]
    SlippageExceeded,

    /// User's input token account does not hold enough balance.
    #[error("Insufficient input token balance")]
    InsufficientInputBalance,

    /// User's LP token balance is smaller than the requested burn amount.
    #[error("Insufficient LP token balance")]
    InsufficientLPBalance,

    /// A `u64` arithmetic operation would have wrapped.
    #[error("Arithmetic overflow")]
    MathOverflow,

    /// Post-state constant product is smaller than the pre-state one.
    #[error("Constant-product invariant violated")]
    InvariantBroken,

    /// A native-asset pool account's lamports would drop below its rent
    /// floor plus its native reserve.
    #[error("Native pool rent floor breached")]
    RentFloorBreached,

    /// Caller is not the pool's current fee treasury.
    #[error("Unauthorized fee operation")]
    Unauthorized,

    /// Instruction payload could not be parsed for its opcode.
    #[error("Invalid instruction data")]
    InvalidInstructionData,

    /// An account that must be rent-exempt is not.
    #[error("Account is not rent exempt")]
    AccountNotRentExempt,

    /// A pool account already exists where `InitPool`/`InitNativeSOLPool`
    /// expected a fresh PDA.
    #[error("Pool already initialized")]
    PoolAlreadyInitialized,

    /// Deposit/redeem computed a zero quantity for a side that must be
    /// non-zero.
    #[error("Insufficient liquidity for requested operation")]
    InsufficientLiquidity,
}

impl AmmError {
    /// Returns a unique error code for each error variant, forming a
    /// stable interface for client applications.
    pub fn error_code(&self) -> u32 {
        match self {
            AmmError::InvalidAccountOrder => 0,
            AmmError::InvalidPDA => 1,
            AmmError::InvalidOwner => 2,
            AmmError::EmptyPool => 3,
            AmmError::ZeroOutput => 4,
            AmmError::SlippageExceeded => 5,
            AmmError::InsufficientInputBalance => 6,
            AmmError::InsufficientLPBalance => 7,
            AmmError::MathOverflow => 8,
            AmmError::InvariantBroken => 9,
            AmmError::RentFloorBreached => 10,
            AmmError::Unauthorized => 11,
            AmmError::InvalidInstructionData => 12,
            AmmError::AccountNotRentExempt => 13,
            AmmError::PoolAlreadyInitialized => 14,
            AmmError::InsufficientLiquidity => 15,
        }
    }
}

impl From<AmmError> for ProgramError {
    fn from(e: AmmError) -> Self {
        ProgramError::Custom(e.error_code())
    }
}
