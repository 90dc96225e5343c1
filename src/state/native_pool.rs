//! Native-asset pool state account (§3, §6).
//!
//! Identical 137-byte layout to the token-token `Pool`, with the fee
//! fields renamed per spec. `token_a` holds a native-asset sentinel
//! (the system program id) rather than a real SPL mint, keeping the
//! on-chain layout byte-compatible across both pool flavors; `token_b`
//! holds the paired SPL token mint.

use solana_program::program_pack::{Pack, Sealed};
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;
use solana_program::system_program;

/// On-chain record for a native-asset (SOL-paired) pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativePool {
    /// Native-asset sentinel; always `system_program::id()`.
    pub native_marker: Pubkey,
    pub token_mint: Pubkey,
    pub bump: u8,
    /// Lamports held by the pool account beyond its rent-exempt minimum.
    pub reserve_sol: u64,
    /// Token vault balance.
    pub reserve_token: u64,
    pub total_lp_supply: u64,
    pub fee_collected_sol: u64,
    pub fee_collected_token: u64,
    pub fee_treasury: Pubkey,
}

impl Sealed for NativePool {}

impl Pack for NativePool {
    const LEN: usize = 32 + 32 + 1 + 8 + 8 + 8 + 8 + 8 + 32;

    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        let native_marker = Pubkey::new_from_array(src[0..32].try_into().unwrap());
        let token_mint = Pubkey::new_from_array(src[32..64].try_into().unwrap());
        let bump = src[64];
        let reserve_sol = u64::from_le_bytes(src[65..73].try_into().unwrap());
        let reserve_token = u64::from_le_bytes(src[73..81].try_into().unwrap());
        let total_lp_supply = u64::from_le_bytes(src[81..89].try_into().unwrap());
        let fee_collected_sol = u64::from_le_bytes(src[89..97].try_into().unwrap());
        let fee_collected_token = u64::from_le_bytes(src[97..105].try_into().unwrap());
        let fee_treasury = Pubkey::new_from_array(src[105..137].try_into().unwrap());

        Ok(NativePool {
            native_marker,
            token_mint,
            bump,
            reserve_sol,
            reserve_token,
            total_lp_supply,
            fee_collected_sol,
            fee_collected_token,
            fee_treasury,
        })
    }

    fn pack_into_slice(&self, dst: &mut [u8]) {
        debug_assert_eq!(dst.len(), Self::LEN);
        dst[0..32].copy_from_slice(self.native_marker.as_ref());
        dst[32..64].copy_from_slice(self.token_mint.as_ref());
        dst[64] = self.bump;
        dst[65..73].copy_from_slice(&self.reserve_sol.to_le_bytes());
        dst[73..81].copy_from_slice(&self.reserve_token.to_le_bytes());
        dst[81..89].copy_from_slice(&self.total_lp_supply.to_le_bytes());
        dst[89..97].copy_from_slice(&self.fee_collected_sol.to_le_bytes());
        dst[97..105].copy_from_slice(&self.fee_collected_token.to_le_bytes());
        dst[105..137].copy_from_slice(self.fee_treasury.as_ref());
    }
}

impl NativePool {
    pub fn new_uninitialized(token_mint: Pubkey) -> Self {
        NativePool {
            native_marker: system_program::id(),
            token_mint,
            bump: 0,
            reserve_sol: 0,
            reserve_token: 0,
            total_lp_supply: 0,
            fee_collected_sol: 0,
            fee_collected_token: 0,
            fee_treasury: Pubkey::default(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.native_marker == system_program::id() && self.token_mint != Pubkey::default()
    }
}
