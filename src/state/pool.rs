//! Token-token pool state account (§3, §6).
//!
//! Fixed 137-byte layout, no discriminator — packed the same way
//! `spl_token::state::{Account, Mint}` pack themselves, via
//! `solana_program::program_pack::{Sealed, Pack}`.

use solana_program::program_pack::{Pack, Sealed};
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

/// On-chain record for a token-token pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    pub token_a: Pubkey,
    pub token_b: Pubkey,
    pub bump: u8,
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub total_lp_supply: u64,
    pub fee_collected_a: u64,
    pub fee_collected_b: u64,
    pub fee_treasury: Pubkey,
}

impl Sealed for Pool {}

impl Pack for Pool {
    const LEN: usize = 32 + 32 + 1 + 8 + 8 + 8 + 8 + 8 + 32;

    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        let token_a = Pubkey::new_from_array(src[0..32].try_into().unwrap());
        let token_b = Pubkey::new_from_array(src[32..64].try_into().unwrap());
        let bump = src[64];
        let reserve_a = u64::from_le_bytes(src[65..73].try_into().unwrap());
        let reserve_b = u64::from_le_bytes(src[73..81].try_into().unwrap());
        let total_lp_supply = u64::from_le_bytes(src[81..89].try_into().unwrap());
        let fee_collected_a = u64::from_le_bytes(src[89..97].try_into().unwrap());
        let fee_collected_b = u64::from_le_bytes(src[97..105].try_into().unwrap());
        let fee_treasury = Pubkey::new_from_array(src[105..137].try_into().unwrap());

        Ok(Pool {
            token_a,
            token_b,
            bump,
            reserve_a,
            reserve_b,
            total_lp_supply,
            fee_collected_a,
            fee_collected_b,
            fee_treasury,
        })
    }

    fn pack_into_slice(&self, dst: &mut [u8]) {
        debug_assert_eq!(dst.len(), Self::LEN);
        dst[0..32].copy_from_slice(self.token_a.as_ref());
        dst[32..64].copy_from_slice(self.token_b.as_ref());
        dst[64] = self.bump;
        dst[65..73].copy_from_slice(&self.reserve_a.to_le_bytes());
        dst[73..81].copy_from_slice(&self.reserve_b.to_le_bytes());
        dst[81..89].copy_from_slice(&self.total_lp_supply.to_le_bytes());
        dst[89..97].copy_from_slice(&self.fee_collected_a.to_le_bytes());
        dst[97..105].copy_from_slice(&self.fee_collected_b.to_le_bytes());
        dst[105..137].copy_from_slice(self.fee_treasury.as_ref());
    }
}

impl Pool {
    /// `true` once `InitPool` has ever written this account: an
    /// all-zero token pair cannot occur for a real pool.
    pub fn is_initialized(&self) -> bool {
        self.token_a != Pubkey::default() || self.token_b != Pubkey::default()
    }

    /// Reserves for the side matching `mint`, in `(in, out)` order for
    /// a swap moving from `mint` to the other side.
    pub fn reserves_for_input(&self, mint: &Pubkey) -> Option<(u64, u64, bool)> {
        if *mint == self.token_a {
            Some((self.reserve_a, self.reserve_b, true))
        } else if *mint == self.token_b {
            Some((self.reserve_b, self.reserve_a, false))
        } else {
            None
        }
    }
}
