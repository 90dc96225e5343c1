//! Instruction builders for the integration tests. Encodes the §6 wire
//! format by hand, the same way the on-chain decoder expects it.

use constant_product_amm::pda;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::{system_program, sysvar};
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

pub struct TokenPoolAddresses {
    pub pool: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub lp_mint: Pubkey,
}

pub fn derive_token_pool(program_id: &Pubkey, token_a: &Pubkey, token_b: &Pubkey) -> TokenPoolAddresses {
    let (pool, _) = pda::find_pool_address(program_id, token_a, token_b);
    let (vault_a, _) = pda::find_vault_address(program_id, &pool, token_a);
    let (vault_b, _) = pda::find_vault_address(program_id, &pool, token_b);
    let (lp_mint, _) = pda::find_lp_mint_address(program_id, &pool);
    TokenPoolAddresses { pool, vault_a, vault_b, lp_mint }
}

#[allow(clippy::too_many_arguments)]
pub fn init_pool_instruction(
    program_id: &Pubkey,
    payer: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    user_lp_account: &Pubkey,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let addresses = derive_token_pool(program_id, token_a_mint, token_b_mint);

    let mut data = vec![0u8];
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(addresses.pool, false),
            AccountMeta::new_readonly(*token_a_mint, false),
            AccountMeta::new_readonly(*token_b_mint, false),
            AccountMeta::new(addresses.vault_a, false),
            AccountMeta::new(addresses.vault_b, false),
            AccountMeta::new(addresses.lp_mint, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(*user_lp_account, true),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data,
    }
}

pub fn swap_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    pool: &Pubkey,
    vault_a: &Pubkey,
    vault_b: &Pubkey,
    user_token_in: &Pubkey,
    user_token_out: &Pubkey,
    amount_in: u64,
    direction_a_to_b: bool,
) -> Instruction {
    let mut data = vec![3u8];
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.push(direction_a_to_b as u8);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*user_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault_a, false),
            AccountMeta::new(*vault_b, false),
            AccountMeta::new(*user_token_in, false),
            AccountMeta::new(*user_token_out, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn add_liquidity_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    pool: &Pubkey,
    vault_a: &Pubkey,
    vault_b: &Pubkey,
    lp_mint: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    user_lp_account: &Pubkey,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let mut data = vec![1u8];
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*user_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault_a, false),
            AccountMeta::new(*vault_b, false),
            AccountMeta::new(*lp_mint, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(*user_lp_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn remove_liquidity_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    pool: &Pubkey,
    vault_a: &Pubkey,
    vault_b: &Pubkey,
    lp_mint: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    user_lp_account: &Pubkey,
    lp_amount: u64,
) -> Instruction {
    let mut data = vec![2u8];
    data.extend_from_slice(&lp_amount.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*user_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault_a, false),
            AccountMeta::new(*vault_b, false),
            AccountMeta::new(*lp_mint, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(*user_lp_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

pub fn get_pool_info_instruction(program_id: &Pubkey, pool: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new_readonly(*pool, false)],
        data: vec![6u8],
    }
}

pub fn create_keypair() -> Keypair {
    Keypair::new()
}

pub fn pubkey_of(keypair: &Keypair) -> Pubkey {
    keypair.pubkey()
}

pub struct NativePoolAddresses {
    pub pool: Pubkey,
    pub vault: Pubkey,
    pub lp_mint: Pubkey,
}

pub fn derive_native_pool(program_id: &Pubkey, token_mint: &Pubkey) -> NativePoolAddresses {
    let (pool, _) = pda::find_native_pool_address(program_id, token_mint);
    let (vault, _) = pda::find_native_vault_address(program_id, &pool, token_mint);
    let (lp_mint, _) = pda::find_native_lp_mint_address(program_id, &pool);
    NativePoolAddresses { pool, vault, lp_mint }
}

#[allow(clippy::too_many_arguments)]
pub fn init_native_pool_instruction(
    program_id: &Pubkey,
    payer: &Pubkey,
    token_mint: &Pubkey,
    user_token_account: &Pubkey,
    user_lp_account: &Pubkey,
    amount_sol: u64,
    amount_token: u64,
) -> Instruction {
    let addresses = derive_native_pool(program_id, token_mint);

    let mut data = vec![11u8];
    data.extend_from_slice(&amount_sol.to_le_bytes());
    data.extend_from_slice(&amount_token.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(addresses.pool, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new(addresses.vault, false),
            AccountMeta::new(addresses.lp_mint, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(*user_lp_account, true),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data,
    }
}

pub fn swap_native_sol_to_token_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    pool: &Pubkey,
    vault: &Pubkey,
    user_token_account: &Pubkey,
    amount_in: u64,
    minimum_amount_out: u64,
) -> Instruction {
    let mut data = vec![12u8];
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&minimum_amount_out.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*user_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

pub fn swap_token_to_native_sol_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    pool: &Pubkey,
    vault: &Pubkey,
    user_token_account: &Pubkey,
    amount_in: u64,
    minimum_amount_out: u64,
) -> Instruction {
    let mut data = vec![13u8];
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&minimum_amount_out.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*user_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

pub struct Hop {
    pub pool: Pubkey,
    pub token_in_mint: Pubkey,
    pub token_out_mint: Pubkey,
    pub vault_in: Pubkey,
    pub vault_out: Pubkey,
    pub user_in_account: Pubkey,
    pub user_out_account: Pubkey,
}

pub fn multihop_swap_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    hops: &[Hop],
    amount_in: u64,
    minimum_amount_out: u64,
) -> Instruction {
    let mut data = vec![4u8];
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&minimum_amount_out.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(*user_authority, true),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];
    for hop in hops {
        accounts.push(AccountMeta::new(hop.pool, false));
        accounts.push(AccountMeta::new_readonly(hop.token_in_mint, false));
        accounts.push(AccountMeta::new_readonly(hop.token_out_mint, false));
        accounts.push(AccountMeta::new(hop.vault_in, false));
        accounts.push(AccountMeta::new(hop.vault_out, false));
        accounts.push(AccountMeta::new(hop.user_in_account, false));
        accounts.push(AccountMeta::new(hop.user_out_account, false));
    }

    Instruction { program_id: *program_id, accounts, data }
}

#[allow(clippy::too_many_arguments)]
pub fn add_liquidity_native_sol_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    pool: &Pubkey,
    vault: &Pubkey,
    lp_mint: &Pubkey,
    user_token_account: &Pubkey,
    user_lp_account: &Pubkey,
    amount_sol: u64,
    amount_token: u64,
) -> Instruction {
    let mut data = vec![14u8];
    data.extend_from_slice(&amount_sol.to_le_bytes());
    data.extend_from_slice(&amount_token.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*user_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault, false),
            AccountMeta::new(*lp_mint, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(*user_lp_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn remove_liquidity_native_sol_instruction(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    pool: &Pubkey,
    vault: &Pubkey,
    lp_mint: &Pubkey,
    user_token_account: &Pubkey,
    user_lp_account: &Pubkey,
    lp_amount: u64,
) -> Instruction {
    let mut data = vec![15u8];
    data.extend_from_slice(&lp_amount.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*user_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault, false),
            AccountMeta::new(*lp_mint, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(*user_lp_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

pub fn collect_fees_instruction(
    program_id: &Pubkey,
    treasury_authority: &Pubkey,
    pool: &Pubkey,
    vault_a: &Pubkey,
    vault_b: &Pubkey,
    treasury_token_a: &Pubkey,
    treasury_token_b: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*treasury_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault_a, false),
            AccountMeta::new(*vault_b, false),
            AccountMeta::new(*treasury_token_a, false),
            AccountMeta::new(*treasury_token_b, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: vec![18u8],
    }
}

#[allow(clippy::too_many_arguments)]
pub fn withdraw_fees_instruction(
    program_id: &Pubkey,
    treasury_authority: &Pubkey,
    pool: &Pubkey,
    vault_a: &Pubkey,
    vault_b: &Pubkey,
    treasury_token_a: &Pubkey,
    treasury_token_b: &Pubkey,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let mut data = vec![20u8];
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*treasury_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault_a, false),
            AccountMeta::new(*vault_b, false),
            AccountMeta::new(*treasury_token_a, false),
            AccountMeta::new(*treasury_token_b, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

pub fn collect_fees_native_instruction(
    program_id: &Pubkey,
    treasury_authority: &Pubkey,
    pool: &Pubkey,
    vault: &Pubkey,
    treasury_token_account: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*treasury_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault, false),
            AccountMeta::new(*treasury_token_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: vec![21u8],
    }
}

#[allow(clippy::too_many_arguments)]
pub fn withdraw_fees_native_instruction(
    program_id: &Pubkey,
    treasury_authority: &Pubkey,
    pool: &Pubkey,
    vault: &Pubkey,
    treasury_token_account: &Pubkey,
    amount_sol: u64,
    amount_token: u64,
) -> Instruction {
    let mut data = vec![23u8];
    data.extend_from_slice(&amount_sol.to_le_bytes());
    data.extend_from_slice(&amount_token.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*treasury_authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*vault, false),
            AccountMeta::new(*treasury_token_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}
