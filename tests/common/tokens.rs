//! SPL mint and token-account creation helpers.

use solana_program_test::BanksClient;
use solana_sdk::{program_pack::Pack, signature::Keypair, signer::Signer};
use spl_token::{instruction as token_instruction, state::Account as TokenAccount};

use super::TestResult;

pub async fn create_mint(
    banks: &mut BanksClient,
    payer: &Keypair,
    recent_blockhash: solana_sdk::hash::Hash,
    mint: &Keypair,
    decimals: u8,
) -> TestResult {
    let rent = banks.get_rent().await.unwrap();
    let lamports = rent.minimum_balance(spl_token::state::Mint::LEN);

    let create_account_ix = solana_sdk::system_instruction::create_account(
        &payer.pubkey(),
        &mint.pubkey(),
        lamports,
        spl_token::state::Mint::LEN as u64,
        &spl_token::id(),
    );

    let initialize_mint_ix =
        token_instruction::initialize_mint(&spl_token::id(), &mint.pubkey(), &payer.pubkey(), None, decimals).unwrap();

    let mut transaction =
        solana_sdk::transaction::Transaction::new_with_payer(&[create_account_ix, initialize_mint_ix], Some(&payer.pubkey()));
    transaction.sign(&[payer, mint], recent_blockhash);
    banks.process_transaction(transaction).await
}

pub async fn create_token_account(
    banks: &mut BanksClient,
    payer: &Keypair,
    recent_blockhash: solana_sdk::hash::Hash,
    token_account: &Keypair,
    mint: &solana_program::pubkey::Pubkey,
    owner: &solana_program::pubkey::Pubkey,
) -> TestResult {
    let rent = banks.get_rent().await.unwrap();
    let lamports = rent.minimum_balance(TokenAccount::LEN);

    let create_account_ix = solana_sdk::system_instruction::create_account(
        &payer.pubkey(),
        &token_account.pubkey(),
        lamports,
        TokenAccount::LEN as u64,
        &spl_token::id(),
    );

    let initialize_account_ix =
        token_instruction::initialize_account(&spl_token::id(), &token_account.pubkey(), mint, owner).unwrap();

    let mut transaction = solana_sdk::transaction::Transaction::new_with_payer(
        &[create_account_ix, initialize_account_ix],
        Some(&payer.pubkey()),
    );
    transaction.sign(&[payer, token_account], recent_blockhash);
    banks.process_transaction(transaction).await
}

pub async fn mint_tokens(
    banks: &mut BanksClient,
    payer: &Keypair,
    recent_blockhash: solana_sdk::hash::Hash,
    mint: &solana_program::pubkey::Pubkey,
    destination: &solana_program::pubkey::Pubkey,
    mint_authority: &Keypair,
    amount: u64,
) -> TestResult {
    let mint_to_ix =
        token_instruction::mint_to(&spl_token::id(), mint, destination, &mint_authority.pubkey(), &[], amount).unwrap();

    let mut transaction = solana_sdk::transaction::Transaction::new_with_payer(&[mint_to_ix], Some(&payer.pubkey()));
    transaction.sign(&[payer, mint_authority], recent_blockhash);
    banks.process_transaction(transaction).await
}

pub async fn get_token_balance(banks: &mut BanksClient, account: &solana_program::pubkey::Pubkey) -> u64 {
    let data = banks.get_account(*account).await.unwrap().unwrap();
    TokenAccount::unpack(&data.data).unwrap().amount
}
