//! `InitPool`, `AddLiquidity`, and `RemoveLiquidity` against a fresh
//! token-token pool, end to end through `ProgramTest`.

mod common;

use common::pool_helpers::{add_liquidity_instruction, derive_token_pool, init_pool_instruction, remove_liquidity_instruction};
use common::tokens::{create_mint, create_token_account, get_token_balance, mint_tokens};
use common::{start_test_environment, TestEnvironment};
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;

async fn setup_pool(env: &mut TestEnvironment) -> (Keypair, Keypair, Keypair, Keypair, Keypair) {
    let mint_a = Keypair::new();
    let mint_b = Keypair::new();
    create_mint(&mut env.banks_client, &env.payer, env.recent_blockhash, &mint_a, 9).await.unwrap();
    create_mint(&mut env.banks_client, &env.payer, env.recent_blockhash, &mint_b, 9).await.unwrap();

    let user_token_a = Keypair::new();
    let user_token_b = Keypair::new();
    create_token_account(&mut env.banks_client, &env.payer, env.recent_blockhash, &user_token_a, &mint_a.pubkey(), &env.payer.pubkey())
        .await
        .unwrap();
    create_token_account(&mut env.banks_client, &env.payer, env.recent_blockhash, &user_token_b, &mint_b.pubkey(), &env.payer.pubkey())
        .await
        .unwrap();

    mint_tokens(&mut env.banks_client, &env.payer, env.recent_blockhash, &mint_a.pubkey(), &user_token_a.pubkey(), &env.payer, 10_000_000_000)
        .await
        .unwrap();
    mint_tokens(&mut env.banks_client, &env.payer, env.recent_blockhash, &mint_b.pubkey(), &user_token_b.pubkey(), &env.payer, 10_000_000_000)
        .await
        .unwrap();

    (mint_a, mint_b, user_token_a, user_token_b, Keypair::new())
}

#[tokio::test]
async fn init_pool_bootstraps_lp_supply_via_isqrt() {
    let mut env = start_test_environment().await;
    let (mint_a, mint_b, user_token_a, user_token_b, user_lp_account) = setup_pool(&mut env).await;

    let ix = init_pool_instruction(
        &constant_product_amm::id(),
        &env.payer.pubkey(),
        &mint_a.pubkey(),
        &mint_b.pubkey(),
        &user_token_a.pubkey(),
        &user_token_b.pubkey(),
        &user_lp_account.pubkey(),
        1_000_000_000,
        1_000_000_000,
    );

    let mut tx = Transaction::new_with_payer(&[ix], Some(&env.payer.pubkey()));
    tx.sign(&[&env.payer, &user_lp_account], env.recent_blockhash);
    env.banks_client.process_transaction(tx).await.unwrap();

    let lp_balance = get_token_balance(&mut env.banks_client, &user_lp_account.pubkey()).await;
    assert_eq!(lp_balance, 1_000_000_000);

    let addresses = derive_token_pool(&constant_product_amm::id(), &mint_a.pubkey(), &mint_b.pubkey());
    let vault_a_balance = get_token_balance(&mut env.banks_client, &addresses.vault_a).await;
    let vault_b_balance = get_token_balance(&mut env.banks_client, &addresses.vault_b).await;
    assert_eq!(vault_a_balance, 1_000_000_000);
    assert_eq!(vault_b_balance, 1_000_000_000);
}

#[tokio::test]
async fn add_then_remove_liquidity_round_trips() {
    let mut env = start_test_environment().await;
    let (mint_a, mint_b, user_token_a, user_token_b, user_lp_account) = setup_pool(&mut env).await;

    let init_ix = init_pool_instruction(
        &constant_product_amm::id(),
        &env.payer.pubkey(),
        &mint_a.pubkey(),
        &mint_b.pubkey(),
        &user_token_a.pubkey(),
        &user_token_b.pubkey(),
        &user_lp_account.pubkey(),
        2_000_000_000,
        3_000_000_000,
    );
    let mut tx = Transaction::new_with_payer(&[init_ix], Some(&env.payer.pubkey()));
    tx.sign(&[&env.payer, &user_lp_account], env.recent_blockhash);
    env.banks_client.process_transaction(tx).await.unwrap();

    let addresses = derive_token_pool(&constant_product_amm::id(), &mint_a.pubkey(), &mint_b.pubkey());

    let add_ix = add_liquidity_instruction(
        &constant_product_amm::id(),
        &env.payer.pubkey(),
        &addresses.pool,
        &addresses.vault_a,
        &addresses.vault_b,
        &addresses.lp_mint,
        &user_token_a.pubkey(),
        &user_token_b.pubkey(),
        &user_lp_account.pubkey(),
        1_000_000_000,
        1_000_000_000,
    );
    let mut tx = Transaction::new_with_payer(&[add_ix], Some(&env.payer.pubkey()));
    tx.sign(&[&env.payer], env.recent_blockhash);
    env.banks_client.process_transaction(tx).await.unwrap();

    let lp_balance_after_add = get_token_balance(&mut env.banks_client, &user_lp_account.pubkey()).await;
    assert!(lp_balance_after_add > 2_449_489_742);

    let remove_ix = remove_liquidity_instruction(
        &constant_product_amm::id(),
        &env.payer.pubkey(),
        &addresses.pool,
        &addresses.vault_a,
        &addresses.vault_b,
        &addresses.lp_mint,
        &user_token_a.pubkey(),
        &user_token_b.pubkey(),
        &user_lp_account.pubkey(),
        lp_balance_after_add,
    );
    let mut tx = Transaction::new_with_payer(&[remove_ix], Some(&env.payer.pubkey()));
    tx.sign(&[&env.payer], env.recent_blockhash);
    env.banks_client.process_transaction(tx).await.unwrap();

    let lp_balance_after_remove = get_token_balance(&mut env.banks_client, &user_lp_account.pubkey()).await;
    assert_eq!(lp_balance_after_remove, 0);

    let vault_a_balance = get_token_balance(&mut env.banks_client, &addresses.vault_a).await;
    let vault_b_balance = get_token_balance(&mut env.banks_client, &addresses.vault_b).await;
    assert_eq!(vault_a_balance, 0);
    assert_eq!(vault_b_balance, 0);
}

#[tokio::test]
async fn remove_liquidity_rejects_more_shares_than_held() {
    let mut env = start_test_environment().await;
    let (mint_a, mint_b, user_token_a, user_token_b, user_lp_account) = setup_pool(&mut env).await;

    let init_ix = init_pool_instruction(
        &constant_product_amm::id(),
        &env.payer.pubkey(),
        &mint_a.pubkey(),
        &mint_b.pubkey(),
        &user_token_a.pubkey(),
        &user_token_b.pubkey(),
        &user_lp_account.pubkey(),
        1_000_000_000,
        1_000_000_000,
    );
    let mut tx = Transaction::new_with_payer(&[init_ix], Some(&env.payer.pubkey()));
    tx.sign(&[&env.payer, &user_lp_account], env.recent_blockhash);
    env.banks_client.process_transaction(tx).await.unwrap();

    let addresses = derive_token_pool(&constant_product_amm::id(), &mint_a.pubkey(), &mint_b.pubkey());
    let remove_ix = remove_liquidity_instruction(
        &constant_product_amm::id(),
        &env.payer.pubkey(),
        &addresses.pool,
        &addresses.vault_a,
        &addresses.vault_b,
        &addresses.lp_mint,
        &user_token_a.pubkey(),
        &user_token_b.pubkey(),
        &user_lp_account.pubkey(),
        5_000_000_000,
    );
    let mut tx = Transaction::new_with_payer(&[remove_ix], Some(&env.payer.pubkey()));
    tx.sign(&[&env.payer], env.recent_blockhash);
    let result = env.banks_client.process_transaction(tx).await;
    assert!(result.is_err());
}
