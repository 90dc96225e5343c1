//! `ProgramTest` scaffolding shared by every integration test.

use constant_product_amm::process_instruction;
use solana_program_test::{processor, BanksClient, ProgramTest};
use solana_sdk::signature::Keypair;

pub struct TestEnvironment {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: solana_sdk::hash::Hash,
}

pub fn create_program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "constant_product_amm",
        constant_product_amm::id(),
        processor!(process_instruction),
    );
    program_test.set_compute_max_units(200_000);
    program_test
}

pub async fn start_test_environment() -> TestEnvironment {
    std::env::set_var("RUST_LOG", "error,solana_runtime::message_processor::stable_log=error");
    let _ = env_logger::try_init();

    let program_test = create_program_test();
    let (banks_client, payer, recent_blockhash) = program_test.start().await;

    TestEnvironment { banks_client, payer, recent_blockhash }
}
