//! Shared test utilities for the integration suite.
//!
//! Mirrors the fixture layout used by the program's own test harness:
//! a `setup` module for `ProgramTest` scaffolding, `tokens` for SPL
//! mint/account creation, and `pool_helpers` for building the
//! instructions each integration test drives.

pub mod pool_helpers;
pub mod setup;
pub mod tokens;

pub use setup::*;

use solana_program_test::BanksClientError;

pub type TestResult = Result<(), BanksClientError>;
