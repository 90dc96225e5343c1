//! One module per instruction group, mirroring the `[MODULE]` layout of
//! the specification's component design.

pub mod fees;
pub mod init_pool;
pub mod liquidity;
pub mod multihop;
pub mod native_pool;
pub mod swap;
pub mod views;
