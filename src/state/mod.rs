//! On-chain account layouts (§3, §6).

pub mod native_pool;
pub mod pool;

pub use native_pool::NativePool;
pub use pool::Pool;
