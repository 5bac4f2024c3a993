//! Validated parameter structs.
//!
//! [`SwapParams`] tunes the traversal loop shared by every swap and
//! [`PoolConfig`] describes a pool for the
//! [`PoolFactory`](crate::factory::PoolFactory). Both validate on
//! construction and expose a `validate` method for values built elsewhere
//! (for example after deserialization).

mod pool_config;
mod swap_params;

pub use pool_config::PoolConfig;
pub use swap_params::{SwapParams, MAX_SWAP_ITERATIONS, SWAP_EPSILON};
