//! Pool instantiation from configuration.
//!
//! [`PoolFactory`] validates a [`PoolConfig`], derives the initial price
//! state and stores an empty pool.
//!
//! [`PoolConfig`]: crate::config::PoolConfig

mod pool_factory;

pub use pool_factory::PoolFactory;
