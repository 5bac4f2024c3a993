//! Pool initialization from a [`PoolConfig`].

use tracing::{debug, info};

use crate::config::PoolConfig;
use crate::domain::{DenomPair, Liquidity, Pool, Price};
use crate::error::AmmError;
use crate::math::price_to_tick;
use crate::store::MemoryStore;

/// Stateless factory for new, empty pools.
///
/// A new pool has its denominations canonically ordered, its √price set
/// from the configured spot price, its tick set to the codec tick of that
/// price and no liquidity. Liquidity arrives later through positions.
///
/// # Example
///
/// ```rust
/// use hydra_clmm::config::PoolConfig;
/// use hydra_clmm::domain::{Denom, PoolId};
/// use hydra_clmm::factory::PoolFactory;
/// use hydra_clmm::store::MemoryStore;
/// use rust_decimal_macros::dec;
///
/// let cfg = PoolConfig::new(
///     PoolId::new(1),
///     Denom::new("usdc").expect("valid"),
///     Denom::new("eth").expect("valid"),
///     dec!(5000),
/// )
/// .expect("valid config");
///
/// let mut store = MemoryStore::new();
/// let pool = PoolFactory::create(&mut store, &cfg).expect("pool created");
/// assert_eq!(pool.denoms().token0().as_str(), "eth");
/// assert_eq!(pool.tick().get(), 85_176);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolFactory;

impl PoolFactory {
    /// Builds the initial pool state without storing it.
    ///
    /// # Errors
    ///
    /// - Any validation error from [`PoolConfig::validate`].
    /// - [`AmmError::TickOutOfBounds`] if the price maps outside the tick
    ///   range (only at the extreme lower bound).
    pub fn build(config: &PoolConfig) -> Result<Pool, AmmError> {
        config.validate()?;
        let denoms = DenomPair::new(config.denom_a().clone(), config.denom_b().clone())?;
        let sqrt_price = Price::new(config.initial_price())?.sqrt()?;
        let tick = price_to_tick(config.initial_price())?;
        Ok(Pool::new(
            config.pool_id(),
            denoms,
            sqrt_price,
            tick,
            Liquidity::ZERO,
        ))
    }

    /// Builds the pool and inserts it into `store`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAlreadyExists`] on id collision, checked before
    ///   the config is built.
    /// - Everything [`build`](Self::build) returns.
    pub fn create(store: &mut MemoryStore, config: &PoolConfig) -> Result<Pool, AmmError> {
        if store.contains_pool(config.pool_id()) {
            debug!(pool = %config.pool_id(), "pool id already taken");
            return Err(AmmError::PoolAlreadyExists(config.pool_id()));
        }
        let pool = Self::build(config)?;
        store.insert_pool(pool.clone())?;
        info!(pool = %pool.id(), tick = %pool.tick(), sqrt_price = %pool.sqrt_price(), "pool created");
        Ok(pool)
    }
}
