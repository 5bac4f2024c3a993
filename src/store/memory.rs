//! In-memory pool and tick storage.

use std::collections::BTreeMap;
use std::ops::Bound;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Liquidity, Pool, PoolId, SwapDirection, Tick, TickInfo};
use crate::error::AmmError;
use crate::math::{liquidity_from_amounts, tick_to_sqrt_price};
use crate::traits::{PoolStore, TickStore};

/// Pools and their initialized ticks, kept in ordered maps.
///
/// Ticks live in a `BTreeMap<i32, TickInfo>` per pool so the nearest
/// boundary in either direction is a single range query. Ticks whose net
/// delta returns to zero are removed.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{Denom, DenomPair, Liquidity, Pool, PoolId, SqrtPrice, Tick};
/// use hydra_clmm::store::MemoryStore;
/// use hydra_clmm::traits::PoolStore;
/// use rust_decimal_macros::dec;
///
/// let pair = DenomPair::new(Denom::new("eth").expect("ok"), Denom::new("usdc").expect("ok"))
///     .expect("distinct");
/// let pool = Pool::new(PoolId::new(1), pair, SqrtPrice::ONE, Tick::ZERO, Liquidity::ZERO);
///
/// let mut store = MemoryStore::new();
/// store.insert_pool(pool).expect("new id");
/// store
///     .add_liquidity_range(
///         PoolId::new(1),
///         Tick::new(-10).expect("ok"),
///         Tick::new(10).expect("ok"),
///         Liquidity::new(dec!(1000)).expect("ok"),
///     )
///     .expect("range added");
/// assert_eq!(store.pool(PoolId::new(1)).expect("stored").liquidity().get(), dec!(1000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pools: BTreeMap<PoolId, Pool>,
    ticks: BTreeMap<PoolId, BTreeMap<i32, TickInfo>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a pool is stored under `id`.
    #[must_use]
    pub fn contains_pool(&self, id: PoolId) -> bool {
        self.pools.contains_key(&id)
    }

    /// Stores a new pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolAlreadyExists`] if the id is taken.
    pub fn insert_pool(&mut self, pool: Pool) -> Result<(), AmmError> {
        let id = pool.id();
        if self.contains_pool(id) {
            return Err(AmmError::PoolAlreadyExists(id));
        }
        self.pools.insert(id, pool);
        self.ticks.insert(id, BTreeMap::new());
        Ok(())
    }

    /// Tick info recorded at `tick`, if initialized.
    #[must_use]
    pub fn tick_info(&self, pool_id: PoolId, tick: Tick) -> Option<TickInfo> {
        self.ticks
            .get(&pool_id)
            .and_then(|m| m.get(&tick.get()))
            .copied()
    }

    /// All initialized ticks of a pool in ascending order.
    #[must_use]
    pub fn initialized_ticks(&self, pool_id: PoolId) -> Vec<Tick> {
        self.ticks
            .get(&pool_id)
            .map(|m| m.keys().filter_map(|&t| Tick::new(t).ok()).collect())
            .unwrap_or_default()
    }

    /// Adds `liquidity` over `[lower, upper)`.
    ///
    /// Records `+L` at `lower` and `-L` at `upper`, and raises the pool's
    /// active liquidity if its current tick lies inside the range. Either
    /// every change is applied or none is.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] for unknown pools.
    /// - [`AmmError::InvalidArgument`] if `lower >= upper` or liquidity is
    ///   zero.
    /// - [`AmmError::Overflow`] if a tick delta overflows.
    pub fn add_liquidity_range(
        &mut self,
        pool_id: PoolId,
        lower: Tick,
        upper: Tick,
        liquidity: Liquidity,
    ) -> Result<(), AmmError> {
        if lower >= upper {
            return Err(AmmError::InvalidArgument(
                "lower tick must be below upper tick",
            ));
        }
        if liquidity.is_zero() {
            return Err(AmmError::InvalidArgument("liquidity must be non-zero"));
        }
        let mut pool = self.pool(pool_id)?;
        let ticks = self
            .ticks
            .get(&pool_id)
            .ok_or(AmmError::PoolNotFound(pool_id))?;

        let l = liquidity.get();
        let lower_info = ticks
            .get(&lower.get())
            .copied()
            .unwrap_or_default()
            .checked_apply(l)
            .ok_or(AmmError::Overflow("lower tick liquidity"))?;
        let upper_info = ticks
            .get(&upper.get())
            .copied()
            .unwrap_or_default()
            .checked_apply(-l)
            .ok_or(AmmError::Overflow("upper tick liquidity"))?;

        if lower <= pool.tick() && pool.tick() < upper {
            pool.set_liquidity(pool.liquidity().add_delta(l)?);
        }

        let ticks = self
            .ticks
            .get_mut(&pool_id)
            .ok_or(AmmError::PoolNotFound(pool_id))?;
        for (tick, info) in [(lower, lower_info), (upper, upper_info)] {
            if info.is_initialized() {
                ticks.insert(tick.get(), info);
            } else {
                ticks.remove(&tick.get());
            }
        }
        debug!(pool = %pool_id, %lower, %upper, liquidity = %l, "liquidity range added");
        self.pools.insert(pool_id, pool);
        Ok(())
    }

    /// Deposits `amount0` and `amount1` over `[lower, upper)` at the pool's
    /// current price and returns the liquidity created.
    ///
    /// # Errors
    ///
    /// As [`add_liquidity_range`](Self::add_liquidity_range), plus
    /// [`AmmError::InvalidArgument`] if the deposits back no liquidity.
    pub fn create_position(
        &mut self,
        pool_id: PoolId,
        lower: Tick,
        upper: Tick,
        amount0: Decimal,
        amount1: Decimal,
    ) -> Result<Liquidity, AmmError> {
        let pool = self.pool(pool_id)?;
        let liquidity = liquidity_from_amounts(
            pool.sqrt_price(),
            tick_to_sqrt_price(lower)?,
            tick_to_sqrt_price(upper)?,
            amount0,
            amount1,
        )?;
        self.add_liquidity_range(pool_id, lower, upper, liquidity)?;
        Ok(liquidity)
    }
}

impl PoolStore for MemoryStore {
    fn pool(&self, id: PoolId) -> Result<Pool, AmmError> {
        self.pools.get(&id).cloned().ok_or(AmmError::PoolNotFound(id))
    }

    fn set_pool(&mut self, pool: Pool) -> Result<(), AmmError> {
        let slot = self
            .pools
            .get_mut(&pool.id())
            .ok_or(AmmError::PoolNotFound(pool.id()))?;
        *slot = pool;
        Ok(())
    }
}

impl TickStore for MemoryStore {
    fn next_initialized_tick(
        &self,
        pool_id: PoolId,
        from: Tick,
        direction: SwapDirection,
    ) -> Result<Option<Tick>, AmmError> {
        let ticks = self
            .ticks
            .get(&pool_id)
            .ok_or(AmmError::PoolNotFound(pool_id))?;
        let found = match direction {
            SwapDirection::ZeroForOne => ticks.range(..=from.get()).next_back(),
            SwapDirection::OneForZero => ticks
                .range((Bound::Excluded(from.get()), Bound::Unbounded))
                .next(),
        };
        found.map(|(&t, _)| Tick::new(t)).transpose()
    }

    fn cross_tick(&self, pool_id: PoolId, tick: Tick) -> Result<Decimal, AmmError> {
        let ticks = self
            .ticks
            .get(&pool_id)
            .ok_or(AmmError::PoolNotFound(pool_id))?;
        Ok(ticks
            .get(&tick.get())
            .map_or(Decimal::ZERO, TickInfo::liquidity_net))
    }
}
