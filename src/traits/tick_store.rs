//! Sparse, ordered index of initialized ticks.
//!
//! # Search semantics
//!
//! The working tick `t` of a pool means the price lies in
//! `[price(t), price(t + 1))`. Moving down, the lower boundary `t` itself
//! is still ahead of the price, so the search includes it. Moving up, the
//! next boundary is strictly above `t`.
//!
//! | Direction | Candidates |
//! |-----------|------------|
//! | `ZeroForOne` | initialized ticks `<= from` (nearest first) |
//! | `OneForZero` | initialized ticks `> from` (nearest first) |

use rust_decimal::Decimal;

use crate::domain::{PoolId, SwapDirection, Tick};
use crate::error::AmmError;

/// Read access to a pool's initialized ticks.
///
/// All reads made during one swap must observe the same snapshot; taking
/// the store by shared reference for the whole traversal guarantees that.
pub trait TickStore {
    /// Nearest initialized tick from `from` in `direction`, or `None` if
    /// there is no liquidity boundary left on that side.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for unknown pools.
    fn next_initialized_tick(
        &self,
        pool_id: PoolId,
        from: Tick,
        direction: SwapDirection,
    ) -> Result<Option<Tick>, AmmError>;

    /// Signed net-liquidity delta recorded at `tick` for an upward
    /// crossing; zero if the tick is not initialized.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for unknown pools.
    fn cross_tick(&self, pool_id: PoolId, tick: Tick) -> Result<Decimal, AmmError>;
}
