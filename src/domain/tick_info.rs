//! Per-tick liquidity bookkeeping.

use rust_decimal::Decimal;

/// State recorded at an initialized tick.
///
/// `liquidity_net` is the change in active liquidity when the price
/// crosses this tick moving *up*. A range `[lower, upper)` with liquidity
/// `L` contributes `+L` at `lower` and `-L` at `upper`. A tick whose net
/// delta is zero is not initialized and is dropped from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickInfo {
    liquidity_net: Decimal,
}

impl TickInfo {
    /// Creates tick info with the given net delta.
    #[must_use]
    pub const fn new(liquidity_net: Decimal) -> Self {
        Self { liquidity_net }
    }

    /// Signed liquidity change for an upward crossing.
    #[must_use]
    pub const fn liquidity_net(&self) -> Decimal {
        self.liquidity_net
    }

    /// Returns `true` if the tick carries a non-zero delta.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.liquidity_net.is_zero()
    }

    /// Adds `delta` to the net liquidity. `None` on decimal overflow.
    #[must_use]
    pub fn checked_apply(&self, delta: Decimal) -> Option<Self> {
        self.liquidity_net.checked_add(delta).map(Self::new)
    }
}
