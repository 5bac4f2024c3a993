//! Working state of one swap traversal.

use rust_decimal::Decimal;

use crate::domain::{Liquidity, Pool, SqrtPrice, Tick};

/// Mutable state carried across traversal iterations.
///
/// `amount_remaining` is the caller's specified side still to fill (input
/// for exact-in, output for exact-out) and `amount_calculated` the other
/// side accumulated so far. Owned by a single traversal and dropped when it
/// returns; pool state is only touched by the applier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwapState {
    pub(crate) amount_remaining: Decimal,
    pub(crate) amount_calculated: Decimal,
    pub(crate) sqrt_price: SqrtPrice,
    pub(crate) tick: Tick,
    pub(crate) liquidity: Liquidity,
    pub(crate) iterations: u32,
}

impl SwapState {
    /// Starts a traversal from the pool's current state.
    pub(crate) fn new(pool: &Pool, amount_specified: Decimal) -> Self {
        Self {
            amount_remaining: amount_specified,
            amount_calculated: Decimal::ZERO,
            sqrt_price: pool.sqrt_price(),
            tick: pool.tick(),
            liquidity: pool.liquidity(),
            iterations: 0,
        }
    }
}
