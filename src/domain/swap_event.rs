//! Notification emitted after a committed swap.

use core::fmt;

use super::{AccountId, Coin, PoolId, Tick};

/// Record of a settled swap, handed to the host's
/// [`EventSink`](crate::traits::EventSink).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapEvent {
    sender: AccountId,
    pool_id: PoolId,
    token_in: Coin,
    token_out: Coin,
    tick: Tick,
}

impl SwapEvent {
    /// Creates a swap event.
    #[must_use]
    pub const fn new(
        sender: AccountId,
        pool_id: PoolId,
        token_in: Coin,
        token_out: Coin,
        tick: Tick,
    ) -> Self {
        Self {
            sender,
            pool_id,
            token_in,
            token_out,
            tick,
        }
    }

    /// Account that initiated the swap.
    #[must_use]
    pub const fn sender(&self) -> &AccountId {
        &self.sender
    }

    /// Pool the swap executed against.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Coin paid into the pool, fee included.
    #[must_use]
    pub const fn token_in(&self) -> &Coin {
        &self.token_in
    }

    /// Coin paid out of the pool.
    #[must_use]
    pub const fn token_out(&self) -> &Coin {
        &self.token_out
    }

    /// Pool tick after the swap.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }
}

impl fmt::Display for SwapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap by {} on pool {}: {} -> {} ({})",
            self.sender, self.pool_id, self.token_in, self.token_out, self.tick
        )
    }
}
