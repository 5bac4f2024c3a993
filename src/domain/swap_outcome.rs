//! Result of a computed (not yet committed) swap.

use core::fmt;

use super::{Amount, Coin, Liquidity, SqrtPrice, Tick};

/// Amounts exchanged and the pool state a swap would leave behind.
///
/// Produced by the orchestrator from its local state only; nothing is
/// persisted until an applier commits it.
///
/// `token_in` is the input the pool actually absorbed. For exact-in that
/// is the after-fee input minus what was left over, rounded up; for
/// exact-out it is the fee-inclusive cost. `charged` is what settlement
/// debits from the trader: the fee-inclusive input in both modes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOutcome {
    token_in: Coin,
    charged: Amount,
    token_out: Coin,
    tick: Tick,
    liquidity: Liquidity,
    sqrt_price: SqrtPrice,
}

impl SwapOutcome {
    /// Creates an outcome.
    #[must_use]
    pub const fn new(
        token_in: Coin,
        charged: Amount,
        token_out: Coin,
        tick: Tick,
        liquidity: Liquidity,
        sqrt_price: SqrtPrice,
    ) -> Self {
        Self {
            token_in,
            charged,
            token_out,
            tick,
            liquidity,
            sqrt_price,
        }
    }

    /// Input the pool absorbed.
    #[must_use]
    pub const fn token_in(&self) -> &Coin {
        &self.token_in
    }

    /// Fee-inclusive amount of the input denom the trader is debited.
    #[must_use]
    pub const fn charged(&self) -> Amount {
        self.charged
    }

    /// [`Self::charged`] as a coin of the input denom.
    #[must_use]
    pub fn charged_coin(&self) -> Coin {
        Coin::new(self.token_in.denom().clone(), self.charged)
    }

    /// What the trader receives.
    #[must_use]
    pub const fn token_out(&self) -> &Coin {
        &self.token_out
    }

    /// Final working tick.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Final working liquidity.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Final working √price.
    #[must_use]
    pub const fn sqrt_price(&self) -> SqrtPrice {
        self.sqrt_price
    }

    /// Returns `true` if nothing was exchanged.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token_in.is_zero() && self.charged.is_zero() && self.token_out.is_zero()
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} at {} (L={})",
            self.token_in, self.token_out, self.tick, self.liquidity
        )
    }
}
