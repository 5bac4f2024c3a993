//! Concentrated liquidity pool state.

use core::fmt;

use super::{AccountId, DenomPair, Liquidity, SqrtPrice, Tick};

/// Identifier of a pool within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolId(u64);

impl PoolId {
    /// Creates a pool id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable state of one pool: where the price sits and how much liquidity
/// is active there.
///
/// # Invariants
///
/// - `tick == sqrt_price_to_tick(sqrt_price)` whenever the pool is at rest.
/// - `liquidity` equals the sum of the net deltas of every initialized tick
///   at or below `tick`.
///
/// The swap core never constructs a `Pool` from scratch; it reads one
/// from a [`PoolStore`](crate::traits::PoolStore), computes a new
/// state with [`with_swap_state`](Self::with_swap_state), and hands it back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    id: PoolId,
    denoms: DenomPair,
    sqrt_price: SqrtPrice,
    tick: Tick,
    liquidity: Liquidity,
}

impl Pool {
    /// Creates a pool at the given price state.
    #[must_use]
    pub const fn new(
        id: PoolId,
        denoms: DenomPair,
        sqrt_price: SqrtPrice,
        tick: Tick,
        liquidity: Liquidity,
    ) -> Self {
        Self {
            id,
            denoms,
            sqrt_price,
            tick,
            liquidity,
        }
    }

    /// Returns the pool id.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Returns the canonically ordered denominations.
    #[must_use]
    pub const fn denoms(&self) -> &DenomPair {
        &self.denoms
    }

    /// Returns the current √price.
    #[must_use]
    pub const fn sqrt_price(&self) -> SqrtPrice {
        self.sqrt_price
    }

    /// Returns the current tick.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Returns the active liquidity.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Escrow account holding this pool's reserves.
    #[must_use]
    pub fn address(&self) -> AccountId {
        AccountId::for_pool(self.id)
    }

    /// Returns a copy of the pool moved to a new price state.
    #[must_use]
    pub fn with_swap_state(&self, sqrt_price: SqrtPrice, tick: Tick, liquidity: Liquidity) -> Self {
        Self {
            id: self.id,
            denoms: self.denoms.clone(),
            sqrt_price,
            tick,
            liquidity,
        }
    }

    /// Replaces the active liquidity, as done by liquidity provisioning.
    pub fn set_liquidity(&mut self, liquidity: Liquidity) {
        self.liquidity = liquidity;
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool#{} {}/{} {} {} L={}",
            self.id,
            self.denoms.token0(),
            self.denoms.token1(),
            self.tick,
            self.sqrt_price,
            self.liquidity
        )
    }
}
