//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_clmm::prelude::*;
//! ```
//!
//! This re-exports the domain types, host traits, the swap engine and its
//! requests, configuration, the in-memory host and the error types.

pub use crate::domain::{
    AccountId, Amount, Coin, Denom, DenomPair, FeeRate, Liquidity, Pool, PoolId, Price, Rounding,
    SqrtPrice, SwapDirection, SwapEvent, SwapKind, SwapMode, SwapOutcome, Tick, TickInfo,
};

pub use crate::traits::{Bank, EventSink, PoolStore, TickStore};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{PoolConfig, SwapParams};

pub use crate::swap::{ExactInRequest, ExactOutRequest, SwapEngine};

pub use crate::store::{MemoryBank, MemoryStore};

pub use crate::factory::PoolFactory;

pub use crate::error::{AmmError, Result};
