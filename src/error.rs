//! Unified error type for the swap core.
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias
//! for `core::result::Result<T, AmmError>`. Variants carry a static
//! context string so call sites can say *which* precondition failed
//! without allocating.
//!
//! # Taxonomy
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidArgument`](AmmError::InvalidArgument) | request validation (denoms, zero amounts) |
//! | [`InvalidPrice`](AmmError::InvalidPrice) | non-positive prices |
//! | [`TickOutOfBounds`](AmmError::TickOutOfBounds) | tick codec |
//! | [`PriceLimitViolation`](AmmError::PriceLimitViolation) | orchestrator preconditions |
//! | [`NoLiquidity`](AmmError::NoLiquidity) | tick traversal |
//! | [`SlippageExceeded`](AmmError::SlippageExceeded) | swap applier |
//! | [`ComputationDivergence`](AmmError::ComputationDivergence) | iteration cap |
//! | [`TransferFailed`](AmmError::TransferFailed) | settlement |

use crate::domain::PoolId;

/// Errors produced by the concentrated liquidity swap core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// A caller-supplied argument is malformed (same denom on both sides,
    /// denom not in pool, zero amount).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A price is non-positive or otherwise unusable.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A tick value could not be constructed.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// A codec conversion landed outside the representable tick range.
    #[error("tick {0} is outside the representable range")]
    TickOutOfBounds(i64),

    /// A fee rate is outside `[0, 1)`.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The price limit is on the wrong side of the current price, outside
    /// the protocol bounds, or was reached before an exact output filled.
    #[error("price limit violation: {0}")]
    PriceLimitViolation(&'static str),

    /// The traversal ran out of initialized ticks or liquidity.
    #[error("no liquidity: {0}")]
    NoLiquidity(&'static str),

    /// The realized amounts breach the caller's minimum or maximum.
    #[error("slippage exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// A numeric operation is undefined for its input.
    #[error("computation error: {0}")]
    ComputationError(&'static str),

    /// The swap loop did not converge within the iteration cap.
    #[error("swap did not converge after {iterations} iterations")]
    ComputationDivergence {
        /// Number of iterations executed before giving up.
        iterations: u32,
    },

    /// A decimal operation exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// No pool is stored under the given id.
    #[error("pool {0} not found")]
    PoolNotFound(PoolId),

    /// A pool with the given id already exists.
    #[error("pool {0} already exists")]
    PoolAlreadyExists(PoolId),

    /// A balance transfer leg failed.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
