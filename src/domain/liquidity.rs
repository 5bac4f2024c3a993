//! Active liquidity within a tick range.

use core::fmt;

use rust_decimal::Decimal;

use crate::error::AmmError;

/// Non-negative liquidity `L`, the depth of the pool inside the current
/// tick range.
///
/// Liquidity is a decimal rather than an integer because it is derived
/// from token amounts and √prices (`L = Δy / Δ√P`). Signed per-tick
/// deltas are plain [`Decimal`]s applied through
/// [`add_delta`](Self::add_delta).
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::Liquidity;
/// use rust_decimal_macros::dec;
///
/// let l = Liquidity::new(dec!(1500)).expect("non-negative");
/// let after = l.add_delta(dec!(-500)).expect("stays non-negative");
/// assert_eq!(after.get(), dec!(1000));
/// assert!(l.add_delta(dec!(-2000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Liquidity(Decimal);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a liquidity value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] if `value` is negative.
    pub fn new(value: Decimal) -> crate::error::Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmmError::InvalidArgument("liquidity must not be negative"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if there is no liquidity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Applies a signed net-liquidity delta.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if the sum exceeds the decimal range.
    /// - [`AmmError::NoLiquidity`] if the result would be negative.
    pub fn add_delta(&self, delta: Decimal) -> crate::error::Result<Self> {
        let next = self
            .0
            .checked_add(delta)
            .ok_or(AmmError::Overflow("liquidity delta"))?;
        if next < Decimal::ZERO {
            return Err(AmmError::NoLiquidity("liquidity would become negative"));
        }
        Ok(Self(next))
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
