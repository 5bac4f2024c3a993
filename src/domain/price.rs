//! Spot price and square-root price.
//!
//! Price is quoted as token1 per token0. Swap math works on `√price`
//! because liquidity is linear in it: within one tick range
//! `Δtoken1 = L·Δ√P` and `Δtoken0 = L·Δ(1/√P)`.

use core::fmt;

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::AmmError;

/// Strictly positive spot price (token1 per token0).
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::Price;
/// use rust_decimal_macros::dec;
///
/// let p = Price::new(dec!(5000)).expect("positive");
/// let s = p.sqrt().expect("defined");
/// assert_eq!(s.get().round_dp(6), dec!(70.710678));
/// assert!(Price::new(dec!(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(Decimal);

impl Price {
    /// Price of one.
    pub const ONE: Self = Self(Decimal::ONE);

    /// Creates a price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if `value` is zero or negative.
    pub fn new(value: Decimal) -> crate::error::Result<Self> {
        if value <= Decimal::ZERO {
            return Err(AmmError::InvalidPrice("price must be strictly positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Square root of the price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ComputationError`] if the square root cannot be
    /// represented.
    pub fn sqrt(&self) -> crate::error::Result<SqrtPrice> {
        let root = self
            .0
            .sqrt()
            .ok_or(AmmError::ComputationError("square root of price undefined"))?;
        SqrtPrice::new(root)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strictly positive square root of a [`Price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SqrtPrice(Decimal);

impl SqrtPrice {
    /// √price of one.
    pub const ONE: Self = Self(Decimal::ONE);

    /// Creates a √price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if `value` is zero or negative.
    pub fn new(value: Decimal) -> crate::error::Result<Self> {
        if value <= Decimal::ZERO {
            return Err(AmmError::InvalidPrice("sqrt price must be strictly positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Squares back into a spot price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the square exceeds the decimal
    /// range, or [`AmmError::InvalidPrice`] if it underflows to zero.
    pub fn to_price(&self) -> crate::error::Result<Price> {
        let squared = self
            .0
            .checked_mul(self.0)
            .ok_or(AmmError::Overflow("sqrt price squared"))?;
        Price::new(squared)
    }
}

impl fmt::Display for SqrtPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "√{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_must_be_positive() {
        assert!(Price::new(dec!(0)).is_err());
        assert!(Price::new(dec!(-1)).is_err());
        assert!(Price::new(dec!(0.000000000001)).is_ok());
    }

    #[test]
    fn sqrt_price_must_be_positive() {
        assert!(SqrtPrice::new(Decimal::ZERO).is_err());
        assert!(SqrtPrice::new(dec!(70.71)).is_ok());
    }

    #[test]
    fn sqrt_of_perfect_square() {
        let Ok(p) = Price::new(dec!(6250000)) else {
            panic!("expected Ok");
        };
        let Ok(s) = p.sqrt() else {
            panic!("expected Ok");
        };
        assert_eq!(s.get(), dec!(2500));
        let Ok(back) = s.to_price() else {
            panic!("expected Ok");
        };
        assert_eq!(back, p);
    }

    #[test]
    fn sqrt_then_square_is_close() {
        let Ok(p) = Price::new(dec!(5000)) else {
            panic!("expected Ok");
        };
        let Ok(back) = p.sqrt().and_then(|s| s.to_price()) else {
            panic!("expected Ok");
        };
        assert!((back.get() - p.get()).abs() < dec!(0.000000000000000001));
    }

    #[test]
    fn ordering_follows_value() {
        let (Ok(a), Ok(b)) = (SqrtPrice::new(dec!(1)), SqrtPrice::new(dec!(2))) else {
            panic!("expected Ok");
        };
        assert!(a < b);
        assert_eq!(Price::ONE.to_string(), "1");
    }
}
