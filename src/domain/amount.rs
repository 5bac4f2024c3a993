//! Integer token amount crossing the public boundary.

use core::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::Rounding;
use crate::error::AmmError;

/// A non-negative token amount in the denomination's smallest unit.
///
/// Swap math runs on [`Decimal`]; amounts enter and leave the core as
/// integers. Conversion back from a decimal always takes an explicit
/// [`Rounding`] so the caller decides who absorbs the fractional part.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{Amount, Rounding};
/// use rust_decimal_macros::dec;
///
/// let a = Amount::from_decimal(dec!(8396.71), Rounding::Down).expect("fits");
/// assert_eq!(a, Amount::new(8_396));
/// let b = Amount::from_decimal(dec!(8396.71), Rounding::Up).expect("fits");
/// assert_eq!(b, Amount::new(8_397));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Converts the amount into a [`Decimal`] for swap math.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the amount exceeds the decimal
    /// mantissa (roughly `7.9e28`).
    pub fn to_decimal(&self) -> crate::error::Result<Decimal> {
        Decimal::from_u128(self.0).ok_or(AmmError::Overflow("amount exceeds decimal range"))
    }

    /// Converts a non-negative decimal into an integer amount.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ComputationError`] if `value` is negative.
    /// - [`AmmError::Overflow`] if the rounded value does not fit `u128`.
    pub fn from_decimal(value: Decimal, rounding: Rounding) -> crate::error::Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmmError::ComputationError(
                "negative value cannot become an amount",
            ));
        }
        let rounded = match rounding {
            Rounding::Up => value.ceil(),
            Rounding::Down => value.trunc(),
        };
        rounded
            .to_u128()
            .map(Self)
            .ok_or(AmmError::Overflow("rounded value does not fit an amount"))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
