//! Checked arithmetic for exact decimals.
//!
//! The [`CheckedArithmetic`] trait wraps `rust_decimal`'s `checked_*`
//! operations so that swap math can use `?` instead of matching on
//! `Option` at every step. Each method names the failure it reports.
//!
//! # Examples
//!
//! ```
//! use hydra_clmm::math::CheckedArithmetic;
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//!
//! let q = dec!(10).safe_div(&dec!(4));
//! assert_eq!(q, Ok(dec!(2.5)));
//! assert!(dec!(1).safe_div(&Decimal::ZERO).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::AmmError;

/// Fallible arithmetic that maps failures onto [`AmmError`].
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead of clamping.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `divisor` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds the range.
    fn safe_div(&self, divisor: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Decimal {
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(*other)
            .ok_or(AmmError::Overflow("decimal addition"))
    }

    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(*other)
            .ok_or(AmmError::Overflow("decimal subtraction"))
    }

    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(*other)
            .ok_or(AmmError::Overflow("decimal multiplication"))
    }

    fn safe_div(&self, divisor: &Self) -> Result<Self, AmmError> {
        if divisor.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        self.checked_div(*divisor)
            .ok_or(AmmError::Overflow("decimal division"))
    }
}
