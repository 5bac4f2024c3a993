//! Directional rounding of decimal intermediates.
//!
//! Decimal operations keep up to 28 fractional digits. Swap math pins
//! intermediate amounts and prices to [`PRECISION`] digits with an
//! explicit direction so that the last digit always favors the pool.
//!
//! # Convention
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Amount the trader pays | [`Rounding::Up`] |
//! | Amount the trader receives | [`Rounding::Down`] |
//! | Next √price | toward the current √price |
//!
//! # Examples
//!
//! ```
//! use hydra_clmm::domain::Rounding;
//! use hydra_clmm::math::{div_round, round_to_precision};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(div_round(dec!(2), dec!(3), Rounding::Down), Ok(dec!(0.666666666666666666)));
//! assert_eq!(div_round(dec!(2), dec!(3), Rounding::Up), Ok(dec!(0.666666666666666667)));
//! assert_eq!(round_to_precision(dec!(1.5), Rounding::Up), dec!(1.5));
//! ```

use rust_decimal::Decimal;

use super::CheckedArithmetic;
use crate::domain::Rounding;
use crate::error::AmmError;

/// Number of fractional digits kept in swap math intermediates.
pub const PRECISION: u32 = 18;

/// Rounds `value` to [`PRECISION`] fractional digits in the given
/// direction. Values with fewer digits are returned unchanged.
#[must_use]
pub fn round_to_precision(value: Decimal, rounding: Rounding) -> Decimal {
    value.round_dp_with_strategy(PRECISION, rounding.strategy())
}

/// Decimal division rounded to [`PRECISION`] digits in the given
/// direction.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient is out of range.
pub fn div_round(
    numerator: Decimal,
    denominator: Decimal,
    rounding: Rounding,
) -> Result<Decimal, AmmError> {
    numerator
        .safe_div(&denominator)
        .map(|q| round_to_precision(q, rounding))
}
