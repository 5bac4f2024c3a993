//! Token amounts and √price movement within one constant-liquidity range.
//!
//! For liquidity `L` between √prices `a < b`:
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | token0 | `L·(b − a) / (a·b)` |
//! | token1 | `L·(b − a)` |
//!
//! Inverting those gives the √price reached after adding or removing an
//! amount of either token. Every function takes an explicit
//! [`Rounding`] and pins its result to [`PRECISION`](super::PRECISION)
//! fractional digits in that direction.

use rust_decimal::Decimal;

use super::{div_round, round_to_precision, CheckedArithmetic};
use crate::domain::Rounding;
use crate::error::AmmError;

fn ordered(a: Decimal, b: Decimal) -> (Decimal, Decimal) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Amount of token0 between two √prices: `L·(b − a)/(a·b)`.
///
/// The √prices may be given in either order.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if either √price is zero.
/// - [`AmmError::Overflow`] if an intermediate exceeds the decimal range.
pub fn amount0_delta(
    liquidity: Decimal,
    sqrt_price_a: Decimal,
    sqrt_price_b: Decimal,
    rounding: Rounding,
) -> Result<Decimal, AmmError> {
    let (lo, hi) = ordered(sqrt_price_a, sqrt_price_b);
    let per_hi = liquidity.safe_mul(&hi.safe_sub(&lo)?)?.safe_div(&hi)?;
    div_round(per_hi, lo, rounding)
}

/// Amount of token1 between two √prices: `L·(b − a)`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the product exceeds the decimal range.
pub fn amount1_delta(
    liquidity: Decimal,
    sqrt_price_a: Decimal,
    sqrt_price_b: Decimal,
    rounding: Rounding,
) -> Result<Decimal, AmmError> {
    let (lo, hi) = ordered(sqrt_price_a, sqrt_price_b);
    liquidity
        .safe_mul(&hi.safe_sub(&lo)?)
        .map(|v| round_to_precision(v, rounding))
}

/// √price after adding `amount` of token0: `L·√P / (L + amount·√P)`.
///
/// Price moves down.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if liquidity and amount are both zero.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn next_sqrt_price_from_amount0_in(
    sqrt_price: Decimal,
    liquidity: Decimal,
    amount: Decimal,
    rounding: Rounding,
) -> Result<Decimal, AmmError> {
    let numerator = liquidity.safe_mul(&sqrt_price)?;
    let denominator = liquidity.safe_add(&amount.safe_mul(&sqrt_price)?)?;
    div_round(numerator, denominator, rounding)
}

/// √price after removing `amount` of token0: `L·√P / (L − amount·√P)`.
///
/// Price moves up.
///
/// # Errors
///
/// - [`AmmError::NoLiquidity`] if the range does not hold `amount` of
///   token0 (`amount·√P ≥ L`).
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn next_sqrt_price_from_amount0_out(
    sqrt_price: Decimal,
    liquidity: Decimal,
    amount: Decimal,
    rounding: Rounding,
) -> Result<Decimal, AmmError> {
    let numerator = liquidity.safe_mul(&sqrt_price)?;
    let denominator = liquidity.safe_sub(&amount.safe_mul(&sqrt_price)?)?;
    if denominator <= Decimal::ZERO {
        return Err(AmmError::NoLiquidity(
            "requested token0 exceeds what the range holds",
        ));
    }
    div_round(numerator, denominator, rounding)
}

/// √price after adding `amount` of token1: `√P + amount / L`.
///
/// Price moves up.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if liquidity is zero.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn next_sqrt_price_from_amount1_in(
    sqrt_price: Decimal,
    liquidity: Decimal,
    amount: Decimal,
    rounding: Rounding,
) -> Result<Decimal, AmmError> {
    let delta = div_round(amount, liquidity, rounding)?;
    sqrt_price.safe_add(&delta)
}

/// √price after removing `amount` of token1: `√P − amount / L`.
///
/// Price moves down. `rounding` applies to the resulting √price, so the
/// quotient is rounded the opposite way.
///
/// # Errors
///
/// - [`AmmError::NoLiquidity`] if the range does not hold `amount` of
///   token1.
/// - [`AmmError::DivisionByZero`] if liquidity is zero.
pub fn next_sqrt_price_from_amount1_out(
    sqrt_price: Decimal,
    liquidity: Decimal,
    amount: Decimal,
    rounding: Rounding,
) -> Result<Decimal, AmmError> {
    let delta = div_round(amount, liquidity, rounding.opposite())?;
    let next = sqrt_price.safe_sub(&delta)?;
    if next <= Decimal::ZERO {
        return Err(AmmError::NoLiquidity(
            "requested token1 exceeds what the range holds",
        ));
    }
    Ok(next)
}
