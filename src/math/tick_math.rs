//! PriceTick codec: conversions between prices, √prices and ticks.
//!
//! Ticks discretize price as `price = 1.0001^tick`. The forward direction
//! is an exact-decimal integer power; the reverse direction estimates the
//! tick with a logarithm and then refines it against the forward
//! direction, so both directions agree exactly:
//!
//! - `price_to_tick(price_at_tick(t)) == t`
//! - `sqrt_price_to_tick(tick_to_sqrt_price(t)) == t`
//!
//! # Functions
//!
//! - [`price_at_tick`] / [`tick_to_sqrt_price`]: tick → price / √price.
//! - [`price_to_tick`] / [`sqrt_price_to_tick`]: greatest tick whose
//!   price (√price) is ≤ the given value.
//!
//! # Examples
//!
//! ```
//! use hydra_clmm::domain::Tick;
//! use hydra_clmm::math::{price_to_tick, sqrt_price_to_tick, tick_to_sqrt_price};
//! use rust_decimal_macros::dec;
//!
//! let tick = price_to_tick(dec!(5000)).expect("positive price");
//! assert_eq!(tick.get(), 85_176);
//!
//! let sqrt = tick_to_sqrt_price(tick).expect("in range");
//! assert_eq!(sqrt_price_to_tick(sqrt).expect("in range"), tick);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::CheckedArithmetic;
use crate::domain::{Price, SqrtPrice, Tick, MAX_TICK, MIN_TICK};
use crate::error::AmmError;

/// Base of the tick-price exponential: `price = TICK_BASE^tick`.
pub const TICK_BASE: Decimal = dec!(1.0001);

/// Smallest √price any pool may reach.
pub const MIN_SQRT_RATIO: Decimal = dec!(0.000001);

/// Largest √price any pool may reach.
pub const MAX_SQRT_RATIO: Decimal = dec!(1000000);

/// Smallest spot price (`MIN_SQRT_RATIO²`).
pub const MIN_SPOT_PRICE: Decimal = dec!(0.000000000001);

/// Largest spot price (`MAX_SQRT_RATIO²`).
pub const MAX_SPOT_PRICE: Decimal = dec!(1000000000000);

/// Upper bound on ±1 corrections applied to the logarithmic estimate
/// before falling back to bisection.
const MAX_REFINEMENT_STEPS: u32 = 16;

/// Computes `1.0001^tick` for any integer exponent, without range checks.
fn raw_price_at(tick: i64) -> Result<Decimal, AmmError> {
    TICK_BASE
        .checked_powi(tick)
        .ok_or(AmmError::Overflow("tick power"))
}

/// Computes `sqrt(1.0001^tick)` for any integer exponent.
fn raw_sqrt_price_at(tick: i64) -> Result<Decimal, AmmError> {
    raw_price_at(tick)?
        .sqrt()
        .ok_or(AmmError::ComputationError("square root of tick price undefined"))
}

/// Finds the greatest tick `t` in `[MIN_TICK, MAX_TICK]` with
/// `value_at(t) <= target`, starting from `estimate`.
///
/// `value_at` must be strictly increasing in `t`.
fn refine_tick<F>(estimate: i64, target: Decimal, value_at: F) -> Result<Tick, AmmError>
where
    F: Fn(i64) -> Result<Decimal, AmmError>,
{
    let min = i64::from(MIN_TICK);
    let max = i64::from(MAX_TICK);

    if target < value_at(min)? {
        return Err(AmmError::TickOutOfBounds(min - 1));
    }
    if target >= value_at(max + 1)? {
        return Err(AmmError::TickOutOfBounds(max + 1));
    }

    let mut tick = estimate.clamp(min, max);
    for _ in 0..MAX_REFINEMENT_STEPS {
        if value_at(tick)? > target {
            tick -= 1;
        } else if value_at(tick + 1)? <= target {
            tick += 1;
        } else {
            return Tick::from_i64(tick);
        }
    }

    // The estimate was far off; bisect over the whole range instead.
    let (mut lo, mut hi) = (min, max + 1);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if value_at(mid)? <= target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Tick::from_i64(lo)
}

/// Logarithmic tick estimate: `floor(ln(value) / ln(1.0001) * scale)`.
fn estimate_tick(value: Decimal, scale: Decimal) -> Result<i64, AmmError> {
    let ln_value = value
        .checked_ln()
        .ok_or(AmmError::ComputationError("logarithm of price undefined"))?;
    let ln_base = TICK_BASE
        .checked_ln()
        .ok_or(AmmError::ComputationError("logarithm of tick base undefined"))?;
    let raw = ln_value.safe_mul(&scale)?.safe_div(&ln_base)?.floor();
    raw.to_i64()
        .ok_or(AmmError::ComputationError("tick estimate does not fit an integer"))
}

/// Computes the price at a tick: `1.0001^tick`.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if the power cannot be represented (does not
///   happen for ticks in range).
/// - [`AmmError::InvalidPrice`] if the result rounds to zero.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::Tick;
/// use hydra_clmm::math::price_at_tick;
/// use rust_decimal::Decimal;
///
/// assert_eq!(price_at_tick(Tick::ZERO).map(|p| p.get()), Ok(Decimal::ONE));
/// ```
pub fn price_at_tick(tick: Tick) -> Result<Price, AmmError> {
    Price::new(raw_price_at(i64::from(tick.get()))?)
}

/// Computes the √price at a tick boundary.
///
/// # Errors
///
/// - [`AmmError::ComputationError`] if the square root is undefined.
/// - Errors from [`price_at_tick`].
pub fn tick_to_sqrt_price(tick: Tick) -> Result<SqrtPrice, AmmError> {
    SqrtPrice::new(raw_sqrt_price_at(i64::from(tick.get()))?)
}

/// Computes the √price at a raw tick index, validating the range first.
///
/// # Errors
///
/// - [`AmmError::TickOutOfBounds`] if `tick` is outside
///   `[MIN_TICK, MAX_TICK]`.
/// - Errors from [`tick_to_sqrt_price`].
pub fn tick_index_to_sqrt_price(tick: i64) -> Result<SqrtPrice, AmmError> {
    tick_to_sqrt_price(Tick::from_i64(tick)?)
}

/// Maps a price to the greatest tick whose price is ≤ `price`.
///
/// Monotonic and deterministic.
///
/// # Errors
///
/// - [`AmmError::InvalidPrice`] if `price` is zero or negative.
/// - [`AmmError::TickOutOfBounds`] if the tick falls outside
///   `[MIN_TICK, MAX_TICK]`.
pub fn price_to_tick(price: Decimal) -> Result<Tick, AmmError> {
    if price <= Decimal::ZERO {
        return Err(AmmError::InvalidPrice(
            "price must be positive for tick conversion",
        ));
    }
    let estimate = estimate_tick(price, Decimal::ONE)?;
    refine_tick(estimate, price, raw_price_at)
}

/// Maps a √price to the greatest tick whose √price is ≤ `sqrt_price`.
///
/// This is the conversion that keeps a pool's tick consistent with its
/// √price at rest.
///
/// # Errors
///
/// - [`AmmError::TickOutOfBounds`] if the tick falls outside
///   `[MIN_TICK, MAX_TICK]`.
/// - [`AmmError::ComputationError`] if the logarithm is undefined.
pub fn sqrt_price_to_tick(sqrt_price: SqrtPrice) -> Result<Tick, AmmError> {
    let estimate = estimate_tick(sqrt_price.get(), dec!(2))?;
    refine_tick(estimate, sqrt_price.get(), raw_sqrt_price_at)
}
