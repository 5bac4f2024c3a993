//! Conversions between token amounts and liquidity for a tick range.
//!
//! Liquidity derived from deposits rounds down and amounts owed for a given
//! liquidity round up, so a position never holds more liquidity than its
//! tokens back.

use rust_decimal::Decimal;

use super::sqrt_price_math::{amount0_delta, amount1_delta};
use super::{div_round, CheckedArithmetic};
use crate::domain::{Liquidity, Rounding, SqrtPrice};
use crate::error::AmmError;

fn ordered(a: SqrtPrice, b: SqrtPrice) -> (Decimal, Decimal) {
    if a <= b {
        (a.get(), b.get())
    } else {
        (b.get(), a.get())
    }
}

fn width(lo: Decimal, hi: Decimal) -> Result<Decimal, AmmError> {
    let w = hi.safe_sub(&lo)?;
    if w.is_zero() {
        return Err(AmmError::InvalidArgument("range must have positive width"));
    }
    Ok(w)
}

/// Liquidity supplied by `amount` of token0 over `[sa, sb]`:
/// `amount·sa·sb / (sb − sa)`.
///
/// # Errors
///
/// - [`AmmError::InvalidArgument`] if the range is empty.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn liquidity0(
    amount: Decimal,
    sqrt_price_a: SqrtPrice,
    sqrt_price_b: SqrtPrice,
) -> Result<Liquidity, AmmError> {
    let (lo, hi) = ordered(sqrt_price_a, sqrt_price_b);
    let numerator = amount.safe_mul(&lo)?.safe_mul(&hi)?;
    Liquidity::new(div_round(numerator, width(lo, hi)?, Rounding::Down)?)
}

/// Liquidity supplied by `amount` of token1 over `[sa, sb]`:
/// `amount / (sb − sa)`.
///
/// # Errors
///
/// - [`AmmError::InvalidArgument`] if the range is empty.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn liquidity1(
    amount: Decimal,
    sqrt_price_a: SqrtPrice,
    sqrt_price_b: SqrtPrice,
) -> Result<Liquidity, AmmError> {
    let (lo, hi) = ordered(sqrt_price_a, sqrt_price_b);
    Liquidity::new(div_round(amount, width(lo, hi)?, Rounding::Down)?)
}

/// Largest liquidity both deposits can back for the range `[sa, sb]` at the
/// current √price.
///
/// Below the range only token0 counts, above it only token1; inside it the
/// smaller of the two.
///
/// # Errors
///
/// - [`AmmError::InvalidArgument`] if the range is empty.
/// - [`AmmError::Overflow`] on intermediate overflow.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::SqrtPrice;
/// use hydra_clmm::math::liquidity_from_amounts;
/// use rust_decimal_macros::dec;
///
/// let sa = SqrtPrice::new(dec!(1)).expect("positive");
/// let sb = SqrtPrice::new(dec!(2)).expect("positive");
/// // Price above the range: only token1 matters, L = 50 / (2 - 1).
/// let cur = SqrtPrice::new(dec!(3)).expect("positive");
/// let l = liquidity_from_amounts(cur, sa, sb, dec!(999), dec!(50)).expect("liquidity");
/// assert_eq!(l.get(), dec!(50));
/// ```
pub fn liquidity_from_amounts(
    sqrt_price: SqrtPrice,
    sqrt_price_a: SqrtPrice,
    sqrt_price_b: SqrtPrice,
    amount0: Decimal,
    amount1: Decimal,
) -> Result<Liquidity, AmmError> {
    let (lo, hi) = if sqrt_price_a <= sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    };
    if sqrt_price <= lo {
        liquidity0(amount0, lo, hi)
    } else if sqrt_price < hi {
        let l0 = liquidity0(amount0, sqrt_price, hi)?;
        let l1 = liquidity1(amount1, lo, sqrt_price)?;
        Ok(l0.min(l1))
    } else {
        liquidity1(amount1, lo, hi)
    }
}

/// Token amounts `(amount0, amount1)` needed to back `liquidity` over the
/// range `[sa, sb]` at the current √price. Rounded up.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] or [`AmmError::DivisionByZero`] from the
/// amount formulas.
pub fn amounts_for_liquidity(
    sqrt_price: SqrtPrice,
    sqrt_price_a: SqrtPrice,
    sqrt_price_b: SqrtPrice,
    liquidity: Liquidity,
) -> Result<(Decimal, Decimal), AmmError> {
    let (lo, hi) = ordered(sqrt_price_a, sqrt_price_b);
    let cur = sqrt_price.get();
    let l = liquidity.get();
    if cur <= lo {
        Ok((amount0_delta(l, lo, hi, Rounding::Up)?, Decimal::ZERO))
    } else if cur < hi {
        Ok((
            amount0_delta(l, cur, hi, Rounding::Up)?,
            amount1_delta(l, lo, cur, Rounding::Up)?,
        ))
    } else {
        Ok((Decimal::ZERO, amount1_delta(l, lo, hi, Rounding::Up)?))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Tick;
    use crate::math::tick_to_sqrt_price;
    use rust_decimal_macros::dec;

    fn sqrt(v: Decimal) -> SqrtPrice {
        let Ok(s) = SqrtPrice::new(v) else {
            panic!("valid sqrt price");
        };
        s
    }

    fn sqrt_at(t: i32) -> SqrtPrice {
        let Ok(s) = Tick::new(t).and_then(tick_to_sqrt_price) else {
            panic!("valid tick");
        };
        s
    }

    #[test]
    fn token1_liquidity_is_amount_over_width() {
        assert_eq!(
            liquidity1(dec!(100), sqrt(dec!(2)), sqrt(dec!(4))).map(|l| l.get()),
            Ok(dec!(50))
        );
    }

    #[test]
    fn token0_liquidity_inverts_amount0_delta() {
        // 25 token0 between √2..√4 with L = 100 (see amount0_delta).
        assert_eq!(
            liquidity0(dec!(25), sqrt(dec!(2)), sqrt(dec!(4))).map(|l| l.get()),
            Ok(dec!(100))
        );
    }

    #[test]
    fn empty_range_rejected() {
        assert!(matches!(
            liquidity1(dec!(1), sqrt(dec!(2)), sqrt(dec!(2))),
            Err(AmmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn below_range_uses_token0_only() {
        let Ok(l) = liquidity_from_amounts(sqrt(dec!(1)), sqrt(dec!(2)), sqrt(dec!(4)), dec!(25), dec!(0))
        else {
            panic!("expected Ok");
        };
        assert_eq!(l.get(), dec!(100));
    }

    #[test]
    fn eth_usdc_reference_position() {
        let Ok(l) = liquidity_from_amounts(
            sqrt(dec!(70.710678118654752440084436210)),
            sqrt_at(84_222),
            sqrt_at(86_129),
            dec!(1000000),
            dec!(5000000000),
        ) else {
            panic!("expected Ok");
        };
        let expected = dec!(1517818840.967415409395054436);
        assert!((l.get() - expected).abs() < dec!(0.01));
    }

    #[test]
    fn amounts_cover_derived_liquidity() {
        let cur = sqrt(dec!(70.710678118654752440084436210));
        let (lo, hi) = (sqrt_at(84_222), sqrt_at(86_129));
        let Ok(l) = liquidity_from_amounts(cur, lo, hi, dec!(1000000), dec!(5000000000)) else {
            panic!("expected Ok");
        };
        let Ok((a0, a1)) = amounts_for_liquidity(cur, lo, hi, l) else {
            panic!("expected Ok");
        };
        // The binding side is fully used; the other side needs no more than deposited.
        assert!(a0 <= dec!(1000000.000001));
        assert!(a1 <= dec!(5000000000.000001));
        assert!(a0 > dec!(999000) || a1 > dec!(4999000000));
    }

    #[test]
    fn amounts_outside_range_are_one_sided() {
        let l = Liquidity::new(dec!(100)).unwrap_or(Liquidity::ZERO);
        let Ok((a0, a1)) = amounts_for_liquidity(sqrt(dec!(5)), sqrt(dec!(2)), sqrt(dec!(4)), l)
        else {
            panic!("expected Ok");
        };
        assert_eq!(a0, Decimal::ZERO);
        assert_eq!(a1, dec!(200));
    }
}
