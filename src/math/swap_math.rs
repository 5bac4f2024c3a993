//! Swap Step Calculator: one uninterrupted constant-liquidity segment.
//!
//! A step moves the √price from `current` toward `target` using as much of
//! the remaining specified amount as the segment can absorb:
//!
//! - If the remaining amount covers the whole segment, the price lands
//!   exactly on `target` and the amounts are those of the full segment.
//!   The caller treats `sqrt_price_next == target` as "boundary reached".
//! - Otherwise the remaining amount is consumed entirely and the price
//!   settles between `current` and `target`.
//!
//! Every rounding direction is read from the [`SwapKind`] table:
//!
//! | Quantity | Rounding |
//! |----------|----------|
//! | specified side | [`SwapKind::specified_rounding`] |
//! | derived side | [`SwapKind::calculated_rounding`] |
//! | partial-step √price | [`SwapKind::sqrt_price_rounding`] |

use rust_decimal::Decimal;

use super::sqrt_price_math::{
    amount0_delta, amount1_delta, next_sqrt_price_from_amount0_in,
    next_sqrt_price_from_amount0_out, next_sqrt_price_from_amount1_in,
    next_sqrt_price_from_amount1_out,
};
use crate::domain::{Liquidity, Rounding, SqrtPrice, SwapDirection, SwapKind, SwapMode};
use crate::error::AmmError;

/// Price movement and amounts exchanged within one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStep {
    /// √price at the end of the step.
    pub sqrt_price_next: SqrtPrice,
    /// Input the pool receives during the step.
    pub amount_in: Decimal,
    /// Output the pool pays out during the step.
    pub amount_out: Decimal,
}

impl SwapStep {
    /// Returns `true` if the step ended exactly on `target`.
    #[must_use]
    pub fn reached(&self, target: SqrtPrice) -> bool {
        self.sqrt_price_next == target
    }
}

/// Token amount between two √prices for a given liquidity.
type Delta = fn(Decimal, Decimal, Decimal, Rounding) -> Result<Decimal, AmmError>;

/// √price reached from a starting √price after moving an amount.
type NextSqrtPrice = fn(Decimal, Decimal, Decimal, Rounding) -> Result<Decimal, AmmError>;

fn clamp_between(value: Decimal, a: Decimal, b: Decimal) -> Decimal {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    value.clamp(lo, hi)
}

/// Exact-in step: `amount_remaining` is input still to be swapped (after
/// fees).
///
/// # Errors
///
/// - [`AmmError::NoLiquidity`] if `liquidity` is zero.
/// - Arithmetic errors from the √price math.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{Liquidity, SqrtPrice};
/// use hydra_clmm::math::compute_swap_step;
/// use rust_decimal_macros::dec;
///
/// let cur = SqrtPrice::new(dec!(2)).expect("positive");
/// let target = SqrtPrice::new(dec!(3)).expect("positive");
/// let liq = Liquidity::new(dec!(100)).expect("non-negative");
///
/// // 100 token1 fills the whole segment: Δ√P = 1.
/// let step = compute_swap_step(cur, target, liq, dec!(250), false).expect("step");
/// assert!(step.reached(target));
/// assert_eq!(step.amount_in, dec!(100));
/// ```
pub fn compute_swap_step(
    sqrt_price_current: SqrtPrice,
    sqrt_price_target: SqrtPrice,
    liquidity: Liquidity,
    amount_remaining: Decimal,
    zero_for_one: bool,
) -> Result<SwapStep, AmmError> {
    let direction = if zero_for_one {
        SwapDirection::ZeroForOne
    } else {
        SwapDirection::OneForZero
    };
    step_for(
        SwapKind::new(SwapMode::ExactIn, direction),
        sqrt_price_current,
        sqrt_price_target,
        liquidity,
        amount_remaining,
    )
}

/// Exact-out step: `amount_remaining` is output still wanted.
///
/// # Errors
///
/// - [`AmmError::NoLiquidity`] if `liquidity` is zero.
/// - Arithmetic errors from the √price math.
pub fn compute_swap_step_exact_out(
    sqrt_price_current: SqrtPrice,
    sqrt_price_target: SqrtPrice,
    liquidity: Liquidity,
    amount_remaining: Decimal,
    zero_for_one: bool,
) -> Result<SwapStep, AmmError> {
    let direction = if zero_for_one {
        SwapDirection::ZeroForOne
    } else {
        SwapDirection::OneForZero
    };
    step_for(
        SwapKind::new(SwapMode::ExactOut, direction),
        sqrt_price_current,
        sqrt_price_target,
        liquidity,
        amount_remaining,
    )
}

/// Computes one step for any [`SwapKind`].
///
/// `amount_remaining` is the caller's specified side: input for exact-in,
/// output for exact-out.
///
/// # Errors
///
/// - [`AmmError::NoLiquidity`] if `liquidity` is zero.
/// - Arithmetic errors from the √price math.
pub fn step_for(
    kind: SwapKind,
    sqrt_price_current: SqrtPrice,
    sqrt_price_target: SqrtPrice,
    liquidity: Liquidity,
    amount_remaining: Decimal,
) -> Result<SwapStep, AmmError> {
    if liquidity.is_zero() {
        return Err(AmmError::NoLiquidity("swap step requires active liquidity"));
    }
    let cur = sqrt_price_current.get();
    let target = sqrt_price_target.get();
    let l = liquidity.get();
    let zero_for_one = kind.direction().is_zero_for_one();

    // Moving down the pool receives token0 and pays token1; moving up it
    // is the other way round.
    let (input_delta, output_delta) = if zero_for_one {
        (amount0_delta as Delta, amount1_delta as Delta)
    } else {
        (amount1_delta as Delta, amount0_delta as Delta)
    };
    let (specified_delta, calculated_delta) = if kind.is_exact_in() {
        (input_delta, output_delta)
    } else {
        (output_delta, input_delta)
    };
    let next_from_remaining: NextSqrtPrice = match (kind.mode(), zero_for_one) {
        (SwapMode::ExactIn, true) => next_sqrt_price_from_amount0_in,
        (SwapMode::ExactIn, false) => next_sqrt_price_from_amount1_in,
        (SwapMode::ExactOut, true) => next_sqrt_price_from_amount1_out,
        (SwapMode::ExactOut, false) => next_sqrt_price_from_amount0_out,
    };

    let max_specified = specified_delta(l, cur, target, kind.specified_rounding())?;
    let (next, specified) = if amount_remaining >= max_specified {
        (target, max_specified)
    } else {
        let next = next_from_remaining(cur, l, amount_remaining, kind.sqrt_price_rounding())?;
        (clamp_between(next, cur, target), amount_remaining)
    };
    let calculated = calculated_delta(l, cur, next, kind.calculated_rounding())?;

    let (amount_in, amount_out) = if kind.is_exact_in() {
        (specified, calculated)
    } else {
        (calculated, specified)
    };

    Ok(SwapStep {
        sqrt_price_next: SqrtPrice::new(next)?,
        amount_in,
        amount_out,
    })
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

    fn liq(v: Decimal) -> Liquidity {
        let Ok(l) = Liquidity::new(v) else {
            panic!("valid liquidity");
        };
        l
    }

    fn pool_liquidity() -> Liquidity {
        liq(dec!(1517818840.967415409395054436))
    }

    fn pool_sqrt() -> SqrtPrice {
        sqrt(dec!(70.710678118654752440084436210))
    }

    // -- exact-in -----------------------------------------------------------

    #[test]
    fn usdc_in_within_segment() {
        let Ok(step) = compute_swap_step(
            pool_sqrt(),
            sqrt_at(86_129),
            pool_liquidity(),
            dec!(42000000),
            false,
        ) else {
            panic!("expected Ok");
        };
        assert!(!step.reached(sqrt_at(86_129)));
        assert_eq!(step.amount_in, dec!(42000000));
        assert_eq!(step.amount_out.trunc(), dec!(8396));
        assert!(step.sqrt_price_next > pool_sqrt());
    }

    #[test]
    fn eth_in_within_segment() {
        let Ok(step) = compute_swap_step(
            pool_sqrt(),
            sqrt_at(84_222),
            pool_liquidity(),
            dec!(13370),
            true,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(step.amount_in, dec!(13370));
        assert!(step.sqrt_price_next < pool_sqrt());
        // Roughly 13370 * 4997 usdc.
        assert!(step.amount_out > dec!(66700000) && step.amount_out < dec!(66900000));
    }

    #[test]
    fn large_input_caps_at_target() {
        let target = sqrt_at(86_129);
        let Ok(step) = compute_swap_step(
            pool_sqrt(),
            target,
            pool_liquidity(),
            dec!(100000000000),
            false,
        ) else {
            panic!("expected Ok");
        };
        assert!(step.reached(target));
        assert!(step.amount_in < dec!(100000000000));
        let Ok(full) = amount1_delta(
            pool_liquidity().get(),
            pool_sqrt().get(),
            target.get(),
            Rounding::Up,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(step.amount_in, full);
    }

    #[test]
    fn target_equal_to_current_is_noop() {
        let Ok(step) = compute_swap_step(pool_sqrt(), pool_sqrt(), pool_liquidity(), dec!(5), true)
        else {
            panic!("expected Ok");
        };
        assert!(step.reached(pool_sqrt()));
        assert_eq!(step.amount_in, Decimal::ZERO);
        assert_eq!(step.amount_out, Decimal::ZERO);
    }

    #[test]
    fn zero_liquidity_is_rejected() {
        assert!(matches!(
            compute_swap_step(pool_sqrt(), sqrt_at(86_129), Liquidity::ZERO, dec!(1), false),
            Err(AmmError::NoLiquidity(_))
        ));
    }

    #[test]
    fn dust_input_does_not_cross_target() {
        let target = sqrt_at(85_177);
        let Ok(step) = compute_swap_step(
            pool_sqrt(),
            target,
            pool_liquidity(),
            dec!(0.000000000000000001),
            false,
        ) else {
            panic!("expected Ok");
        };
        assert!(step.sqrt_price_next <= target);
        assert!(step.sqrt_price_next >= pool_sqrt());
        assert_eq!(step.amount_out, Decimal::ZERO);
    }

    #[test]
    fn every_kind_takes_its_rounding_from_the_table() {
        let kinds = [
            SwapKind::new(SwapMode::ExactIn, SwapDirection::ZeroForOne),
            SwapKind::new(SwapMode::ExactIn, SwapDirection::OneForZero),
            SwapKind::new(SwapMode::ExactOut, SwapDirection::ZeroForOne),
            SwapKind::new(SwapMode::ExactOut, SwapDirection::OneForZero),
        ];
        let l = pool_liquidity();
        let cur = pool_sqrt();
        for kind in kinds {
            let zero_for_one = kind.direction().is_zero_for_one();
            let target = if zero_for_one { sqrt_at(84_222) } else { sqrt_at(86_129) };
            let Ok(step) = step_for(kind, cur, target, l, dec!(1234.5)) else {
                panic!("step for {kind}");
            };
            assert!(!step.reached(target), "{kind} should stop inside the segment");

            let (input_delta, output_delta) = if zero_for_one {
                (amount0_delta as Delta, amount1_delta as Delta)
            } else {
                (amount1_delta as Delta, amount0_delta as Delta)
            };
            let next = step.sqrt_price_next.get();
            let (Ok(in_up), Ok(out_down)) = (
                input_delta(l.get(), cur.get(), next, Rounding::Up),
                output_delta(l.get(), cur.get(), next, Rounding::Down),
            ) else {
                panic!("deltas for {kind}");
            };
            if kind.is_exact_in() {
                assert_eq!(step.amount_in, dec!(1234.5));
                assert_eq!(step.amount_out, out_down, "{kind} output rounds down");
            } else {
                assert_eq!(step.amount_out, dec!(1234.5));
                assert_eq!(step.amount_in, in_up, "{kind} input rounds up");
            }
        }
    }

    // -- exact-out ----------------------------------------------------------

    #[test]
    fn eth_out_costs_about_what_it_would_buy() {
        let Ok(step) = compute_swap_step_exact_out(
            pool_sqrt(),
            sqrt_at(86_129),
            pool_liquidity(),
            dec!(8396),
            false,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(step.amount_out, dec!(8396));
        // 8396 eth costs a little less than the 42M usdc that yields 8396.71.
        assert!(step.amount_in < dec!(42000000));
        assert!(step.amount_in > dec!(41990000));
    }

    #[test]
    fn exact_out_mirrors_exact_in() {
        let target = sqrt_at(84_222);
        let Ok(fwd) = compute_swap_step(pool_sqrt(), target, pool_liquidity(), dec!(13370), true)
        else {
            panic!("expected Ok");
        };
        let Ok(back) = compute_swap_step_exact_out(
            pool_sqrt(),
            target,
            pool_liquidity(),
            fwd.amount_out,
            true,
        ) else {
            panic!("expected Ok");
        };
        assert!((back.amount_in - dec!(13370)).abs() < dec!(0.000001));
    }

    #[test]
    fn exact_out_beyond_segment_caps_at_target() {
        let target = sqrt_at(84_222);
        let Ok(step) = compute_swap_step_exact_out(
            pool_sqrt(),
            target,
            pool_liquidity(),
            dec!(100000000000),
            true,
        ) else {
            panic!("expected Ok");
        };
        assert!(step.reached(target));
        assert!(step.amount_out < dec!(100000000000));
    }
}
