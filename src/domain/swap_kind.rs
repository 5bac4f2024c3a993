//! Swap mode, direction and the per-kind traversal rules.
//!
//! Every rule that differs between the four swap shapes lives in one
//! table keyed by [`SwapKind`], so the traversal itself is written once.
//!
//! | Kind | specified amount | √P moves | next √P rounds | crossing delta | tick after cross | zero liquidity after cross |
//! |------|------------------|----------|----------------|----------------|------------------|----------------------------|
//! | ExactIn / ZeroForOne  | input  | down | up   | `-net` | `tick - 1` | allowed |
//! | ExactIn / OneForZero  | input  | up   | down | `+net` | `tick`     | allowed |
//! | ExactOut / ZeroForOne | output | down | down | `-net` | `tick - 1` | [`NoLiquidity`](crate::error::AmmError::NoLiquidity) |
//! | ExactOut / OneForZero | output | up   | up   | `+net` | `tick`     | [`NoLiquidity`](crate::error::AmmError::NoLiquidity) |
//!
//! Amounts the trader pays always round up and amounts the trader
//! receives always round down. The next √price rounds toward the current
//! price when the input is fixed (less output) and away from it when the
//! output is fixed (more input).

use core::fmt;

use rust_decimal::Decimal;

use super::{Rounding, Tick};

/// Which side of the trade is fixed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SwapMode {
    /// The input amount is fixed; output is computed.
    ExactIn = 0,
    /// The output amount is fixed; input is computed.
    ExactOut = 1,
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn => write!(f, "ExactIn"),
            Self::ExactOut => write!(f, "ExactOut"),
        }
    }
}

/// Which asset the trader supplies.
///
/// Direction is always keyed by the *input* denomination, for both
/// modes: supplying token0 pushes the price (token1 per token0) down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// token0 in, token1 out; √price decreases.
    ZeroForOne,
    /// token1 in, token0 out; √price increases.
    OneForZero,
}

impl SwapDirection {
    /// Returns `true` for [`SwapDirection::ZeroForOne`].
    #[must_use]
    pub const fn is_zero_for_one(&self) -> bool {
        matches!(self, Self::ZeroForOne)
    }

    /// Returns `true` if `candidate` lies beyond `limit` in the direction of
    /// travel (below it when moving down, above it when moving up).
    #[must_use]
    pub fn overshoots(&self, candidate: Decimal, limit: Decimal) -> bool {
        match self {
            Self::ZeroForOne => candidate < limit,
            Self::OneForZero => candidate > limit,
        }
    }

    /// Returns `true` if `limit` is reachable from `current` by moving in
    /// this direction (or equals it).
    #[must_use]
    pub fn admits_limit(&self, current: Decimal, limit: Decimal) -> bool {
        match self {
            Self::ZeroForOne => limit <= current,
            Self::OneForZero => limit >= current,
        }
    }

    /// Liquidity change when crossing a tick whose recorded net delta is
    /// `net`. Net deltas are recorded for upward crossings, so a downward
    /// crossing applies the negation.
    #[must_use]
    pub fn crossing_delta(&self, net: Decimal) -> Decimal {
        match self {
            Self::ZeroForOne => -net,
            Self::OneForZero => net,
        }
    }

    /// Working tick after fully crossing `crossed`.
    ///
    /// Moving down past a boundary lands in the range below it; moving up
    /// lands in the range that starts at it.
    #[must_use]
    pub const fn tick_after_cross(&self, crossed: Tick) -> Tick {
        match self {
            Self::ZeroForOne => crossed.saturating_pred(),
            Self::OneForZero => crossed,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForOne => write!(f, "ZeroForOne"),
            Self::OneForZero => write!(f, "OneForZero"),
        }
    }
}

/// A swap shape: mode × direction. Key of the traversal rule table.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{SwapDirection, SwapKind, SwapMode};
///
/// let kind = SwapKind::new(SwapMode::ExactOut, SwapDirection::OneForZero);
/// assert!(kind.rejects_depleted_liquidity());
/// assert!(!SwapKind::new(SwapMode::ExactIn, SwapDirection::OneForZero).rejects_depleted_liquidity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapKind {
    mode: SwapMode,
    direction: SwapDirection,
}

impl SwapKind {
    /// Exact-in, token0 supplied.
    pub const EXACT_IN_ZERO_FOR_ONE: Self = Self::new(SwapMode::ExactIn, SwapDirection::ZeroForOne);
    /// Exact-in, token1 supplied.
    pub const EXACT_IN_ONE_FOR_ZERO: Self = Self::new(SwapMode::ExactIn, SwapDirection::OneForZero);
    /// Exact-out, token0 supplied.
    pub const EXACT_OUT_ZERO_FOR_ONE: Self =
        Self::new(SwapMode::ExactOut, SwapDirection::ZeroForOne);
    /// Exact-out, token1 supplied.
    pub const EXACT_OUT_ONE_FOR_ZERO: Self =
        Self::new(SwapMode::ExactOut, SwapDirection::OneForZero);

    /// Creates a swap kind.
    #[must_use]
    pub const fn new(mode: SwapMode, direction: SwapDirection) -> Self {
        Self { mode, direction }
    }

    /// Returns the mode.
    #[must_use]
    pub const fn mode(&self) -> SwapMode {
        self.mode
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns `true` if the caller fixes the input amount.
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self.mode, SwapMode::ExactIn)
    }

    /// Rounding applied to the amount being tracked against the caller's
    /// specified amount (input for exact-in, output for exact-out).
    #[must_use]
    pub const fn specified_rounding(&self) -> Rounding {
        match self.mode {
            SwapMode::ExactIn => Rounding::Up,
            SwapMode::ExactOut => Rounding::Down,
        }
    }

    /// Rounding applied to the amount being accumulated (output for
    /// exact-in, input for exact-out).
    #[must_use]
    pub const fn calculated_rounding(&self) -> Rounding {
        self.specified_rounding().opposite()
    }

    /// Rounding for a next √price computed from the remaining amount.
    #[must_use]
    pub const fn sqrt_price_rounding(&self) -> Rounding {
        match (self.mode, self.direction) {
            (SwapMode::ExactIn, SwapDirection::ZeroForOne)
            | (SwapMode::ExactOut, SwapDirection::OneForZero) => Rounding::Up,
            (SwapMode::ExactIn, SwapDirection::OneForZero)
            | (SwapMode::ExactOut, SwapDirection::ZeroForOne) => Rounding::Down,
        }
    }

    /// Exact-out traversal cannot continue through a range with no
    /// liquidity; exact-in simply jumps across it.
    #[must_use]
    pub const fn rejects_depleted_liquidity(&self) -> bool {
        matches!(self.mode, SwapMode::ExactOut)
    }
}

impl fmt::Display for SwapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.mode, self.direction)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tick(v: i32) -> Tick {
        let Ok(t) = Tick::new(v) else {
            panic!("valid tick {v}");
        };
        t
    }

    // -- Direction ----------------------------------------------------------

    #[test]
    fn overshoot_polarity() {
        assert!(SwapDirection::ZeroForOne.overshoots(dec!(69), dec!(70)));
        assert!(!SwapDirection::ZeroForOne.overshoots(dec!(71), dec!(70)));
        assert!(SwapDirection::OneForZero.overshoots(dec!(71), dec!(70)));
        assert!(!SwapDirection::OneForZero.overshoots(dec!(70), dec!(70)));
    }

    #[test]
    fn limit_admission() {
        assert!(SwapDirection::ZeroForOne.admits_limit(dec!(70), dec!(69)));
        assert!(SwapDirection::ZeroForOne.admits_limit(dec!(70), dec!(70)));
        assert!(!SwapDirection::ZeroForOne.admits_limit(dec!(70), dec!(71)));
        assert!(SwapDirection::OneForZero.admits_limit(dec!(70), dec!(71)));
        assert!(!SwapDirection::OneForZero.admits_limit(dec!(70), dec!(69)));
    }

    #[test]
    fn crossing_delta_sign() {
        assert_eq!(SwapDirection::ZeroForOne.crossing_delta(dec!(10)), dec!(-10));
        assert_eq!(SwapDirection::OneForZero.crossing_delta(dec!(10)), dec!(10));
        assert_eq!(SwapDirection::ZeroForOne.crossing_delta(dec!(-3)), dec!(3));
    }

    #[test]
    fn tick_after_cross() {
        assert_eq!(SwapDirection::ZeroForOne.tick_after_cross(tick(84_222)), tick(84_221));
        assert_eq!(SwapDirection::OneForZero.tick_after_cross(tick(86_129)), tick(86_129));
    }

    // -- Kind table ---------------------------------------------------------

    #[test]
    fn amounts_round_against_trader() {
        let exact_in = SwapKind::EXACT_IN_ZERO_FOR_ONE;
        assert_eq!(exact_in.specified_rounding(), Rounding::Up);
        assert_eq!(exact_in.calculated_rounding(), Rounding::Down);
        let exact_out = SwapKind::EXACT_OUT_ONE_FOR_ZERO;
        assert_eq!(exact_out.specified_rounding(), Rounding::Down);
        assert_eq!(exact_out.calculated_rounding(), Rounding::Up);
    }

    #[test]
    fn sqrt_price_rounding_favors_pool() {
        assert_eq!(SwapKind::EXACT_IN_ZERO_FOR_ONE.sqrt_price_rounding(), Rounding::Up);
        assert_eq!(SwapKind::EXACT_IN_ONE_FOR_ZERO.sqrt_price_rounding(), Rounding::Down);
        assert_eq!(SwapKind::EXACT_OUT_ZERO_FOR_ONE.sqrt_price_rounding(), Rounding::Down);
        assert_eq!(SwapKind::EXACT_OUT_ONE_FOR_ZERO.sqrt_price_rounding(), Rounding::Up);
    }

    #[test]
    fn depleted_liquidity_rule() {
        assert!(!SwapKind::EXACT_IN_ZERO_FOR_ONE.rejects_depleted_liquidity());
        assert!(SwapKind::EXACT_OUT_ZERO_FOR_ONE.rejects_depleted_liquidity());
    }

    #[test]
    fn display() {
        assert_eq!(SwapKind::EXACT_IN_ONE_FOR_ZERO.to_string(), "ExactIn/OneForZero");
        assert_eq!(SwapMode::ExactOut.to_string(), "ExactOut");
    }
}
