//! Explicit rounding direction for decimal and integer conversions.

use rust_decimal::RoundingStrategy;

/// Rounding direction applied when a decimal quantity is truncated to a
/// fixed number of fractional digits or converted to an integer amount.
///
/// Swap math always rounds against the trader: amounts the trader pays
/// round [`Up`](Self::Up), amounts the trader receives round
/// [`Down`](Self::Down).
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert_eq!(Rounding::Up.opposite(), Rounding::Down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor for non-negative values).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Returns the other direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Maps the direction onto the `rust_decimal` strategy used by
    /// [`Decimal::round_dp_with_strategy`](rust_decimal::Decimal::round_dp_with_strategy).
    #[must_use]
    pub const fn strategy(&self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::ToPositiveInfinity,
            Self::Down => RoundingStrategy::ToZero,
        }
    }
}
