//! Discrete price point on the concentrated liquidity curve.

use core::fmt;

use crate::error::AmmError;

/// Minimum valid tick index. `1.0001^-276324` is just above `1e-12`.
pub(crate) const MIN_TICK: i32 = -276_324;

/// Maximum valid tick index. `1.0001^276324` is just below `1e12`.
pub(crate) const MAX_TICK: i32 = 276_324;

/// A discrete price point: `price = 1.0001^tick`.
///
/// The range `[-276324, 276324]` keeps every tick price inside
/// `[1e-12, 1e12]`, so each √price lies within the protocol's
/// `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]` and all swap math stays inside the
/// 28-digit decimal range.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::Tick;
///
/// let tick = Tick::new(85_176).expect("in range");
/// assert_eq!(tick.get(), 85_176);
/// assert!(Tick::new(300_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-276324`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`276324`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Tick where `price = 1`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTick`] if `value` is outside
    /// `[-276324, 276324]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(AmmError::InvalidTick("tick out of range [-276324, 276324]"));
        }
        Ok(Self(value))
    }

    /// Creates a tick from a wide integer, as produced by logarithm
    /// estimates in the codec.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TickOutOfBounds`] if `value` is outside the
    /// valid range.
    pub fn from_i64(value: i64) -> crate::error::Result<Self> {
        match i32::try_from(value) {
            Ok(v) if (MIN_TICK..=MAX_TICK).contains(&v) => Ok(Self(v)),
            _ => Err(AmmError::TickOutOfBounds(value)),
        }
    }

    /// Returns the underlying tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Checked addition of a delta. `None` if the result leaves the range.
    #[must_use]
    pub const fn checked_add(&self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Checked subtraction of a delta. `None` if the result leaves the range.
    #[must_use]
    pub const fn checked_sub(&self, delta: i32) -> Option<Self> {
        match self.0.checked_sub(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Tick immediately below, saturating at [`Tick::MIN`].
    ///
    /// Crossing the minimum tick downward leaves the working tick at the
    /// minimum; there is no liquidity below it by construction.
    #[must_use]
    pub const fn saturating_pred(&self) -> Self {
        if self.0 > MIN_TICK {
            Self(self.0 - 1)
        } else {
            *self
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
