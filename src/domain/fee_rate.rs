//! Swap fee expressed as a decimal fraction.

use core::fmt;

use rust_decimal::Decimal;

use crate::error::AmmError;

/// Basis-point denominator (10 000 = 100%).
const BPS_DENOMINATOR: u32 = 10_000;

/// Fraction of the input kept by the pool, in `[0, 1)`.
///
/// A rate of `1` would leave nothing to swap and make the exact-out
/// gross-up `amount / (1 - fee)` undefined, so it is rejected.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::FeeRate;
/// use rust_decimal_macros::dec;
///
/// let fee = FeeRate::from_basis_points(30).expect("0.30%");
/// assert_eq!(fee.get(), dec!(0.003));
/// assert_eq!(fee.complement(), dec!(0.997));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRate(Decimal);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `value` is negative or ≥ 1.
    pub fn new(value: Decimal) -> crate::error::Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmmError::InvalidFee("fee must not be negative"));
        }
        if value >= Decimal::ONE {
            return Err(AmmError::InvalidFee("fee must be strictly below 1"));
        }
        Ok(Self(value))
    }

    /// Creates a fee rate from basis points (`30` = 0.30%).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `bps` is 10 000 or more.
    pub fn from_basis_points(bps: u32) -> crate::error::Result<Self> {
        if bps >= BPS_DENOMINATOR {
            return Err(AmmError::InvalidFee("fee must be below 10000 basis points"));
        }
        Self::new(Decimal::from(bps) / Decimal::from(BPS_DENOMINATOR))
    }

    /// Returns the fee as a decimal fraction.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns `1 - fee`, the share of the input that actually trades.
    #[must_use]
    pub fn complement(&self) -> Decimal {
        Decimal::ONE - self.0
    }

    /// Returns `true` for a zero fee.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
