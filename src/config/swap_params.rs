//! Tuning parameters for the swap traversal loop.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::AmmError;

/// Remaining amounts at or below this value are treated as fully swapped.
pub const SWAP_EPSILON: Decimal = dec!(0.0000001);

/// Upper bound on traversal iterations before a swap is abandoned.
pub const MAX_SWAP_ITERATIONS: u32 = 10_000;

/// Loop parameters shared by every swap a [`SwapEngine`] runs.
///
/// # Validation
///
/// - `epsilon` must be strictly positive.
/// - `max_iterations` must be greater than zero.
///
/// # Examples
///
/// ```
/// use hydra_clmm::config::{SwapParams, MAX_SWAP_ITERATIONS, SWAP_EPSILON};
///
/// let params = SwapParams::default();
/// assert_eq!(params.epsilon(), SWAP_EPSILON);
/// assert_eq!(params.max_iterations(), MAX_SWAP_ITERATIONS);
/// ```
///
/// [`SwapEngine`]: crate::swap::SwapEngine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapParams {
    epsilon: Decimal,
    max_iterations: u32,
}

impl SwapParams {
    /// Creates validated swap parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `epsilon` is not
    /// positive or `max_iterations` is zero.
    pub fn new(epsilon: Decimal, max_iterations: u32) -> Result<Self, AmmError> {
        let params = Self {
            epsilon,
            max_iterations,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates all parameter invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.epsilon <= Decimal::ZERO {
            return Err(AmmError::InvalidConfiguration(
                "swap epsilon must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(AmmError::InvalidConfiguration(
                "max iterations must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Returns the convergence threshold.
    #[must_use]
    pub const fn epsilon(&self) -> Decimal {
        self.epsilon
    }

    /// Returns the iteration cap.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for SwapParams {
    fn default() -> Self {
        Self {
            epsilon: SWAP_EPSILON,
            max_iterations: MAX_SWAP_ITERATIONS,
        }
    }
}
