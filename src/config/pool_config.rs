//! Parameters for creating a concentrated liquidity pool.

use rust_decimal::Decimal;

use crate::domain::{Denom, PoolId};
use crate::error::AmmError;
use crate::math::{MAX_SPOT_PRICE, MIN_SPOT_PRICE};

/// Blueprint for a new pool, consumed by
/// [`PoolFactory::create`](crate::factory::PoolFactory::create).
///
/// The denominations may be given in any order; the factory stores them
/// canonically. `initial_price` is quoted as token1 per token0 *after*
/// ordering.
///
/// # Validation
///
/// - `denom_a` and `denom_b` must differ.
/// - `initial_price` must lie within `[MIN_SPOT_PRICE, MAX_SPOT_PRICE]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    pool_id: PoolId,
    denom_a: Denom,
    denom_b: Denom,
    initial_price: Decimal,
}

impl PoolConfig {
    /// Creates a validated pool configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the denominations are equal.
    /// - [`AmmError::InvalidPrice`] if the initial price is outside the
    ///   protocol bounds.
    pub fn new(
        pool_id: PoolId,
        denom_a: Denom,
        denom_b: Denom,
        initial_price: Decimal,
    ) -> Result<Self, AmmError> {
        let config = Self {
            pool_id,
            denom_a,
            denom_b,
            initial_price,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.denom_a == self.denom_b {
            return Err(AmmError::InvalidConfiguration(
                "pool denominations must differ",
            ));
        }
        if self.initial_price < MIN_SPOT_PRICE || self.initial_price > MAX_SPOT_PRICE {
            return Err(AmmError::InvalidPrice(
                "initial price must lie within the protocol price bounds",
            ));
        }
        Ok(())
    }

    /// Returns the pool id.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Returns the first denomination as given.
    #[must_use]
    pub const fn denom_a(&self) -> &Denom {
        &self.denom_a
    }

    /// Returns the second denomination as given.
    #[must_use]
    pub const fn denom_b(&self) -> &Denom {
        &self.denom_b
    }

    /// Returns the initial spot price.
    #[must_use]
    pub const fn initial_price(&self) -> Decimal {
        self.initial_price
    }
}
