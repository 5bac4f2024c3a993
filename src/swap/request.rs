//! Swap requests accepted by the applier.

use crate::domain::{AccountId, Amount, Coin, Denom, FeeRate, PoolId};

/// Sell exactly `token_in`, receiving at least `token_out_min` of
/// `token_out_denom`.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{AccountId, Amount, Coin, Denom, FeeRate, PoolId};
/// use hydra_clmm::swap::ExactInRequest;
///
/// let req = ExactInRequest::new(
///     AccountId::new("trader").expect("ok"),
///     PoolId::new(1),
///     Coin::new(Denom::new("usdc").expect("ok"), Amount::new(42_000_000)),
///     Denom::new("eth").expect("ok"),
///     Amount::new(8_000),
///     FeeRate::ZERO,
/// );
/// assert_eq!(req.token_out_min(), Amount::new(8_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactInRequest {
    sender: AccountId,
    pool_id: PoolId,
    token_in: Coin,
    token_out_denom: Denom,
    token_out_min: Amount,
    fee: FeeRate,
}

impl ExactInRequest {
    /// Creates an exact-in request.
    #[must_use]
    pub const fn new(
        sender: AccountId,
        pool_id: PoolId,
        token_in: Coin,
        token_out_denom: Denom,
        token_out_min: Amount,
        fee: FeeRate,
    ) -> Self {
        Self {
            sender,
            pool_id,
            token_in,
            token_out_denom,
            token_out_min,
            fee,
        }
    }

    /// Trader account.
    #[must_use]
    pub const fn sender(&self) -> &AccountId {
        &self.sender
    }

    /// Target pool.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Coin sold.
    #[must_use]
    pub const fn token_in(&self) -> &Coin {
        &self.token_in
    }

    /// Denomination bought.
    #[must_use]
    pub const fn token_out_denom(&self) -> &Denom {
        &self.token_out_denom
    }

    /// Minimum acceptable output.
    #[must_use]
    pub const fn token_out_min(&self) -> Amount {
        self.token_out_min
    }

    /// Swap fee charged on the input.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}

/// Buy exactly `token_out`, paying at most `token_in_max` of
/// `token_in_denom`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactOutRequest {
    sender: AccountId,
    pool_id: PoolId,
    token_in_denom: Denom,
    token_in_max: Amount,
    token_out: Coin,
    fee: FeeRate,
}

impl ExactOutRequest {
    /// Creates an exact-out request.
    #[must_use]
    pub const fn new(
        sender: AccountId,
        pool_id: PoolId,
        token_in_denom: Denom,
        token_in_max: Amount,
        token_out: Coin,
        fee: FeeRate,
    ) -> Self {
        Self {
            sender,
            pool_id,
            token_in_denom,
            token_in_max,
            token_out,
            fee,
        }
    }

    /// Trader account.
    #[must_use]
    pub const fn sender(&self) -> &AccountId {
        &self.sender
    }

    /// Target pool.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Denomination paid.
    #[must_use]
    pub const fn token_in_denom(&self) -> &Denom {
        &self.token_in_denom
    }

    /// Maximum acceptable input.
    #[must_use]
    pub const fn token_in_max(&self) -> Amount {
        self.token_in_max
    }

    /// Coin bought.
    #[must_use]
    pub const fn token_out(&self) -> &Coin {
        &self.token_out
    }

    /// Swap fee charged on the input.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}
