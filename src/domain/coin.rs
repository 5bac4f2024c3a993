//! A denomination paired with an amount.

use core::fmt;

use super::{Amount, Denom};

/// An amount of one denomination, as moved by a swap or a transfer.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{Amount, Coin, Denom};
///
/// let coin = Coin::new(Denom::new("usdc").expect("valid"), Amount::new(42_000_000));
/// assert_eq!(coin.to_string(), "42000000usdc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coin {
    denom: Denom,
    amount: Amount,
}

impl Coin {
    /// Creates a coin.
    pub const fn new(denom: Denom, amount: Amount) -> Self {
        Self { denom, amount }
    }

    /// Returns the denomination.
    #[must_use]
    pub const fn denom(&self) -> &Denom {
        &self.denom
    }

    /// Returns the amount.
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn denom(s: &str) -> Denom {
        let Ok(d) = Denom::new(s) else {
            panic!("valid denom {s}");
        };
        d
    }

    #[test]
    fn accessors() {
        let c = Coin::new(denom("eth"), Amount::new(13_370));
        assert_eq!(c.denom().as_str(), "eth");
        assert_eq!(c.amount(), Amount::new(13_370));
        assert!(!c.is_zero());
    }

    #[test]
    fn zero_coin() {
        assert!(Coin::new(denom("eth"), Amount::ZERO).is_zero());
    }

    #[test]
    fn display_amount_then_denom() {
        assert_eq!(Coin::new(denom("uosmo"), Amount::new(5)).to_string(), "5uosmo");
    }
}
