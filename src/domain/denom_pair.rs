//! Canonically ordered pair of pool denominations.

use super::{Denom, SwapDirection};
use crate::error::AmmError;

/// Orders two denominations the way a pool stores them: `token0 < token1`
/// by byte-wise string comparison.
///
/// # Errors
///
/// Returns [`AmmError::InvalidArgument`] if both denominations are equal.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{order_initial_pool_denoms, Denom};
///
/// let usdc = Denom::new("usdc").expect("valid");
/// let eth = Denom::new("eth").expect("valid");
/// let (t0, t1) = order_initial_pool_denoms(usdc, eth).expect("distinct");
/// assert_eq!((t0.as_str(), t1.as_str()), ("eth", "usdc"));
/// ```
pub fn order_initial_pool_denoms(
    denom_a: Denom,
    denom_b: Denom,
) -> crate::error::Result<(Denom, Denom)> {
    match denom_a.cmp(&denom_b) {
        core::cmp::Ordering::Less => Ok((denom_a, denom_b)),
        core::cmp::Ordering::Greater => Ok((denom_b, denom_a)),
        core::cmp::Ordering::Equal => Err(AmmError::InvalidArgument(
            "pool requires two distinct denominations",
        )),
    }
}

/// The two assets of a pool, canonically ordered.
///
/// The ordering is fixed at construction and never changes, so
/// [`token0`](Self::token0) and [`token1`](Self::token1) are stable
/// identities for the lifetime of the pool. Price is always quoted as
/// token1 per token0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenomPair {
    token0: Denom,
    token1: Denom,
}

impl DenomPair {
    /// Creates a canonically ordered pair from two denominations in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] if the denominations are equal.
    pub fn new(denom_a: Denom, denom_b: Denom) -> crate::error::Result<Self> {
        let (token0, token1) = order_initial_pool_denoms(denom_a, denom_b)?;
        Ok(Self { token0, token1 })
    }

    /// Returns the lower-ordered denomination.
    #[must_use]
    pub const fn token0(&self) -> &Denom {
        &self.token0
    }

    /// Returns the higher-ordered denomination.
    #[must_use]
    pub const fn token1(&self) -> &Denom {
        &self.token1
    }

    /// Returns `true` if `denom` is one of the pair.
    #[must_use]
    pub fn contains(&self, denom: &Denom) -> bool {
        self.token0 == *denom || self.token1 == *denom
    }

    /// Returns the counterpart of `denom`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] if `denom` is not in the pair.
    pub fn other(&self, denom: &Denom) -> crate::error::Result<&Denom> {
        if *denom == self.token0 {
            Ok(&self.token1)
        } else if *denom == self.token1 {
            Ok(&self.token0)
        } else {
            Err(AmmError::InvalidArgument("denom is not part of this pool"))
        }
    }

    /// Resolves the swap direction for supplying `token_in` and receiving
    /// `token_out`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] if the two denominations are
    /// equal or either one is not part of the pair.
    pub fn direction(
        &self,
        token_in: &Denom,
        token_out: &Denom,
    ) -> crate::error::Result<SwapDirection> {
        if token_in == token_out {
            return Err(AmmError::InvalidArgument(
                "input and output denominations must differ",
            ));
        }
        if !self.contains(token_in) {
            return Err(AmmError::InvalidArgument(
                "input denomination is not part of this pool",
            ));
        }
        if !self.contains(token_out) {
            return Err(AmmError::InvalidArgument(
                "output denomination is not part of this pool",
            ));
        }
        Ok(if *token_in == self.token0 {
            SwapDirection::ZeroForOne
        } else {
            SwapDirection::OneForZero
        })
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

    fn eth_usdc() -> DenomPair {
        let Ok(pair) = DenomPair::new(denom("usdc"), denom("eth")) else {
            panic!("distinct denoms");
        };
        pair
    }

    // -- order_initial_pool_denoms ------------------------------------------

    #[test]
    fn already_sorted_is_kept() {
        let Ok((a, b)) = order_initial_pool_denoms(denom("axel"), denom("osmo")) else {
            panic!("expected Ok");
        };
        assert_eq!((a.as_str(), b.as_str()), ("axel", "osmo"));
    }

    #[test]
    fn reversed_is_sorted() {
        let Ok((a, b)) = order_initial_pool_denoms(denom("usdc"), denom("eth")) else {
            panic!("expected Ok");
        };
        assert_eq!((a.as_str(), b.as_str()), ("eth", "usdc"));
    }

    #[test]
    fn same_denom_rejected() {
        assert!(matches!(
            order_initial_pool_denoms(denom("osmo"), denom("osmo")),
            Err(AmmError::InvalidArgument(_))
        ));
    }

    // -- DenomPair ------------------------------------------------------------

    #[test]
    fn pair_is_canonical() {
        let pair = eth_usdc();
        assert_eq!(pair.token0().as_str(), "eth");
        assert_eq!(pair.token1().as_str(), "usdc");
    }

    #[test]
    fn contains_and_other() {
        let pair = eth_usdc();
        assert!(pair.contains(&denom("eth")));
        assert!(!pair.contains(&denom("atom")));
        let Ok(other) = pair.other(&denom("eth")) else {
            panic!("eth is in the pair");
        };
        assert_eq!(other.as_str(), "usdc");
        assert!(pair.other(&denom("atom")).is_err());
    }

    #[test]
    fn direction_from_input_denom() {
        let pair = eth_usdc();
        assert_eq!(
            pair.direction(&denom("eth"), &denom("usdc")),
            Ok(SwapDirection::ZeroForOne)
        );
        assert_eq!(
            pair.direction(&denom("usdc"), &denom("eth")),
            Ok(SwapDirection::OneForZero)
        );
    }

    #[test]
    fn direction_rejects_bad_denoms() {
        let pair = eth_usdc();
        assert!(pair.direction(&denom("eth"), &denom("eth")).is_err());
        assert!(pair.direction(&denom("atom"), &denom("eth")).is_err());
        assert!(pair.direction(&denom("eth"), &denom("atom")).is_err());
    }
}
