//! Account identifiers for settlement.

use core::fmt;

use super::PoolId;
use crate::error::AmmError;

/// Opaque address of a balance holder: a trader or a pool's escrow.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{AccountId, PoolId};
///
/// let trader = AccountId::new("osmo1trader").expect("non-empty");
/// let escrow = AccountId::for_pool(PoolId::new(1));
/// assert_ne!(trader, escrow);
/// assert_eq!(escrow.as_str(), "pool/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account id from a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] if `value` is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> crate::error::Result<Self> {
        let value = value.into();
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(AmmError::InvalidArgument(
                "account id must be non-empty without whitespace",
            ));
        }
        Ok(Self(value))
    }

    /// Escrow account holding a pool's reserves.
    #[must_use]
    pub fn for_pool(pool_id: PoolId) -> Self {
        Self(format!("pool/{}", pool_id.get()))
    }

    /// Returns the address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(AccountId::new("").is_err());
        assert!(AccountId::new("osmo 1").is_err());
        assert!(AccountId::new("osmo1abc").is_ok());
    }

    #[test]
    fn pool_escrow_is_deterministic() {
        assert_eq!(
            AccountId::for_pool(PoolId::new(9)),
            AccountId::for_pool(PoolId::new(9))
        );
        assert_eq!(AccountId::for_pool(PoolId::new(9)).to_string(), "pool/9");
    }
}
