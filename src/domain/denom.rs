//! Asset denomination identifier.

use core::fmt;

use crate::error::AmmError;

const MIN_DENOM_LEN: usize = 2;
const MAX_DENOM_LEN: usize = 128;

/// Name of an asset held by a pool (`"eth"`, `"uosmo"`, `"ibc/27394F..."`).
///
/// Validation follows the usual bank-module shape: starts with an ASCII
/// letter, continues with ASCII alphanumerics or one of `/ . _ -`, and is
/// between 2 and 128 bytes long. Ordering is plain byte-wise string
/// ordering, which is what makes pool denom ordering canonical.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::Denom;
///
/// let eth = Denom::new("eth").expect("valid denom");
/// assert_eq!(eth.as_str(), "eth");
/// assert!(Denom::new("1eth").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Denom(String);

impl Denom {
    /// Creates a validated denomination.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] if the string is too short,
    /// too long, does not start with a letter, or contains a character
    /// outside the allowed set.
    pub fn new(value: impl Into<String>) -> crate::error::Result<Self> {
        let value = value.into();
        if value.len() < MIN_DENOM_LEN || value.len() > MAX_DENOM_LEN {
            return Err(AmmError::InvalidArgument(
                "denom length must be between 2 and 128",
            ));
        }
        let mut chars = value.chars();
        if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(AmmError::InvalidArgument("denom must start with a letter"));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-')) {
            return Err(AmmError::InvalidArgument(
                "denom contains an unsupported character",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the denomination as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Denom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
