//! Validated binding host identifier.

use super::TrunkDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host name of the compute or network node a port is bound to.
///
/// Host names are opaque to the resolver; they are only compared for
/// equality against agent records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BindingHost(String);

impl BindingHost {
    /// Creates a validated binding host.
    ///
    /// The input is trimmed. Case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TrunkDomainError::EmptyHost`] when the value is empty after
    /// trimming, or [`TrunkDomainError::InvalidHost`] when it contains
    /// whitespace or control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TrunkDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TrunkDomainError::EmptyHost);
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(TrunkDomainError::InvalidHost(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the host name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BindingHost {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BindingHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BindingHost {
    type Error = TrunkDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BindingHost> for String {
    fn from(value: BindingHost) -> Self {
        value.0
    }
}
