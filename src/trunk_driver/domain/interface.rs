//! Virtual interface kind of a port binding.

use super::TrunkDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Virtual interface (VIF) type a port is bound with.
///
/// The well-known kinds get their own variants; anything else a mechanism
/// driver reports is kept verbatim (lowercased) in [`InterfaceKind::Other`].
/// [`InterfaceKind::new`] is the only way to obtain an `Other` value, so a
/// well-known kind is never represented as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InterfaceKind {
    /// Open vSwitch port (`ovs`).
    Ovs,
    /// vhost-user socket (`vhostuser`).
    VhostUser,
    /// Linux bridge port (`bridge`).
    Bridge,
    /// Plain tap device (`tap`).
    Tap,
    /// Any other VIF type.
    Other(OtherInterfaceKind),
}

impl InterfaceKind {
    /// Parses an interface kind.
    ///
    /// The input is trimmed and lowercased before matching.
    ///
    /// # Errors
    ///
    /// Returns [`TrunkDomainError::EmptyInterfaceKind`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TrunkDomainError> {
        let normalized = value.into().trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(TrunkDomainError::EmptyInterfaceKind),
            "ovs" => Ok(Self::Ovs),
            "vhostuser" => Ok(Self::VhostUser),
            "bridge" => Ok(Self::Bridge),
            "tap" => Ok(Self::Tap),
            _ => Ok(Self::Other(OtherInterfaceKind(normalized))),
        }
    }

    /// Returns the canonical VIF type string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ovs => "ovs",
            Self::VhostUser => "vhostuser",
            Self::Bridge => "bridge",
            Self::Tap => "tap",
            Self::Other(other) => other.as_str(),
        }
    }
}

/// VIF type outside the well-known set.
///
/// Holds a lowercased, non-empty name that matches none of the dedicated
/// [`InterfaceKind`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OtherInterfaceKind(String);

impl OtherInterfaceKind {
    /// Returns the VIF type name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for InterfaceKind {
    type Error = TrunkDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InterfaceKind> for String {
    fn from(value: InterfaceKind) -> Self {
        match value {
            InterfaceKind::Other(OtherInterfaceKind(raw)) => raw,
            known => known.as_str().to_owned(),
        }
    }
}
