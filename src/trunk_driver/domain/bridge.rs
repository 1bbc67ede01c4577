//! Trunk identifiers and trunk bridge device names.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix of every trunk bridge device name.
pub const TRUNK_BRIDGE_PREFIX: &str = "tbr-";

/// Maximum length of a Linux network device name, including the trailing
/// NUL byte.
pub const DEVICE_NAME_MAX_LEN: usize = 15;

/// Unique identifier for a trunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrunkId(Uuid);

impl TrunkId {
    /// Creates a new random trunk identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a trunk identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TrunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the bridge device backing a trunk.
///
/// Always at most `DEVICE_NAME_MAX_LEN - 1` characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrunkBridgeName(String);

impl TrunkBridgeName {
    /// Derives the bridge name for a trunk.
    #[must_use]
    pub fn for_trunk(trunk_id: TrunkId) -> Self {
        Self::from_raw_id(&trunk_id.to_string())
    }

    /// Derives the bridge name from an opaque trunk identifier string.
    #[must_use]
    pub fn from_raw_id(trunk_id: &str) -> Self {
        let name = TRUNK_BRIDGE_PREFIX
            .chars()
            .chain(trunk_id.chars())
            .take(DEVICE_NAME_MAX_LEN - 1)
            .collect();
        Self(name)
    }

    /// Returns the bridge name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TrunkBridgeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TrunkBridgeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
