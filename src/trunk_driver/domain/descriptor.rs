//! Trunk driver capability descriptors.

use super::{AgentType, InterfaceKind, TrunkDomainError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum length for a driver name.
const MAX_NAME_LENGTH: usize = 64;

/// Validated driver alias such as `openvswitch`, `ovn` or `sriov-nic`.
///
/// Aliases start with a lowercase letter, end with a letter or digit, and
/// may use `-` and `_` as separators in between.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DriverName(String);

impl DriverName {
    /// Creates a validated driver name.
    ///
    /// The input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`TrunkDomainError::EmptyDriverName`] when the value is empty
    /// after trimming, [`TrunkDomainError::InvalidDriverName`] when it is not
    /// a well-formed alias, or
    /// [`TrunkDomainError::DriverNameTooLong`] when it exceeds 64 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TrunkDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(TrunkDomainError::EmptyDriverName);
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(TrunkDomainError::DriverNameTooLong(raw));
        }

        let is_valid = normalized.starts_with(|c: char| c.is_ascii_lowercase())
            && normalized.ends_with(|c: char| c.is_ascii_alphanumeric())
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !is_valid {
            return Err(TrunkDomainError::InvalidDriverName(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the driver name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DriverName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DriverName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DriverName {
    type Error = TrunkDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DriverName> for String {
    fn from(value: DriverName) -> Self {
        value.0
    }
}

/// Capability descriptor of a configured trunk driver.
///
/// Descriptors are immutable once built. A driver without an agent type is
/// agentless and therefore host-independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverDescriptor {
    name: DriverName,
    interfaces: BTreeSet<InterfaceKind>,
    agent_type: Option<AgentType>,
}

impl DriverDescriptor {
    /// Creates a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`TrunkDomainError::NoSupportedInterfaces`] when `interfaces`
    /// is empty.
    pub fn new(
        name: DriverName,
        interfaces: impl IntoIterator<Item = InterfaceKind>,
        agent_type: Option<AgentType>,
    ) -> Result<Self, TrunkDomainError> {
        let supported: BTreeSet<InterfaceKind> = interfaces.into_iter().collect();
        if supported.is_empty() {
            return Err(TrunkDomainError::NoSupportedInterfaces(
                name.as_str().to_owned(),
            ));
        }
        Ok(Self {
            name,
            interfaces: supported,
            agent_type,
        })
    }

    /// Open vSwitch trunk driver: `ovs` and `vhostuser`, served by the
    /// Open vSwitch agent.
    #[must_use]
    pub fn openvswitch() -> Self {
        Self::preset(
            "openvswitch",
            [InterfaceKind::Ovs, InterfaceKind::VhostUser],
            Some(AgentType::open_vswitch()),
        )
    }

    /// Linux bridge trunk driver: `bridge`, served by the Linux bridge agent.
    #[must_use]
    pub fn linuxbridge() -> Self {
        Self::preset(
            "linuxbridge",
            [InterfaceKind::Bridge],
            Some(AgentType::linux_bridge()),
        )
    }

    /// OVN trunk driver: `ovs` and `vhostuser`, agentless.
    #[must_use]
    pub fn ovn() -> Self {
        Self::preset("ovn", [InterfaceKind::Ovs, InterfaceKind::VhostUser], None)
    }

    fn preset<const N: usize>(
        name: &str,
        interfaces: [InterfaceKind; N],
        agent_type: Option<AgentType>,
    ) -> Self {
        Self {
            name: DriverName(name.to_owned()),
            interfaces: interfaces.into_iter().collect(),
            agent_type,
        }
    }

    /// Returns the driver name.
    #[must_use]
    pub const fn name(&self) -> &DriverName {
        &self.name
    }

    /// Returns the supported interface kinds.
    #[must_use]
    pub const fn interfaces(&self) -> &BTreeSet<InterfaceKind> {
        &self.interfaces
    }

    /// Returns whether the driver supports the given interface kind.
    #[must_use]
    pub fn supports(&self, interface: &InterfaceKind) -> bool {
        self.interfaces.contains(interface)
    }

    /// Returns the agent type, or `None` for an agentless driver.
    #[must_use]
    pub const fn agent_type(&self) -> Option<&AgentType> {
        self.agent_type.as_ref()
    }
}
