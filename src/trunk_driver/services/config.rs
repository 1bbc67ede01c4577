//! Deployment configuration for the driver catalog.

use super::{DriverCatalogError, DriverCatalogResult};
use crate::trunk_driver::domain::{
    AgentType, DriverDescriptor, DriverName, InterfaceKind, TrunkDomainError,
};
use camino::Utf8Path;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};

/// Configured trunk drivers, in evaluation order.
///
/// # Examples
///
/// ```
/// use trunkbind::trunk_driver::services::DriverCatalogConfig;
///
/// let config = DriverCatalogConfig::from_json(
///     r#"{"drivers": [{"name": "ovn", "interfaces": ["ovs"]}]}"#,
/// )
/// .expect("valid configuration");
/// assert_eq!(config.drivers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverCatalogConfig {
    /// Driver entries.
    #[serde(default)]
    pub drivers: Vec<DriverConfig>,
}

/// A single configured driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Unique driver name.
    pub name: String,
    /// Supported VIF types.
    pub interfaces: Vec<String>,
    /// Companion agent type; absent or empty for agentless drivers.
    #[serde(default)]
    pub agent_type: Option<String>,
}

impl DriverCatalogConfig {
    /// Configuration with the Open vSwitch, Linux bridge and OVN drivers.
    #[must_use]
    pub fn builtin() -> Self {
        let drivers = [
            DriverDescriptor::openvswitch(),
            DriverDescriptor::linuxbridge(),
            DriverDescriptor::ovn(),
        ]
        .iter()
        .map(DriverConfig::from_descriptor)
        .collect();
        Self { drivers }
    }

    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DriverCatalogError::InvalidConfig`] when the text is not a
    /// valid configuration document.
    pub fn from_json(text: &str) -> DriverCatalogResult<Self> {
        serde_json::from_str(text).map_err(DriverCatalogError::invalid_config)
    }

    /// Reads and parses a JSON configuration file below `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverCatalogError::Io`] when the file cannot be read, or
    /// [`DriverCatalogError::InvalidConfig`] when it cannot be parsed.
    pub fn load(dir: &Dir, path: impl AsRef<Utf8Path>) -> DriverCatalogResult<Self> {
        let text = dir.read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl DriverConfig {
    /// Captures an existing descriptor as configuration.
    #[must_use]
    pub fn from_descriptor(descriptor: &DriverDescriptor) -> Self {
        Self {
            name: descriptor.name().as_str().to_owned(),
            interfaces: descriptor
                .interfaces()
                .iter()
                .map(|kind| kind.as_str().to_owned())
                .collect(),
            agent_type: descriptor
                .agent_type()
                .map(|agent| agent.as_str().to_owned()),
        }
    }

    /// Validates the entry into a driver descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`TrunkDomainError`] when the name or an interface kind is
    /// invalid, or when no interface kind is declared.
    pub fn into_descriptor(self) -> Result<DriverDescriptor, TrunkDomainError> {
        let name = DriverName::new(self.name)?;
        let interfaces = self
            .interfaces
            .into_iter()
            .map(InterfaceKind::new)
            .collect::<Result<Vec<_>, _>>()?;
        let agent_type = AgentType::optional(self.agent_type.as_deref());
        DriverDescriptor::new(name, interfaces, agent_type)
    }
}
