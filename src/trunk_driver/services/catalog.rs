//! Registry of the trunk drivers configured for a deployment.

use super::DriverCatalogConfig;
use crate::trunk_driver::{
    domain::{DriverName, TrunkDomainError},
    ports::TrunkDriver,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors returned while building a driver catalog.
#[derive(Debug, Clone, Error)]
pub enum DriverCatalogError {
    /// A driver descriptor failed validation.
    #[error(transparent)]
    Domain(#[from] TrunkDomainError),

    /// A driver with the same name is already registered.
    #[error("duplicate trunk driver: {0}")]
    DuplicateDriver(DriverName),

    /// The catalog configuration could not be parsed.
    #[error("invalid driver catalog configuration: {0}")]
    InvalidConfig(Arc<dyn std::error::Error + Send + Sync>),

    /// The catalog configuration could not be read.
    #[error("failed to read driver catalog configuration: {0}")]
    Io(Arc<std::io::Error>),
}

impl DriverCatalogError {
    /// Wraps a configuration parsing error.
    pub fn invalid_config(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidConfig(Arc::new(err))
    }
}

impl From<std::io::Error> for DriverCatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Result type for driver catalog operations.
pub type DriverCatalogResult<T> = Result<T, DriverCatalogError>;

/// Ordered set of uniquely named trunk drivers.
///
/// The catalog is built once at start-up and read concurrently afterwards.
#[derive(Clone, Default)]
pub struct DriverCatalog {
    drivers: Vec<Arc<dyn TrunkDriver>>,
}

impl DriverCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from deployment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DriverCatalogError::Domain`] when an entry is invalid or
    /// [`DriverCatalogError::DuplicateDriver`] when two entries share a name.
    pub fn from_config(config: DriverCatalogConfig) -> DriverCatalogResult<Self> {
        let mut catalog = Self::new();
        for entry in config.drivers {
            let descriptor = entry.into_descriptor()?;
            catalog.register(Arc::new(descriptor))?;
        }
        info!(drivers = catalog.len(), "loaded trunk driver catalog");
        Ok(catalog)
    }

    /// Adds a driver after the ones already registered.
    ///
    /// # Errors
    ///
    /// Returns [`DriverCatalogError::DuplicateDriver`] when a driver with the
    /// same name is already registered.
    pub fn register(&mut self, driver: Arc<dyn TrunkDriver>) -> DriverCatalogResult<()> {
        if self.get(driver.name()).is_some() {
            return Err(DriverCatalogError::DuplicateDriver(driver.name().clone()));
        }
        self.drivers.push(driver);
        Ok(())
    }

    /// Finds a driver by name.
    #[must_use]
    pub fn get(&self, name: &DriverName) -> Option<&Arc<dyn TrunkDriver>> {
        self.drivers.iter().find(|driver| driver.name() == name)
    }

    /// Iterates over drivers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn TrunkDriver>> {
        self.drivers.iter()
    }

    /// Returns the number of registered drivers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Returns whether no driver is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl fmt::Debug for DriverCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.drivers.iter().map(|driver| driver.name()))
            .finish()
    }
}
