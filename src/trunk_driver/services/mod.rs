//! Services deciding which trunk driver owns a port binding.

mod availability;
mod catalog;
mod config;
mod resolver;

pub use availability::AgentAvailabilityChecker;
pub use catalog::{DriverCatalog, DriverCatalogError, DriverCatalogResult};
pub use config::{DriverCatalogConfig, DriverConfig};
pub use resolver::{DriverCompatibilityResolver, DriverResolutionError, DriverResolutionResult};
