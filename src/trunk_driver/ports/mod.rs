//! Port contracts for trunk driver ownership resolution.
//!
//! Ports define the collaborators the resolver depends on: the drivers being
//! evaluated, the agent registry, and the core plugin that may or may not
//! offer agent queries.

pub mod agent_registry;
pub mod driver;
pub mod plugin;

pub use agent_registry::{AgentFilter, AgentRegistry, AgentRegistryError, AgentRegistryResult};
pub use driver::TrunkDriver;
pub use plugin::{AGENT_EXTENSION, CorePlugin};
