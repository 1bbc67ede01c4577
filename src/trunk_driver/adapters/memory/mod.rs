//! In-memory adapters for tests and deterministic local flows.

mod agent_registry;
mod plugin;

pub use agent_registry::InMemoryAgentRegistry;
pub use plugin::InMemoryCorePlugin;
