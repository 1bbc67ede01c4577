//! Core plugin port with its optional agent extension.

use super::AgentRegistry;
use std::sync::Arc;

/// Alias under which a core plugin advertises agent queries.
pub const AGENT_EXTENSION: &str = "agent";

/// Active core plugin of the deployment.
///
/// Agent queries are an optional capability: a plugin offers them only when
/// it advertises [`AGENT_EXTENSION`] and hands out a registry.
pub trait CorePlugin: Send + Sync {
    /// Registry type exposed through the agent extension.
    type Agents: AgentRegistry;

    /// Returns whether the plugin advertises the extension `alias`.
    fn supports_extension(&self, alias: &str) -> bool;

    /// Returns the agent registry, or `None` when agents are not tracked.
    fn agent_registry(&self) -> Option<Arc<Self::Agents>>;
}
