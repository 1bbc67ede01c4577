//! In-memory core plugin.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::InMemoryAgentRegistry;
use crate::trunk_driver::ports::{AGENT_EXTENSION, CorePlugin};

/// Core plugin backed by an [`InMemoryAgentRegistry`].
#[derive(Debug, Clone)]
pub struct InMemoryCorePlugin {
    extensions: BTreeSet<String>,
    agents: Option<Arc<InMemoryAgentRegistry>>,
}

impl InMemoryCorePlugin {
    /// Creates a plugin that advertises the agent extension and serves
    /// queries from `agents`.
    #[must_use]
    pub fn with_agents(agents: Arc<InMemoryAgentRegistry>) -> Self {
        Self {
            extensions: BTreeSet::from([AGENT_EXTENSION.to_owned()]),
            agents: Some(agents),
        }
    }

    /// Creates a plugin that does not track agents at all.
    #[must_use]
    pub const fn without_agents() -> Self {
        Self {
            extensions: BTreeSet::new(),
            agents: None,
        }
    }

    /// Advertises an additional extension alias.
    #[must_use]
    pub fn with_extension(mut self, alias: impl Into<String>) -> Self {
        self.extensions.insert(alias.into());
        self
    }
}

impl CorePlugin for InMemoryCorePlugin {
    type Agents = InMemoryAgentRegistry;

    fn supports_extension(&self, alias: &str) -> bool {
        self.extensions.contains(alias)
    }

    fn agent_registry(&self) -> Option<Arc<Self::Agents>> {
        self.agents.clone()
    }
}
