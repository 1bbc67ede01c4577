//! Agent presence checks against the agent registry.

use crate::trunk_driver::{
    domain::{AgentType, AuthorizationContext, BindingHost},
    ports::{AGENT_EXTENSION, AgentFilter, AgentRegistry, AgentRegistryResult, CorePlugin},
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Answers whether agents of given types currently run on a host.
///
/// Whether agent queries are available at all is settled when the checker
/// is composed. Without the agent extension every check answers `false`.
#[derive(Clone)]
pub struct AgentAvailabilityChecker<R>
where
    R: AgentRegistry,
{
    registry: Option<Arc<R>>,
}

impl<R> AgentAvailabilityChecker<R>
where
    R: AgentRegistry,
{
    /// Creates a checker that queries `registry`.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Creates a checker for a deployment without agent support.
    #[must_use]
    pub const fn unsupported() -> Self {
        Self { registry: None }
    }

    /// Resolves the agent capability of the active core plugin.
    ///
    /// The registry is used only when the plugin advertises the `agent`
    /// extension.
    #[must_use]
    pub fn from_plugin<P>(plugin: &P) -> Self
    where
        P: CorePlugin<Agents = R>,
    {
        let registry = if plugin.supports_extension(AGENT_EXTENSION) {
            plugin.agent_registry()
        } else {
            None
        };
        if registry.is_none() {
            debug!("core plugin does not support agent queries");
        }
        Self { registry }
    }

    /// Returns whether agent queries are available.
    #[must_use]
    pub const fn supports_agents(&self) -> bool {
        self.registry.is_some()
    }

    /// Returns whether at least one agent of any of `agent_types` is
    /// registered on `host`.
    ///
    /// The query runs under an elevated copy of `context`. Returns
    /// `Ok(false)` without querying when agent queries are unsupported or
    /// `agent_types` is empty.
    ///
    /// # Errors
    ///
    /// Returns the registry's [`AgentRegistryError`](crate::trunk_driver::ports::AgentRegistryError)
    /// unchanged when the query fails.
    pub async fn has_available_agent(
        &self,
        context: &AuthorizationContext,
        agent_types: &BTreeSet<AgentType>,
        host: &BindingHost,
    ) -> AgentRegistryResult<bool> {
        let Some(registry) = self.registry.as_ref() else {
            debug!(%host, "agent extension unavailable, assuming no agents");
            return Ok(false);
        };
        if agent_types.is_empty() {
            return Ok(false);
        }

        let filter = AgentFilter::new()
            .with_hosts([host.clone()])
            .with_agent_types(agent_types.iter().cloned());
        let agents = registry.query_agents(&context.elevated(), &filter).await?;
        debug!(%host, matches = agents.len(), "queried agents on host");
        Ok(!agents.is_empty())
    }
}
