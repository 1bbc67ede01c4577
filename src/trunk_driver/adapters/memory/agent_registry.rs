//! In-memory agent registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::trunk_driver::{
    domain::{AgentId, AgentRecord, AuthorizationContext},
    ports::{AgentFilter, AgentRegistry, AgentRegistryError, AgentRegistryResult},
};

/// Thread-safe in-memory agent registry.
///
/// Agents can register and deregister while resolutions are in flight;
/// every query observes a single snapshot taken under the read lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentRegistry {
    state: Arc<RwLock<InMemoryAgentState>>,
}

#[derive(Debug, Default)]
struct InMemoryAgentState {
    agents: HashMap<AgentId, AgentRecord>,
    unreachable: bool,
}

impl InMemoryAgentRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an agent record, replacing any record with the same ID.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::Query`] when lock acquisition fails.
    pub fn register(&self, record: AgentRecord) -> AgentRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AgentRegistryError::query(std::io::Error::other(err.to_string()))
        })?;
        state.agents.insert(record.id(), record);
        Ok(())
    }

    /// Removes an agent record.
    ///
    /// Returns the removed record, or `None` when no agent had the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::Query`] when lock acquisition fails.
    pub fn deregister(&self, id: AgentId) -> AgentRegistryResult<Option<AgentRecord>> {
        let mut state = self.state.write().map_err(|err| {
            AgentRegistryError::query(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.agents.remove(&id))
    }

    /// Makes subsequent queries fail with [`AgentRegistryError::Timeout`]
    /// until reset.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::Query`] when lock acquisition fails.
    pub fn set_unreachable(&self, unreachable: bool) -> AgentRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AgentRegistryError::query(std::io::Error::other(err.to_string()))
        })?;
        state.unreachable = unreachable;
        Ok(())
    }
}

#[async_trait]
impl AgentRegistry for InMemoryAgentRegistry {
    async fn query_agents(
        &self,
        context: &AuthorizationContext,
        filter: &AgentFilter,
    ) -> AgentRegistryResult<Vec<AgentRecord>> {
        if !context.is_admin() {
            return Err(AgentRegistryError::Forbidden);
        }

        let state = self.state.read().map_err(|err| {
            AgentRegistryError::query(std::io::Error::other(err.to_string()))
        })?;
        if state.unreachable {
            return Err(AgentRegistryError::Timeout);
        }

        let matching = state
            .agents
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        Ok(matching)
    }
}
