//! Agent registry port.

use crate::trunk_driver::domain::{AgentRecord, AgentType, AuthorizationContext, BindingHost};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent registry operations.
pub type AgentRegistryResult<T> = Result<T, AgentRegistryError>;

/// Filter applied to agent queries.
///
/// Keys combine conjunctively; values within a key combine disjunctively.
/// An unset key does not constrain the query, while a key set to an empty
/// list matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentFilter {
    hosts: Option<BTreeSet<BindingHost>>,
    agent_types: Option<BTreeSet<AgentType>>,
}

impl AgentFilter {
    /// Creates an unconstrained filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to agents on any of the given hosts.
    #[must_use]
    pub fn with_hosts(mut self, hosts: impl IntoIterator<Item = BindingHost>) -> Self {
        self.hosts = Some(hosts.into_iter().collect());
        self
    }

    /// Restricts the query to agents of any of the given types.
    #[must_use]
    pub fn with_agent_types(mut self, agent_types: impl IntoIterator<Item = AgentType>) -> Self {
        self.agent_types = Some(agent_types.into_iter().collect());
        self
    }

    /// Returns the host constraint, if set.
    #[must_use]
    pub const fn hosts(&self) -> Option<&BTreeSet<BindingHost>> {
        self.hosts.as_ref()
    }

    /// Returns the agent type constraint, if set.
    #[must_use]
    pub const fn agent_types(&self) -> Option<&BTreeSet<AgentType>> {
        self.agent_types.as_ref()
    }

    /// Returns whether a record satisfies every constraint of the filter.
    #[must_use]
    pub fn matches(&self, record: &AgentRecord) -> bool {
        let host_matches = self
            .hosts
            .as_ref()
            .is_none_or(|hosts| hosts.contains(record.host()));
        let type_matches = self
            .agent_types
            .as_ref()
            .is_none_or(|types| types.contains(record.agent_type()));
        host_matches && type_matches
    }
}

/// Agent registry query contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentRegistry: Send + Sync {
    /// Returns every agent record matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::Forbidden`] when `context` lacks the
    /// privileges to list agents, or another [`AgentRegistryError`] when the
    /// registry cannot answer.
    async fn query_agents(
        &self,
        context: &AuthorizationContext,
        filter: &AgentFilter,
    ) -> AgentRegistryResult<Vec<AgentRecord>>;
}

/// Errors returned by agent registry implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentRegistryError {
    /// The caller context is not allowed to list agents.
    #[error("listing agents requires an elevated context")]
    Forbidden,

    /// The registry did not answer in time.
    #[error("agent registry query timed out")]
    Timeout,

    /// The registry failed to answer the query.
    #[error("agent registry query failed: {0}")]
    Query(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentRegistryError {
    /// Wraps a registry query failure.
    pub fn query(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Query(Arc::new(err))
    }
}
