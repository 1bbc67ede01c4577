//! Agent identity and presence records.

use super::{BindingHost, TrunkDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Agent type reported by the Open vSwitch agent.
const OPEN_VSWITCH_AGENT: &str = "Open vSwitch agent";

/// Agent type reported by the Linux bridge agent.
const LINUX_BRIDGE_AGENT: &str = "Linux bridge agent";

/// Unique identifier for a registered agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(Uuid);

impl AgentId {
    /// Creates a new random agent identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an agent identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type tag of a host agent (for example `Open vSwitch agent`).
///
/// Agent types are matched exactly, so case and inner spacing are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentType(String);

impl AgentType {
    /// Creates a validated agent type.
    ///
    /// # Errors
    ///
    /// Returns [`TrunkDomainError::EmptyAgentType`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TrunkDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrunkDomainError::EmptyAgentType);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parses an optional agent type where an empty string means "agentless".
    ///
    /// Returns `None` for `None`, empty, and whitespace-only input.
    #[must_use]
    pub fn optional(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| Self::new(raw).ok())
    }

    /// Returns the Open vSwitch agent type.
    #[must_use]
    pub fn open_vswitch() -> Self {
        Self(OPEN_VSWITCH_AGENT.to_owned())
    }

    /// Returns the Linux bridge agent type.
    #[must_use]
    pub fn linux_bridge() -> Self {
        Self(LINUX_BRIDGE_AGENT.to_owned())
    }

    /// Returns the agent type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AgentType {
    type Error = TrunkDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgentType> for String {
    fn from(value: AgentType) -> Self {
        value.0
    }
}

/// Presence fact for an agent of a given type on a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    id: AgentId,
    host: BindingHost,
    agent_type: AgentType,
    registered_at: DateTime<Utc>,
}

impl AgentRecord {
    /// Creates a record for an agent that has just reported in.
    #[must_use]
    pub fn new(host: BindingHost, agent_type: AgentType, clock: &impl Clock) -> Self {
        Self {
            id: AgentId::new(),
            host,
            agent_type,
            registered_at: clock.utc(),
        }
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the host the agent runs on.
    #[must_use]
    pub const fn host(&self) -> &BindingHost {
        &self.host
    }

    /// Returns the agent type.
    #[must_use]
    pub const fn agent_type(&self) -> &AgentType {
        &self.agent_type
    }

    /// Returns the time the agent registered.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
