//! Outcome of a driver compatibility assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a driver does or does not own a port binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    /// The driver supports the interface kind and, when agent-based, has an
    /// agent on the binding host.
    Compatible,
    /// The driver does not support the interface kind.
    InterfaceMismatch,
    /// The driver supports the interface kind but none of its agents runs on
    /// the binding host (or the agent extension is unavailable).
    NoAgentOnHost,
}

impl Compatibility {
    /// Returns whether the driver owns the binding.
    #[must_use]
    pub const fn is_compatible(self) -> bool {
        matches!(self, Self::Compatible)
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::InterfaceMismatch => "interface_mismatch",
            Self::NoAgentOnHost => "no_agent_on_host",
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
