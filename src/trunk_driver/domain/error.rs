//! Error types for trunk driver domain validation.

use thiserror::Error;

/// Errors returned while constructing trunk driver domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrunkDomainError {
    /// The binding host is empty after trimming.
    #[error("binding host must not be empty")]
    EmptyHost,

    /// The binding host contains whitespace or control characters.
    #[error("binding host '{0}' contains invalid characters")]
    InvalidHost(String),

    /// The interface kind is empty after trimming.
    #[error("interface kind must not be empty")]
    EmptyInterfaceKind,

    /// The driver name is empty after trimming.
    #[error("driver name must not be empty")]
    EmptyDriverName,

    /// The driver name is not a well-formed alias.
    #[error(
        "driver name '{0}' must start with a letter, end with a letter or digit, and use only lowercase alphanumerics, '-' and '_'"
    )]
    InvalidDriverName(String),

    /// The driver name exceeds the 64-character limit.
    #[error("driver name exceeds 64 character limit: {0}")]
    DriverNameTooLong(String),

    /// The driver declares no interface kinds, so its compatibility
    /// predicate can never hold.
    #[error("driver '{0}' does not declare any supported interface kind")]
    NoSupportedInterfaces(String),

    /// The agent type is empty after trimming.
    #[error("agent type must not be empty")]
    EmptyAgentType,
}
