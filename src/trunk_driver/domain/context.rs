//! Caller authorization context.

use serde::{Deserialize, Serialize};

/// Identity and scope of the caller driving a resolution.
///
/// Contexts are borrowed by the resolver and never mutated; privileged
/// lookups work on an [`elevated`](Self::elevated) copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationContext {
    user_id: Option<String>,
    project_id: Option<String>,
    is_admin: bool,
}

impl AuthorizationContext {
    /// Creates an unprivileged context for a tenant user.
    #[must_use]
    pub fn for_user(user_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            project_id: Some(project_id.into()),
            is_admin: false,
        }
    }

    /// Creates an administrative context without a user identity.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            user_id: None,
            project_id: None,
            is_admin: true,
        }
    }

    /// Returns a privileged copy of this context.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn elevated(&self) -> Self {
        Self {
            is_admin: true,
            ..self.clone()
        }
    }

    /// Returns the user identifier, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns the project identifier, if any.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Returns whether the context carries administrative privileges.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }
}
