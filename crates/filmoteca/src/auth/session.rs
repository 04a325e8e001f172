//! Persisted session state.

use serde::{Deserialize, Serialize};

use super::token::AuthToken;
use crate::model::ADMIN_ROLE;

/// Everything remembered about the logged-in user between runs.
///
/// Cleared entirely on logout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<AuthToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl SessionState {
    /// State right after a successful login, before the profile is known.
    pub fn logged_in(token: AuthToken, email: impl Into<String>) -> Self {
        Self {
            token: Some(token),
            email: Some(email.into()),
            authenticated: true,
            ..Self::default()
        }
    }

    /// True when the session holds a token and is flagged authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated && self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role.as_deref() == Some(ADMIN_ROLE)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Name to greet the user with; falls back to the email.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
    }
}
