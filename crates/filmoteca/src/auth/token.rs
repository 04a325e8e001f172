//! Token issued by the login endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The opaque token sent back in the `Authorization` header.
///
/// Usually already carries its `Bearer ` prefix; see
/// [`RestClient`](crate::http::RestClient) for how it is sent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hides_value_in_debug() {
        let token = AuthToken::new("Bearer eyJhbGciOiJIUzUxMiJ9.payload.sig");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn token_serializes_as_plain_string() {
        let json = serde_json::to_string(&AuthToken::new("tok123")).unwrap();
        assert_eq!(json, "\"tok123\"");
    }
}
