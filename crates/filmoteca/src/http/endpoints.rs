//! Resource paths and wire types.

use serde::{Deserialize, Serialize};

use crate::model::UserSummary;

// ============================================================================
// Resource Paths
// ============================================================================

/// Response header carrying the token issued by a successful login.
pub const AUTHENTICATION_HEADER: &str = "authentication";

/// POST /login
pub const LOGIN: &str = "login";

/// GET|POST /movies
pub const MOVIES: &str = "movies";

/// GET|POST /users
pub const USERS: &str = "users";

/// /movies/{id}
pub fn movie(id: &str) -> String {
    format!("{MOVIES}/{}", segment(id))
}

/// /movies/{id}/assessments
pub fn movie_assessments(id: &str) -> String {
    format!("{}/assessments", movie(id))
}

/// /users/{id}
pub fn user(id: &str) -> String {
    format!("{USERS}/{}", segment(id))
}

/// /users/{id}/assessments
pub fn user_assessments(id: &str) -> String {
    format!("{}/assessments", user(id))
}

/// /users/{id}/friends
pub fn friends(id: &str) -> String {
    format!("{}/friends", user(id))
}

/// /users/{id}/friends/{friend}
pub fn friend(id: &str, friend: &str) -> String {
    format!("{}/{}", friends(id), segment(friend))
}

/// Percent-encode a value for use as one path segment.
///
/// Everything outside the RFC 3986 `pchar` set is escaped, so emails keep
/// their `@` while `/`, `?`, `#`, `%` and spaces cannot change the path.
fn segment(value: &str) -> String {
    const PCHAR_EXTRA: &[u8] = b"-._~!$&'()*+,;=:@";

    let mut out = String::with_capacity(value.len());
    for &b in value.as_bytes() {
        if b.is_ascii_alphanumeric() || PCHAR_EXTRA.contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// The envelope wrapping every JSON response body.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Error bodies share the envelope shape but carry no usable data.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for POST /login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for POST /movies/{id}/assessments.
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest<'a> {
    pub rating: u8,
    pub comment: &'a str,
    pub user: UserSummary,
}

/// Request body for POST /users/{id}/friends.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendRequest<'a> {
    pub friend_email: &'a str,
    pub friend_name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths() {
        assert_eq!(movie("27205"), "movies/27205");
        assert_eq!(movie_assessments("27205"), "movies/27205/assessments");
        assert_eq!(user_assessments("a@b.com"), "users/a@b.com/assessments");
        assert_eq!(friend("a@b.com", "c@d.com"), "users/a@b.com/friends/c@d.com");
    }

    #[test]
    fn segments_are_escaped() {
        assert_eq!(movie("a b/c"), "movies/a%20b%2Fc");
        assert_eq!(user("50%?#"), "users/50%25%3F%23");
    }

    #[test]
    fn envelope_reads_data_and_message() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"error":false,"code":200,"message":"OK","data":[1,2],"_links":[]}"#,
        )
        .unwrap();
        assert_eq!(envelope.data, Some(vec![1, 2]));
        assert_eq!(envelope.message.as_deref(), Some("OK"));
    }

    #[test]
    fn envelope_without_data_for_non_default_entity() {
        let envelope: Envelope<UserSummary> =
            serde_json::from_str(r#"{"error":true,"code":404}"#).unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.message.is_none());
    }

    #[test]
    fn friend_request_carries_name() {
        let body = serde_json::to_value(AddFriendRequest {
            friend_email: "c@d.com",
            friend_name: "Carol",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "friendEmail": "c@d.com", "friendName": "Carol" })
        );
    }

    #[test]
    fn comment_request_shape() {
        let body = serde_json::to_value(CreateCommentRequest {
            rating: 7,
            comment: "Nice",
            user: UserSummary {
                email: "a@b.com".to_string(),
                name: "A".to_string(),
            },
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "rating": 7,
                "comment": "Nice",
                "user": { "email": "a@b.com", "name": "A" }
            })
        );
    }
}
