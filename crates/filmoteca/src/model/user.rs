//! Users and friend relations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Date;

/// Role name granting administrative access.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// State of a friend request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendStatus {
    Pending,
    Accepted,
    Declined,
}

impl FriendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendStatus::Pending => "PENDING",
            FriendStatus::Accepted => "ACCEPTED",
            FriendStatus::Declined => "DECLINED",
        }
    }
}

impl fmt::Display for FriendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a friendship, as seen from the owning user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRelation {
    pub friend_email: String,
    #[serde(default)]
    pub friend_name: String,
    pub status: FriendStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<Date>,
}

impl FriendRelation {
    /// The date the relation entered its current status.
    ///
    /// Declined relations keep only their request date.
    pub fn since(&self) -> Option<Date> {
        match self.status {
            FriendStatus::Accepted => self.accepted.or(self.requested),
            FriendStatus::Pending | FriendStatus::Declined => self.requested,
        }
    }
}

/// A user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Date>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub friends: Vec<FriendRelation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl User {
    /// Incoming friend requests still awaiting an answer.
    pub fn pending_requests(&self) -> impl Iterator<Item = &FriendRelation> {
        self.friends_with_status(FriendStatus::Pending)
    }

    /// Accepted friends.
    pub fn accepted_friends(&self) -> impl Iterator<Item = &FriendRelation> {
        self.friends_with_status(FriendStatus::Accepted)
    }

    fn friends_with_status(&self, status: FriendStatus) -> impl Iterator<Item = &FriendRelation> {
        self.friends.iter().filter(move |f| f.status == status)
    }

    /// Returns true if the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ADMIN_ROLE)
    }

    /// The role to remember for this user's session.
    pub fn primary_role(&self) -> Option<&str> {
        if self.is_admin() {
            Some(ADMIN_ROLE)
        } else {
            self.roles.first().map(String::as_str)
        }
    }
}

/// Registration payload for a new user.
#[derive(Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub birthday: Date,
    pub password: String,
}

// Keep the password out of logs
impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("country", &self.country)
            .field("picture", &self.picture)
            .field("birthday", &self.birthday)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        serde_json::from_value(serde_json::json!({
            "email": "test@test.test",
            "name": "Test",
            "country": "ES",
            "birthday": { "day": 10, "month": 10, "year": 2000 },
            "friends": [
                {
                    "friendEmail": "ana@test.test",
                    "friendName": "Ana",
                    "status": "PENDING",
                    "requested": { "day": 1, "month": 2, "year": 2023 }
                },
                {
                    "friendEmail": "bob@test.test",
                    "friendName": "Bob",
                    "status": "ACCEPTED",
                    "requested": { "day": 1, "month": 1, "year": 2023 },
                    "accepted": { "day": 3, "month": 1, "year": 2023 }
                },
                {
                    "friendEmail": "eve@test.test",
                    "friendName": "Eve",
                    "status": "DECLINED",
                    "requested": { "day": 5, "month": 1, "year": 2023 }
                }
            ],
            "roles": ["ROLE_USER"]
        }))
        .unwrap()
    }

    #[test]
    fn splits_friends_by_status() {
        let user = user();
        let pending: Vec<_> = user.pending_requests().map(|f| f.friend_name.as_str()).collect();
        let accepted: Vec<_> = user.accepted_friends().map(|f| f.friend_name.as_str()).collect();
        assert_eq!(pending, ["Ana"]);
        assert_eq!(accepted, ["Bob"]);
    }

    #[test]
    fn since_follows_status() {
        let user = user();
        assert_eq!(user.friends[0].since(), Some(Date::new(1, 2, 2023)));
        assert_eq!(user.friends[1].since(), Some(Date::new(3, 1, 2023)));
        assert_eq!(user.friends[2].since(), Some(Date::new(5, 1, 2023)));
    }

    #[test]
    fn admin_role_wins_as_primary() {
        let mut user = user();
        assert_eq!(user.primary_role(), Some("ROLE_USER"));
        assert!(!user.is_admin());

        user.roles.push(ADMIN_ROLE.to_string());
        assert!(user.is_admin());
        assert_eq!(user.primary_role(), Some(ADMIN_ROLE));
    }

    #[test]
    fn new_user_hides_password_in_debug() {
        let new_user = NewUser {
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            country: None,
            picture: None,
            birthday: Date::new(1, 1, 1990),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", new_user);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));

        let body = serde_json::to_value(&new_user).unwrap();
        assert_eq!(body["password"], "hunter2");
        assert!(body.get("country").is_none());
    }
}
