//! Email address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated email address.
///
/// Users are identified by their email on the API, so this is also the user
/// identifier used in resource paths. Validation is deliberately shallow: one
/// `@` with a non-empty local part and a dotted domain.
///
/// # Example
///
/// ```
/// use filmoteca::Email;
///
/// let email = Email::new("alice@example.com").unwrap();
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not an email address.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        let trimmed = s.trim();
        Self::validate(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the part before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Returns the part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }

    /// Returns the full address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::Email {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if s.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }

        let Some((local, domain)) = s.split_once('@') else {
            return Err(invalid("must contain '@'"));
        };

        if local.is_empty() {
            return Err(invalid("local part must be non-empty"));
        }

        if domain.contains('@') {
            return Err(invalid("must contain exactly one '@'"));
        }

        if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
            return Err(invalid("domain must be a dotted host name"));
        }

        Ok(())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        let email = Email::new("a@b.com").unwrap();
        assert_eq!(email.local_part(), "a");
        assert_eq!(email.domain(), "b.com");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let email = Email::new("  alice@example.com \n").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn missing_at_sign() {
        assert!(Email::new("alice.example.com").is_err());
    }

    #[test]
    fn empty_local_part() {
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn undotted_domain() {
        assert!(Email::new("alice@localhost").is_err());
        assert!(Email::new("alice@example.").is_err());
    }

    #[test]
    fn double_at_sign() {
        assert!(Email::new("alice@bob@example.com").is_err());
    }

    #[test]
    fn serde_validates() {
        let email: Email = serde_json::from_str(r#""test@test.test""#).unwrap();
        assert_eq!(email.as_str(), "test@test.test");
        assert!(serde_json::from_str::<Email>(r#""nope""#).is_err());
        assert_eq!(serde_json::to_string(&email).unwrap(), r#""test@test.test""#);
    }
}
