//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for the movie API.
///
/// Network URLs must use HTTPS; plain HTTP is accepted only for loopback
/// hosts so a locally running API can be reached during development.
///
/// # Example
///
/// ```
/// use filmoteca::ApiUrl;
///
/// let api = ApiUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(api.endpoint("movies/42"), "http://localhost:8080/movies/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the absolute URL of an API resource path.
    ///
    /// Leading slashes on `path` are ignored, so `"/movies"` and `"movies"`
    /// resolve to the same endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        // Url always renders a root path as "/", so trim before joining
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_loopback = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_loopback) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://movies.example.org").unwrap();
        assert_eq!(api.host(), Some("movies.example.org"));
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://localhost:8080").unwrap();
        assert_eq!(api.host(), Some("localhost"));
        assert!(ApiUrl::new("http://127.0.0.1:9000").is_ok());
    }

    #[test]
    fn endpoint_construction() {
        let api = ApiUrl::new("https://movies.example.org").unwrap();
        assert_eq!(
            api.endpoint("/movies/1/assessments"),
            "https://movies.example.org/movies/1/assessments"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let api = ApiUrl::new("https://example.org/api/").unwrap();
        assert_eq!(api.endpoint("login"), "https://example.org/api/login");
    }

    #[test]
    fn display_drops_trailing_slash() {
        let api = ApiUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(api.to_string(), "http://localhost:8080");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://movies.example.org").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/movies").is_err());
    }

    #[test]
    fn invalid_with_query() {
        assert!(ApiUrl::new("https://example.org/?page=1").is_err());
    }

    #[test]
    fn deserializes_from_string() {
        let api: ApiUrl = serde_json::from_str(r#""http://localhost:8080""#).unwrap();
        assert_eq!(api.host(), Some("localhost"));
        assert!(serde_json::from_str::<ApiUrl>(r#""ftp://example.org""#).is_err());
    }
}
