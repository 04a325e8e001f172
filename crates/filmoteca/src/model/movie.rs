//! Movie records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Date;
use crate::error::InvalidInputError;

/// Production status of a movie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieStatus {
    Rumored,
    Planned,
    InProduction,
    PostProduction,
    Released,
    Cancelled,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl MovieStatus {
    /// The wire name, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Rumored => "RUMORED",
            MovieStatus::Planned => "PLANNED",
            MovieStatus::InProduction => "IN_PRODUCTION",
            MovieStatus::PostProduction => "POST_PRODUCTION",
            MovieStatus::Released => "RELEASED",
            MovieStatus::Cancelled => "CANCELLED",
            MovieStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieStatus {
    type Err = InvalidInputError;

    /// Accepts the wire name in any case, with `-` or `_` between words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        [
            MovieStatus::Rumored,
            MovieStatus::Planned,
            MovieStatus::InProduction,
            MovieStatus::PostProduction,
            MovieStatus::Released,
            MovieStatus::Cancelled,
        ]
        .into_iter()
        .find(|status| status.as_str() == normalized)
        .ok_or_else(|| InvalidInputError::Other {
            message: format!("unknown movie status '{s}'"),
        })
    }
}

/// Kind of a movie resource link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Poster,
    Backdrop,
    Trailer,
    Netflix,
    AmazonPrime,
    DisneyPlus,
    Itunes,
    Hbo,
    Youtube,
    GooglePlay,
    Torrent,
    #[serde(other)]
    Unknown,
}

/// A typed link attached to a movie (poster image, trailer, streaming page).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub url: String,
}

/// A movie as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MovieStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

impl Movie {
    /// URL of the first poster resource, if any.
    pub fn poster(&self) -> Option<&str> {
        self.resource(ResourceType::Poster)
    }

    /// URL of the first resource of the given kind.
    pub fn resource(&self, kind: ResourceType) -> Option<&str> {
        self.resources
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.url.as_str())
    }
}
