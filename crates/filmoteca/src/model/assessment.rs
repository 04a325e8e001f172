//! Ratings and comments ("assessments" on the wire).

use serde::{Deserialize, Serialize};

/// The movie an assessment refers to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// The author of an assessment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// A rating with a free-text comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<MovieSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

/// A comment about to be posted on a movie.
///
/// The author is filled in from the active session when it is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewComment {
    pub movie: String,
    pub rating: u8,
    pub comment: String,
}

impl NewComment {
    /// Lowest accepted rating.
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating.
    pub const MAX_RATING: u8 = 10;

    pub fn new(movie: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Returns true if the rating lies within the accepted range.
    pub fn has_valid_rating(&self) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating)
    }
}
