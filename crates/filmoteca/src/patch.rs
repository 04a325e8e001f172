//! JSON-Patch style edits.
//!
//! An edit holds an immutable snapshot of the entity as it was loaded and a
//! draft the caller changes freely. [`ProfileEdit::operations`] compares the
//! two field by field and yields one `replace` operation per changed field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Date, FriendStatus, Movie, MovieStatus, User};

/// One field replacement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    pub value: Value,
}

impl PatchOperation {
    /// `{ "op": "replace", "path": "/<field>", "value": value }`
    pub fn replace(field: &str, value: impl Into<Value>) -> Self {
        Self {
            op: "replace".to_string(),
            path: format!("/{field}"),
            value: value.into(),
        }
    }

    /// The single operation that answers a friend request.
    pub fn friend_status(status: FriendStatus) -> Self {
        Self::replace("status", status.as_str())
    }
}

/// Append a replace operation when `draft` differs from `original`.
fn diff<T>(ops: &mut Vec<PatchOperation>, field: &str, original: &T, draft: &T)
where
    T: PartialEq + Serialize,
{
    if original == draft {
        return;
    }
    // Serializing plain model fields cannot fail
    let value = serde_json::to_value(draft).unwrap_or(Value::Null);
    ops.push(PatchOperation::replace(field, value));
}

/// Edits to a user's profile.
#[derive(Clone, Debug)]
pub struct ProfileEdit {
    original: User,
    pub name: String,
    pub country: Option<String>,
    pub picture: Option<String>,
    pub birthday: Option<Date>,
}

impl ProfileEdit {
    /// Start editing from a loaded user. The draft begins equal to it.
    pub fn new(user: User) -> Self {
        Self {
            name: user.name.clone(),
            country: user.country.clone(),
            picture: user.picture.clone(),
            birthday: user.birthday,
            original: user,
        }
    }

    pub fn original(&self) -> &User {
        &self.original
    }

    /// Operations for every changed field, in the order `name`, `country`,
    /// `picture`, `birthday`.
    pub fn operations(&self) -> Vec<PatchOperation> {
        let mut ops = Vec::new();
        diff(&mut ops, "name", &self.original.name, &self.name);
        diff(&mut ops, "country", &self.original.country, &self.country);
        diff(&mut ops, "picture", &self.original.picture, &self.picture);
        diff(&mut ops, "birthday", &self.original.birthday, &self.birthday);
        ops
    }
}

/// Edits to a movie, available to administrators.
#[derive(Clone, Debug)]
pub struct MovieEdit {
    original: Movie,
    pub title: String,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub status: Option<MovieStatus>,
    pub runtime: Option<u32>,
}

impl MovieEdit {
    pub fn new(movie: Movie) -> Self {
        Self {
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            tagline: movie.tagline.clone(),
            status: movie.status,
            runtime: movie.runtime,
            original: movie,
        }
    }

    pub fn original(&self) -> &Movie {
        &self.original
    }

    /// Operations in the order `title`, `overview`, `tagline`, `status`,
    /// `runtime`.
    pub fn operations(&self) -> Vec<PatchOperation> {
        let mut ops = Vec::new();
        diff(&mut ops, "title", &self.original.title, &self.title);
        diff(&mut ops, "overview", &self.original.overview, &self.overview);
        diff(&mut ops, "tagline", &self.original.tagline, &self.tagline);
        diff(&mut ops, "status", &self.original.status, &self.status);
        diff(&mut ops, "runtime", &self.original.runtime, &self.runtime);
        ops
    }
}
