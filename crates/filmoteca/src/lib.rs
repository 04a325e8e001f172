//! filmoteca - client library for the movie rating API.
//!
//! The library wraps the remote REST API behind an [`ApiClient`] that owns the
//! base URL and the current session. Reads decode into [`Page`]s whose
//! navigation flags come from the `Link` response header, writes are sent as
//! JSON-Patch operation lists built by [`patch`].
//!
//! # Example
//!
//! ```no_run
//! use filmoteca::{ApiClient, ApiUrl, MemorySessionStore, MovieQuery, SortDirection};
//!
//! # async fn example() -> Result<(), filmoteca::Error> {
//! let api = ApiUrl::new("http://localhost:8080")?;
//! let client = ApiClient::new(api, MemorySessionStore::default())?;
//!
//! if client.login("alice@example.com", "secret").await {
//!     let query = MovieQuery::default()
//!         .genre("Action")
//!         .sort_by("rating", SortDirection::Descending);
//!     let page = client.find_movies(&query).await;
//!     for movie in &page.content {
//!         println!("{}", movie.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod hooks;
pub mod http;
pub mod model;
pub mod pager;
pub mod patch;
pub mod query;
pub mod types;

// Re-export primary types at crate root for convenience
pub use api::ApiClient;
pub use auth::{
    Access, Credentials, Denied, FileSessionStore, MemorySessionStore, SessionState, SessionStore,
};
pub use error::Error;
pub use model::{Assessment, FriendRelation, FriendStatus, Movie, Page, User};
pub use pager::Pager;
pub use patch::{PatchOperation, ProfileEdit};
pub use query::{CommentQuery, MovieQuery, SortDirection, UserQuery};
pub use types::{ApiUrl, Email};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
