//! Reactive bindings of a query to held state.
//!
//! A hook re-fetches when it is given a query whose serialized form differs
//! from the one it holds, and only the response to the latest-issued query is
//! ever applied. Mutations go through the same [`ApiClient`](crate::ApiClient)
//! and report a [`MutationStatus`].

mod binding;
mod comments;
mod movie;
mod movies;
mod status;
mod user;

pub use binding::FetchOutcome;
pub use comments::CommentsHook;
pub use movie::MovieHook;
pub use movies::MoviesHook;
pub use status::MutationStatus;
pub use user::UserHook;
