//! Entities exchanged with the API.
//!
//! These are passed through, not owned, by the client: every fetch replaces
//! whatever the caller held before and nothing is merged across requests.

mod assessment;
mod date;
mod movie;
mod page;
mod user;

pub use assessment::{Assessment, MovieSummary, NewComment, UserSummary};
pub use date::Date;
pub use movie::{Movie, MovieStatus, Resource, ResourceType};
pub use page::Page;
pub use user::{FriendRelation, FriendStatus, NewUser, User, ADMIN_ROLE};
