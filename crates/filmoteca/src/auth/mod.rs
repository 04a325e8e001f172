//! Authentication types and session persistence.
//!
//! The client keeps the token of the logged-in user in memory and mirrors the
//! whole [`SessionState`] into a [`SessionStore`] so that it survives restarts.
//! [`Access`] decides which views a session may reach.

mod access;
mod credentials;
mod session;
mod store;
mod token;

pub use access::{Access, Denied};
pub use credentials::Credentials;
pub use session::SessionState;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use token::AuthToken;
