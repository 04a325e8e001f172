//! Validated input types.
//!
//! These types check their invariants at construction time so the client
//! never issues a request against a malformed base URL or identifier.

mod api_url;
mod email;

pub use api_url::ApiUrl;
pub use email::Email;
