//! HTTP layer.
//!
//! This module provides the REST client, the resource paths it talks to and
//! the `Link` header decoding that turns responses into pages.

mod client;
pub mod endpoints;
mod link;

pub use client::{QueryPairs, RestClient};
pub use link::PageLinks;
