//! A bounded slice of a result set.

use serde::{Deserialize, Serialize};

use crate::http::PageLinks;

/// One page of entities plus the navigation flags derived from the
/// response's pagination links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// An empty page with no neighbours.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            has_next: false,
            has_previous: false,
        }
    }

    /// Build a page from decoded content and the response's links.
    pub fn from_links(content: Vec<T>, links: &PageLinks) -> Self {
        Self {
            content,
            has_next: links.has_next(),
            has_previous: links.has_previous(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
