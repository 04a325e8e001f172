//! Page index bookkeeping.

use crate::model::Page;
use crate::query::Paginated;

/// Tracks the current page index and whether it can move.
///
/// The pager is fed the flags of every page the caller receives; `next` and
/// `previous` only move when the last observed page allowed it. The resulting
/// index is applied to whatever query the caller fetches with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    has_next: bool,
    has_previous: bool,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given index, with no known neighbours.
    pub fn at(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Record the navigation flags of the latest page.
    pub fn observe<T>(&mut self, page: &Page<T>) {
        self.has_next = page.has_next;
        self.has_previous = page.has_previous;
    }

    /// Move forward. Returns false and stays put if there is no next page.
    pub fn next(&mut self) -> bool {
        if !self.has_next {
            return false;
        }
        let Some(page) = self.page.checked_add(1) else {
            return false;
        };
        self.page = page;
        self.has_next = false;
        self.has_previous = true;
        true
    }

    /// Move back. Returns false and stays put if there is no previous page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous || self.page == 0 {
            return false;
        }
        self.page -= 1;
        self.has_previous = false;
        self.has_next = true;
        true
    }

    /// Go back to the first page, e.g. after the filter changed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The query pointed at the current page.
    pub fn apply<Q: Paginated>(&self, query: &Q) -> Q {
        query.with_page(self.page)
    }
}
