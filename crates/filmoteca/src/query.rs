//! Typed queries and their query-string encoding.
//!
//! Queries are plain serializable values: the hooks use their JSON form as the
//! key that decides whether a re-fetch is needed, and the client turns them
//! into ordered query parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::http::QueryPairs;
use crate::model::MovieStatus;

/// Default number of movies per page.
pub const MOVIE_PAGE_SIZE: u32 = 7;
/// Default number of comments per page.
pub const COMMENT_PAGE_SIZE: u32 = 3;
/// Default number of users per page.
pub const USER_PAGE_SIZE: u32 = 10;

/// Ordering of one sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The prefix written in front of the key.
    pub fn prefix(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "",
            SortDirection::Descending => "-",
        }
    }
}

/// An ordered list of sort keys, serialized as `-rating,title`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort(Vec<(String, SortDirection)>);

impl Sort {
    /// Append a key. Keys keep the order they were added in.
    pub fn by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.0.push((key.into(), direction));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the wire form back into keys; a leading `+` means ascending.
    pub fn parse(s: &str) -> Self {
        let keys = s
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| match k.strip_prefix('-') {
                Some(key) => (key.to_string(), SortDirection::Descending),
                None => (
                    k.trim_start_matches('+').to_string(),
                    SortDirection::Ascending,
                ),
            })
            .collect();
        Self(keys)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, direction)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}{}", direction.prefix(), key)?;
        }
        Ok(())
    }
}

/// Zero-based page index and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
}

impl Pagination {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    fn push_pairs(&self, pairs: &mut QueryPairs) {
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.size.to_string()));
    }
}

/// Something that can be requested one page at a time.
pub trait Paginated {
    fn pagination(&self) -> Pagination;

    /// A copy of this query pointing at another page.
    fn with_page(&self, page: u32) -> Self;
}

/// Encode pairs the way they appear on the wire.
fn encode(pairs: &QueryPairs) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn push_non_empty(pairs: &mut QueryPairs, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

fn push_sort(pairs: &mut QueryPairs, sort: &Sort) {
    if !sort.is_empty() {
        pairs.push(("sort", sort.to_string()));
    }
}

// ============================================================================
// Movies
// ============================================================================

/// Filter fields for the movie listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFilter {
    pub genre: Option<String>,
    pub title: Option<String>,
    pub status: Option<MovieStatus>,
}

/// A query against `GET /movies`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieQuery {
    pub filter: MovieFilter,
    pub sort: Sort,
    pub pagination: Pagination,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            filter: MovieFilter::default(),
            sort: Sort::default(),
            pagination: Pagination::new(0, MOVIE_PAGE_SIZE),
        }
    }
}

impl MovieQuery {
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.filter.genre = Some(genre.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.filter.title = Some(title.into());
        self
    }

    pub fn status(mut self, status: MovieStatus) -> Self {
        self.filter.status = Some(status);
        self
    }

    pub fn sort_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = self.sort.by(key, direction);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.pagination.size = size;
        self
    }

    /// Query parameters in wire order: `genres, title, status, sort, page,
    /// size`. Empty filters and an empty sort are left out.
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_non_empty(&mut pairs, "genres", self.filter.genre.as_deref());
        push_non_empty(&mut pairs, "title", self.filter.title.as_deref());
        push_non_empty(
            &mut pairs,
            "status",
            self.filter.status.as_ref().map(MovieStatus::as_str),
        );
        push_sort(&mut pairs, &self.sort);
        self.pagination.push_pairs(&mut pairs);
        pairs
    }

    /// The encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        encode(&self.to_query_pairs())
    }
}

impl Paginated for MovieQuery {
    fn pagination(&self) -> Pagination {
        self.pagination
    }

    fn with_page(&self, page: u32) -> Self {
        self.clone().page(page)
    }
}

// ============================================================================
// Comments
// ============================================================================

/// Which collection a comment query targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentScope<'a> {
    Movie(&'a str),
    User(&'a str),
}

/// Filter for comments: exactly one of `movie` / `user` is expected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFilter {
    pub movie: Option<String>,
    pub user: Option<String>,
}

/// A query against a movie's or a user's assessments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentQuery {
    pub filter: CommentFilter,
    pub sort: Sort,
    pub pagination: Pagination,
}

impl Default for CommentQuery {
    fn default() -> Self {
        Self {
            filter: CommentFilter::default(),
            sort: Sort::default(),
            pagination: Pagination::new(0, COMMENT_PAGE_SIZE),
        }
    }
}

impl CommentQuery {
    /// Comments posted on a movie.
    pub fn for_movie(movie: impl Into<String>) -> Self {
        let mut query = Self::default();
        query.filter.movie = Some(movie.into());
        query
    }

    /// Comments written by a user.
    pub fn for_user(user: impl Into<String>) -> Self {
        let mut query = Self::default();
        query.filter.user = Some(user.into());
        query
    }

    pub fn sort_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = self.sort.by(key, direction);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.pagination.size = size;
        self
    }

    /// The targeted collection. `None` when neither filter is set; the movie
    /// wins when both are.
    pub fn scope(&self) -> Option<CommentScope<'_>> {
        fn non_blank(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty())
        }

        non_blank(&self.filter.movie)
            .map(CommentScope::Movie)
            .or_else(|| non_blank(&self.filter.user).map(CommentScope::User))
    }

    /// Query parameters: `sort, page, size`.
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_sort(&mut pairs, &self.sort);
        self.pagination.push_pairs(&mut pairs);
        pairs
    }

    pub fn query_string(&self) -> String {
        encode(&self.to_query_pairs())
    }
}

impl Paginated for CommentQuery {
    fn pagination(&self) -> Pagination {
        self.pagination
    }

    fn with_page(&self, page: u32) -> Self {
        self.clone().page(page)
    }
}

// ============================================================================
// Users
// ============================================================================

/// A query against `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub sort: Sort,
    pub pagination: Pagination,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            sort: Sort::default(),
            pagination: Pagination::new(0, USER_PAGE_SIZE),
        }
    }
}

impl UserQuery {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    /// Query parameters: `name, email, sort, page, size`.
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_non_empty(&mut pairs, "name", self.name.as_deref());
        push_non_empty(&mut pairs, "email", self.email.as_deref());
        push_sort(&mut pairs, &self.sort);
        self.pagination.push_pairs(&mut pairs);
        pairs
    }

    pub fn query_string(&self) -> String {
        encode(&self.to_query_pairs())
    }
}

impl Paginated for UserQuery {
    fn pagination(&self) -> Pagination {
        self.pagination
    }

    fn with_page(&self, page: u32) -> Self {
        self.clone().page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_serialization() {
        let sort = Sort::default()
            .by("rating", SortDirection::Descending)
            .by("title", SortDirection::Ascending);
        assert_eq!(sort.to_string(), "-rating,title");
        assert_eq!(Sort::default().to_string(), "");
    }

    #[test]
    fn sort_parse_accepts_plus_prefix() {
        let sort = Sort::parse("-rating, +title,,");
        assert_eq!(
            sort,
            Sort::default()
                .by("rating", SortDirection::Descending)
                .by("title", SortDirection::Ascending)
        );
    }

    #[test]
    fn movie_query_string_matches_wire_format() {
        let query = MovieQuery::default()
            .genre("Action")
            .sort_by("rating", SortDirection::Descending)
            .page(2)
            .size(7);
        assert!(
            query
                .query_string()
                .contains("genres=Action&sort=-rating&page=2&size=7")
        );
    }

    #[test]
    fn movie_query_defaults() {
        assert_eq!(MovieQuery::default().query_string(), "page=0&size=7");
    }

    #[test]
    fn movie_query_omits_blank_filters() {
        let query = MovieQuery::default()
            .genre("  ")
            .title("Alien")
            .status(MovieStatus::Released);
        assert_eq!(
            query.query_string(),
            "title=Alien&status=RELEASED&page=0&size=7"
        );
    }

    #[test]
    fn multi_key_sort_is_comma_joined() {
        let query = MovieQuery::default()
            .sort_by("rating", SortDirection::Descending)
            .sort_by("title", SortDirection::Ascending);
        let pairs = query.to_query_pairs();
        assert_eq!(pairs[0], ("sort", "-rating,title".to_string()));
    }

    #[test]
    fn comment_scope() {
        assert_eq!(CommentQuery::default().scope(), None);
        assert_eq!(
            CommentQuery::for_movie("27205").scope(),
            Some(CommentScope::Movie("27205"))
        );
        assert_eq!(
            CommentQuery::for_user("a@b.com").scope(),
            Some(CommentScope::User("a@b.com"))
        );

        let mut blank = CommentQuery::for_movie("");
        assert_eq!(blank.scope(), None);
        blank.filter.user = Some("a@b.com".to_string());
        assert_eq!(blank.scope(), Some(CommentScope::User("a@b.com")));
    }

    #[test]
    fn movie_wins_when_both_are_set() {
        let mut query = CommentQuery::for_user("a@b.com");
        query.filter.movie = Some("1".to_string());
        assert_eq!(query.scope(), Some(CommentScope::Movie("1")));
    }

    #[test]
    fn comment_query_defaults() {
        assert_eq!(
            CommentQuery::for_movie("1").query_string(),
            "page=0&size=3"
        );
    }

    #[test]
    fn with_page_keeps_everything_else() {
        let query = MovieQuery::default().genre("Drama").size(5);
        let next = query.with_page(3);
        assert_eq!(next.pagination, Pagination::new(3, 5));
        assert_eq!(next.filter, query.filter);
    }

    #[test]
    fn user_query_pairs() {
        let query = UserQuery::default().name("Ana");
        assert_eq!(query.query_string(), "name=Ana&page=0&size=10");
    }
}
