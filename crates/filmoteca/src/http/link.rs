//! `Link` header decoding.
//!
//! The API reports where a page sits in its result set only through the
//! `Link` response header:
//!
//! ```text
//! <http://host/movies?page=2&size=7>; rel="self", <http://host/movies?page=0&size=7>; rel="first", ...
//! ```
//!
//! A page has a successor when its `self` link differs from the `last` link
//! and a predecessor when it differs from the `first` link.

use std::collections::BTreeMap;

/// The relation links of one response, keyed by lowercased relation name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLinks {
    links: BTreeMap<String, String>,
}

impl PageLinks {
    /// Parse the value of one or more `Link` headers.
    ///
    /// Unparseable entries are skipped. When a relation appears twice the
    /// first occurrence is kept.
    pub fn parse(header: &str) -> Self {
        let mut links = BTreeMap::new();

        for entry in split_entries(header) {
            let Some((url, params)) = parse_entry(entry) else {
                continue;
            };
            for rel in relations(params) {
                links
                    .entry(rel.to_ascii_lowercase())
                    .or_insert_with(|| url.to_string());
            }
        }

        Self { links }
    }

    /// Returns the URL for a relation name.
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.links
            .get(&rel.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `self` link.
    pub fn current(&self) -> Option<&str> {
        self.get("self")
    }

    /// The `first` link.
    pub fn first(&self) -> Option<&str> {
        self.get("first")
    }

    /// The `last` link.
    pub fn last(&self) -> Option<&str> {
        self.get("last")
    }

    /// True when the current page is not the last one.
    ///
    /// False when either the `self` or the `last` link is missing.
    pub fn has_next(&self) -> bool {
        matches!((self.current(), self.last()), (Some(current), Some(last)) if current != last)
    }

    /// True when the current page is not the first one.
    ///
    /// False when either the `self` or the `first` link is missing.
    pub fn has_previous(&self) -> bool {
        matches!((self.current(), self.first()), (Some(current), Some(first)) if current != first)
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Split a header value on the commas that separate link entries.
///
/// Commas inside `<...>` (URLs with list-valued query parameters) and inside
/// quoted parameter values do not split.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_url = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' if !in_quotes => in_url = true,
            '>' if !in_quotes => in_url = false,
            '"' if !in_url => in_quotes = !in_quotes,
            ',' if !in_url && !in_quotes => {
                entries.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);

    entries
}

/// Split one entry into its trimmed URL and the raw parameter list.
fn parse_entry(entry: &str) -> Option<(&str, &str)> {
    let entry = entry.trim().strip_prefix('<')?;
    let (url, params) = entry.split_once('>')?;
    Some((url.trim(), params))
}

/// Relation names of a `rel` parameter. A single quoted value may carry
/// several space-separated names.
fn relations(params: &str) -> Vec<&str> {
    params
        .split(';')
        .filter_map(|param| param.split_once('='))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case("rel"))
        .flat_map(|(_, value)| value.trim().trim_matches('"').split_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELF_P2: &str = "http://localhost:8080/movies?page=2&size=7";
    const FIRST: &str = "http://localhost:8080/movies?page=0&size=7";
    const LAST: &str = "http://localhost:8080/movies?page=5&size=7";

    fn header(entries: &[(&str, &str)]) -> String {
        entries
            .iter()
            .map(|(url, rel)| format!("<{url}>; rel=\"{rel}\""))
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let links = PageLinks::parse(&header(&[
            (SELF_P2, "self"),
            (FIRST, "first"),
            (LAST, "last"),
        ]));
        assert!(links.has_next());
        assert!(links.has_previous());
    }

    #[test]
    fn first_page_has_no_previous() {
        let links = PageLinks::parse(&header(&[(FIRST, "self"), (FIRST, "first"), (LAST, "last")]));
        assert!(links.has_next());
        assert!(!links.has_previous());
    }

    #[test]
    fn last_page_has_no_next() {
        let links = PageLinks::parse(&header(&[(LAST, "self"), (FIRST, "first"), (LAST, "last")]));
        assert!(!links.has_next());
        assert!(links.has_previous());
    }

    #[test]
    fn single_page_has_no_neighbours() {
        let links = PageLinks::parse(&header(&[(FIRST, "self"), (FIRST, "first"), (FIRST, "last")]));
        assert!(!links.has_next());
        assert!(!links.has_previous());
    }

    #[test]
    fn order_and_whitespace_do_not_matter() {
        let spaced = format!(
            "  <{LAST}> ;  rel=\"last\" ,\n\t< {SELF_P2} >; rel=\"self\",   <{FIRST}>;rel=\"first\"  "
        );
        let compact = header(&[(SELF_P2, "self"), (FIRST, "first"), (LAST, "last")]);

        let a = PageLinks::parse(&spaced);
        let b = PageLinks::parse(&compact);
        assert_eq!(a, b);
        assert_eq!(a.current(), Some(SELF_P2));
    }

    #[test]
    fn extra_relations_are_tolerated() {
        let links = PageLinks::parse(&header(&[
            ("http://localhost:8080/movies?page=3&size=7", "next"),
            (FIRST, "self"),
            ("http://localhost:8080/movies?page=1&size=7", "prev"),
            (FIRST, "first"),
            ("http://localhost:8080/movies/{id}", "movie"),
            (LAST, "last"),
        ]));
        assert!(links.has_next());
        assert!(!links.has_previous());
        assert_eq!(links.get("movie"), Some("http://localhost:8080/movies/{id}"));
    }

    #[test]
    fn commas_inside_urls_do_not_split() {
        let current = "http://localhost:8080/movies?page=1&sort=-rating,title";
        let first = "http://localhost:8080/movies?page=0&sort=-rating,title";
        let links = PageLinks::parse(&header(&[(current, "self"), (first, "first"), (current, "last")]));
        assert_eq!(links.current(), Some(current));
        assert!(links.has_previous());
        assert!(!links.has_next());
    }

    #[test]
    fn unquoted_and_multi_valued_rel() {
        let links = PageLinks::parse(&format!("<{FIRST}>; rel=\"self first\", <{LAST}>; REL=last"));
        assert_eq!(links.current(), Some(FIRST));
        assert_eq!(links.first(), Some(FIRST));
        assert_eq!(links.last(), Some(LAST));
        assert!(links.has_next());
        assert!(!links.has_previous());
    }

    #[test]
    fn missing_links_mean_no_navigation() {
        assert!(!PageLinks::parse("").has_next());
        assert!(PageLinks::parse("").is_empty());

        let no_self = PageLinks::parse(&header(&[(FIRST, "first"), (LAST, "last")]));
        assert!(!no_self.has_next());
        assert!(!no_self.has_previous());

        let no_last = PageLinks::parse(&header(&[(SELF_P2, "self"), (FIRST, "first")]));
        assert!(!no_last.has_next());
        assert!(no_last.has_previous());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let links = PageLinks::parse(&format!("garbage; rel=\"self\", <{FIRST}>; rel=\"first\""));
        assert!(links.current().is_none());
        assert_eq!(links.first(), Some(FIRST));
    }

    #[test]
    fn first_occurrence_wins() {
        let links = PageLinks::parse(&header(&[(FIRST, "self"), (LAST, "self")]));
        assert_eq!(links.current(), Some(FIRST));
    }
}
