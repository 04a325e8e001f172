//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use filmoteca::model::Date;
use filmoteca::Page;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a labeled field if it has a value.
pub fn optional_field(label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        field(label, value);
    }
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a note on stderr, e.g. for empty results.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print the navigation line under a page of results. Disabled directions
/// are dimmed.
pub fn pager<T>(page: &Page<T>, index: u32) {
    println!("{}", pager_line(page, index));
}

fn pager_line<T>(page: &Page<T>, index: u32) -> String {
    let prev = if page.has_previous {
        "< prev".normal()
    } else {
        "< prev".dimmed()
    };
    let next = if page.has_next {
        "next >".normal()
    } else {
        "next >".dimmed()
    };
    format!("{}   page {}   {}", prev, index + 1, next)
}

/// A rating out of ten as a bar of stars.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(10));
    format!("{}{}", "★".repeat(filled), "☆".repeat(10 - filled))
}

/// The year of a date, or `?`.
pub fn year(date: Option<&Date>) -> String {
    date.and_then(|d| d.year)
        .map(|y| y.to_string())
        .unwrap_or_else(|| "?".to_string())
}
