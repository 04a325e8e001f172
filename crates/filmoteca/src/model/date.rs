//! Calendar date as the API encodes it.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A day/month/year triple.
///
/// The API sends dates as objects rather than ISO strings, and any part may be
/// missing on partially filled records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Date {
    /// Create a fully specified date.
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |v: Option<String>| v.unwrap_or_else(|| "?".to_string());
        write!(
            f,
            "{}/{}/{}",
            part(self.day.map(|d| d.to_string())),
            part(self.month.map(|m| m.to_string())),
            part(self.year.map(|y| y.to_string()))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_naive_date() {
        let date = Date::from(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(date, Date::new(29, 2, 2024));
    }

    #[test]
    fn partial_date_has_no_calendar_value() {
        let date: Date = serde_json::from_str(r#"{"year": 1999}"#).unwrap();
        assert_eq!(date.year, Some(1999));
        assert!(date.day.is_none());
        assert_eq!(date.to_string(), "?/?/1999");
    }

    #[test]
    fn displays_day_first() {
        assert_eq!(Date::new(10, 10, 2021).to_string(), "10/10/2021");
    }
}
