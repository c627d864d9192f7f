//! Value formatting shared by every view.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// en-US locale date string, e.g. `3/15/2024`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub const INVALID_DATE: &str = "Invalid Date";

/// Format a number without a trailing `.0` for whole values
pub fn number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Render a timestamp from the API as a local calendar date.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (with a `T` or a space)
/// and plain `YYYY-MM-DD`.
pub fn locale_date(raw: &str, format: &str) -> String {
    let raw = raw.trim();

    let date = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        Some(dt.with_timezone(&Local).date_naive())
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Some(dt.date())
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        Some(dt.date())
    } else {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    };

    let Some(date) = date else {
        return INVALID_DATE.to_string();
    };

    // A bad user-supplied format surfaces as fmt::Error rather than a panic
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.to_string();
    }
    out
}

/// Treat blank strings like absent values
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number(5.0), "5");
        assert_eq!(number(3.25), "3.25");
        assert_eq!(number(0.0), "0");
    }

    #[test]
    fn test_locale_date_formats() {
        // Midday UTC stays on the same calendar day in every common offset
        assert_eq!(locale_date("2024-03-15T12:00:00Z", DEFAULT_DATE_FORMAT), "3/15/2024");
        assert_eq!(
            locale_date("2024-03-15T12:00:00.123456Z", DEFAULT_DATE_FORMAT),
            "3/15/2024"
        );
        assert_eq!(locale_date("2024-11-02T08:30:00", DEFAULT_DATE_FORMAT), "11/2/2024");
        assert_eq!(locale_date("2024-01-09", "%Y-%m-%d"), "2024-01-09");
    }

    #[test]
    fn test_space_separated_datetime() {
        assert_eq!(locale_date("2024-03-15 12:00:00", DEFAULT_DATE_FORMAT), "3/15/2024");
        assert_eq!(locale_date("2024-03-15 08:30:00.250", DEFAULT_DATE_FORMAT), "3/15/2024");
    }

    #[test]
    fn test_unparseable_date() {
        assert_eq!(locale_date("yesterday", DEFAULT_DATE_FORMAT), INVALID_DATE);
        assert_eq!(locale_date("", DEFAULT_DATE_FORMAT), INVALID_DATE);
    }

    #[test]
    fn test_bad_format_falls_back_to_iso() {
        assert_eq!(locale_date("2024-01-09", "%Q"), "2024-01-09");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("x")), Some("x"));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }
}
