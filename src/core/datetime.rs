//! Date-key handling and date argument parsing.
//!
//! Completions are keyed by calendar date in the device's local timezone,
//! serialized as `YYYY-MM-DD`. No timezone normalization happens anywhere:
//! "today" always means the local calendar date.

use chrono::{Duration, NaiveDate};

/// Format a calendar date as a `YYYY-MM-DD` date key.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` date key back into a calendar date.
///
/// Returns `None` for malformed keys; callers treat those as absent.
#[must_use]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Parse a user-supplied date argument.
///
/// Supports:
/// - `today`, `yesterday`
/// - `N days ago` (and `1 day ago`)
/// - `YYYY-MM-DD` (ISO format)
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = input.strip_suffix(" days ago").or_else(|| input.strip_suffix(" day ago")) {
        if let Ok(n) = rest.trim().parse::<i64>() {
            if n >= 0 {
                return Some(today - Duration::days(n));
            }
        }
        return None;
    }

    parse_date_key(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key_roundtrip() {
        let d = date(2024, 3, 9);
        assert_eq!(date_key(d), "2024-03-09");
        assert_eq!(parse_date_key("2024-03-09"), Some(d));
    }

    #[test]
    fn test_parse_date_key_rejects_garbage() {
        assert_eq!(parse_date_key("not-a-date"), None);
        assert_eq!(parse_date_key("2024-13-40"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn test_parse_date_arg_relative() {
        let today = date(2024, 6, 15);
        assert_eq!(parse_date_arg("today", today), Some(today));
        assert_eq!(parse_date_arg("Yesterday", today), Some(date(2024, 6, 14)));
        assert_eq!(parse_date_arg("3 days ago", today), Some(date(2024, 6, 12)));
        assert_eq!(parse_date_arg("1 day ago", today), Some(date(2024, 6, 14)));
        assert_eq!(parse_date_arg("0 days ago", today), Some(today));
    }

    #[test]
    fn test_parse_date_arg_iso() {
        let today = date(2024, 6, 15);
        assert_eq!(parse_date_arg("2024-01-02", today), Some(date(2024, 1, 2)));
    }

    #[test]
    fn test_parse_date_arg_invalid() {
        let today = date(2024, 6, 15);
        assert_eq!(parse_date_arg("someday", today), None);
        assert_eq!(parse_date_arg("-2 days ago", today), None);
    }
}
