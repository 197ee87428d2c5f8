//! Date guards
//!
//! Two very different temperaments live here:
//!
//! - [`date_or_null`] / [`year_or_null`] are deliberately lenient. They are
//!   built for optional filter fields, where an absent value and an
//!   unparsable value must be indistinguishable to the caller: both narrow
//!   to `None`, and nothing here ever fails.
//! - [`iso_date`] is strict: the literal `YYYY-MM-DD` shape *and* a real
//!   calendar date, or Bad Input.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use palisade_error::{GuardError, Result};
use regex::Regex;
use serde_json::Value;

use crate::foundation::Guard;

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("iso date pattern is valid"));

/// Parses the date spellings boundary input actually uses: RFC 3339,
/// `YYYY-MM-DDTHH:MM:SS`, and bare `YYYY-MM-DD` at UTC midnight.
fn parse_lenient(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN).and_utc());
    }
    None
}

// ============================================================================
// LENIENT HELPERS
// ============================================================================

/// Narrows to a UTC datetime, or `None` for null, empty and unparsable
/// input.
///
/// This is the one deliberate asymmetry in the library: every other guard
/// fails on invalid input, but filter-style date fields want absence and
/// invalidity collapsed together.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::guards::date::date_or_null;
/// use serde_json::json;
///
/// assert!(date_or_null(&json!("2024-03-01")).is_some());
/// assert!(date_or_null(&json!("2024-03-01T10:30:00Z")).is_some());
/// assert!(date_or_null(&json!("")).is_none());
/// assert!(date_or_null(&json!(null)).is_none());
/// assert!(date_or_null(&json!("gibberish")).is_none());
/// ```
#[must_use]
pub fn date_or_null(raw: &Value) -> Option<DateTime<Utc>> {
    let Value::String(s) = raw else {
        return None;
    };
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    parse_lenient(s)
}

/// Narrows to a calendar year, with the same leniency as [`date_or_null`].
///
/// # Examples
///
/// ```rust
/// use palisade_guard::guards::date::year_or_null;
/// use serde_json::json;
///
/// assert_eq!(year_or_null(&json!("2024-03-01")), Some(2024));
/// assert_eq!(year_or_null(&json!("gibberish")), None);
/// ```
#[must_use]
pub fn year_or_null(raw: &Value) -> Option<i32> {
    date_or_null(raw).map(|d| d.year())
}

// ============================================================================
// ISO DATE
// ============================================================================

/// Narrows to a trimmed `YYYY-MM-DD` string that is a real calendar date.
///
/// The pattern check alone would accept `2024-02-30`; the round-trip
/// through the calendar parser is what rejects it.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = iso_date("from");
/// assert_eq!(guard.narrow(&json!("2024-02-29")).unwrap(), "2024-02-29");
/// assert!(guard.narrow(&json!("2024-02-30")).unwrap_err().is_bad_input());
/// assert!(guard.narrow(&json!("2024-2-3")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IsoDate {
    label: Cow<'static, str>,
}

impl Guard for IsoDate {
    type Input = Value;
    type Output = String;

    fn narrow(&self, input: &Value) -> Result<String> {
        let Value::String(s) = input else {
            return Err(GuardError::bad_input(format!(
                "{} must be a string",
                self.label
            )));
        };
        let s = s.trim();
        if !ISO_DATE_REGEX.is_match(s) {
            return Err(GuardError::bad_input(format!(
                "{} must be YYYY-MM-DD",
                self.label
            )));
        }
        if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
            return Err(GuardError::bad_input(format!(
                "{} is not a valid calendar date",
                self.label
            )));
        }
        Ok(s.to_owned())
    }
}

/// Creates a strict ISO calendar-date guard.
pub fn iso_date(label: impl Into<Cow<'static, str>>) -> IsoDate {
    IsoDate {
        label: label.into(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    #[test]
    fn lenient_parses_bare_dates_at_utc_midnight() {
        let d = date_or_null(&json!("2024-01-15")).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 15));
        assert_eq!((d.hour(), d.minute(), d.second()), (0, 0, 0));
    }

    #[test]
    fn lenient_parses_rfc3339() {
        let d = date_or_null(&json!("2024-01-15T10:30:00+02:00")).unwrap();
        assert_eq!(d.hour(), 8); // normalized to UTC
    }

    #[test]
    fn lenient_parses_naive_datetimes() {
        assert!(date_or_null(&json!("2024-01-15T10:30:00")).is_some());
    }

    #[test]
    fn lenient_treats_garbage_as_absence() {
        for raw in [
            json!(null),
            json!(""),
            json!("   "),
            json!("not a date"),
            json!("2024-13-40"),
            json!(1_700_000_000),
            json!([]),
        ] {
            assert_eq!(date_or_null(&raw), None);
        }
    }

    #[test]
    fn year_follows_the_same_leniency() {
        assert_eq!(year_or_null(&json!("1999-12-31")), Some(1999));
        assert_eq!(year_or_null(&json!(null)), None);
        assert_eq!(year_or_null(&json!("99-12-31")), None);
    }

    #[test]
    fn iso_date_requires_the_exact_shape() {
        let guard = iso_date("d");
        assert!(guard.narrow(&json!("2024-1-05")).is_err());
        assert!(guard.narrow(&json!("2024/01/05")).is_err());
        assert!(guard.narrow(&json!("2024-01-05T00:00:00Z")).is_err());

        let err = guard.narrow(&json!("nope")).unwrap_err();
        assert_eq!(err.message(), "d must be YYYY-MM-DD");
    }

    #[test]
    fn iso_date_validates_the_calendar() {
        let guard = iso_date("d");
        assert!(guard.narrow(&json!("2024-02-29")).is_ok()); // leap year
        assert!(guard.narrow(&json!("2023-02-29")).is_err());

        let err = guard.narrow(&json!("2024-02-30")).unwrap_err();
        assert_eq!(err.message(), "d is not a valid calendar date");
    }

    #[test]
    fn iso_date_trims_and_returns_the_string() {
        let guard = iso_date("d");
        assert_eq!(guard.narrow(&json!(" 2024-06-01 ")).unwrap(), "2024-06-01");
    }
}
