//! Date range combinator - two raw inputs, one ordered pair out.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use palisade_error::{GuardError, Result};
use serde_json::Value;

use crate::guards::date::date_or_null;

// ============================================================================
// DATE SPAN
// ============================================================================

/// An ordered pair of UTC datetimes: `start <= end` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Inclusive upper bound.
    pub end: DateTime<Utc>,
}

// ============================================================================
// DATE RANGE
// ============================================================================

/// Narrows two raw inputs into a [`DateSpan`].
///
/// Each input goes through the lenient date parser independently, but here
/// both are *required*: an absent or unparsable bound is Bad Input, unlike
/// the lenient [`date_or_null`] alone. A start after the end is Bad Input
/// too.
///
/// This takes two inputs, so it is a plain method rather than a
/// [`Guard`](crate::foundation::Guard) implementation; the pair signature
/// is part of the contract.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let range = date_range();
/// let span = range
///     .narrow(&json!("2024-01-01"), &json!("2024-01-10"))
///     .unwrap();
/// assert!(span.start <= span.end);
///
/// let err = range
///     .narrow(&json!("2024-01-10"), &json!("2024-01-01"))
///     .unwrap_err();
/// assert!(err.is_bad_input());
/// ```
#[derive(Debug, Clone)]
pub struct DateRange {
    start_label: Cow<'static, str>,
    end_label: Cow<'static, str>,
}

impl DateRange {
    /// Creates a date-range combinator with the default labels
    /// `start` / `end`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_label: Cow::Borrowed("start"),
            end_label: Cow::Borrowed("end"),
        }
    }

    /// Creates a date-range combinator with custom labels.
    #[must_use]
    pub fn labeled(
        start_label: impl Into<Cow<'static, str>>,
        end_label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            start_label: start_label.into(),
            end_label: end_label.into(),
        }
    }

    /// Narrows the pair of raw bounds into a [`DateSpan`].
    pub fn narrow(&self, start_raw: &Value, end_raw: &Value) -> Result<DateSpan> {
        let (Some(start), Some(end)) = (date_or_null(start_raw), date_or_null(end_raw)) else {
            return Err(GuardError::bad_input(format!(
                "both {} and {} are required",
                self.start_label, self.end_label
            )));
        };
        if start > end {
            return Err(GuardError::bad_input(format!(
                "{} must be <= {}",
                self.start_label, self.end_label
            )));
        }
        Ok(DateSpan { start, end })
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a date-range combinator with the default labels.
#[must_use]
pub fn date_range() -> DateRange {
    DateRange::new()
}

/// Creates a date-range combinator with custom labels.
#[must_use]
pub fn date_range_labeled(
    start_label: impl Into<Cow<'static, str>>,
    end_label: impl Into<Cow<'static, str>>,
) -> DateRange {
    DateRange::labeled(start_label, end_label)
}

// ============================================================================
// TESTS
// ============================================================================
