//! CSV numeric list combinator.

use std::borrow::Cow;

use palisade_error::{GuardError, Result};
use serde_json::Value;

use crate::foundation::Guard;
use crate::guards::numeric::parse_f64;

// ============================================================================
// CSV NUMBERS
// ============================================================================

/// Splits a string on commas and narrows every segment to a finite number.
///
/// Segments are trimmed before coercion. An empty segment (as in `"1,,3"`)
/// is not a number and fails, as does anything else that doesn't coerce.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = csv_numbers("xs");
/// assert_eq!(guard.narrow(&json!("1, 2,3")).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(guard.narrow(&json!("1,,3")).unwrap_err().is_bad_input());
/// ```
#[derive(Debug, Clone)]
pub struct CsvNumbers {
    label: Cow<'static, str>,
}

impl Guard for CsvNumbers {
    type Input = Value;
    type Output = Vec<f64>;

    fn narrow(&self, input: &Value) -> Result<Vec<f64>> {
        let Value::String(raw) = input else {
            return Err(GuardError::bad_input(format!(
                "{} must be a CSV string",
                self.label
            )));
        };
        raw.split(',')
            .map(|segment| {
                parse_f64(segment).ok_or_else(|| {
                    GuardError::bad_input(format!(
                        "{} must contain only numbers",
                        self.label
                    ))
                })
            })
            .collect()
    }
}

/// Creates a CSV numeric-list guard.
pub fn csv_numbers(label: impl Into<Cow<'static, str>>) -> CsvNumbers {
    CsvNumbers {
        label: label.into(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_trims_and_coerces() {
        let guard = csv_numbers("xs");
        assert_eq!(
            guard.narrow(&json!("1, 2,3")).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
        assert_eq!(guard.narrow(&json!(" 4.5 ")).unwrap(), vec![4.5]);
    }

    #[test]
    fn empty_segments_fail() {
        let guard = csv_numbers("xs");
        assert!(guard.narrow(&json!("1,,3")).is_err());
        assert!(guard.narrow(&json!("1,2,")).is_err());
        assert!(guard.narrow(&json!("")).is_err());
    }

    #[test]
    fn non_numeric_segments_fail() {
        let guard = csv_numbers("xs");
        let err = guard.narrow(&json!("1,x,3")).unwrap_err();
        assert_eq!(err.message(), "xs must contain only numbers");
    }

    #[test]
    fn non_string_input_fails() {
        let guard = csv_numbers("xs");
        let err = guard.narrow(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.message(), "xs must be a CSV string");
    }

    #[test]
    fn negative_and_scientific_segments_work() {
        let guard = csv_numbers("xs");
        assert_eq!(
            guard.narrow(&json!("-1,2e2,0.5")).unwrap(),
            vec![-1.0, 200.0, 0.5]
        );
    }
}
