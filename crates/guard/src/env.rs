//! Environment readers
//!
//! Thin wrappers that pull process configuration through the guard engine.
//! The taxonomy is put to work here: a variable that is not set is a failed
//! lookup (**NotFound**), while a variable that is set to something
//! malformed is **BadInput**. The two call for different reactions at
//! startup (missing deployment config vs. a typo in it).
//!
//! Empty values are treated as absent throughout: `KEY=` in an environment
//! file is someone turning a knob off, not setting it to empty string.

use palisade_error::{GuardError, Result};
use serde_json::Value;

use crate::foundation::Guard;
use crate::guards::to_number;

/// Reads a required variable.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::env::require_env;
///
/// let err = require_env("PALISADE_DOCTEST_UNSET").unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn require_env(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| GuardError::not_found(format!("missing env {key}")))
}

/// Reads an optional variable; unset and empty both count as absent.
#[must_use]
pub fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Reads a required variable and narrows it to a finite number.
///
/// NotFound when the variable is missing; BadInput when it is set but not
/// numeric (narrowed through [`to_number`] with the key as the label).
pub fn env_number(key: &str) -> Result<f64> {
    let raw = require_env(key)?;
    to_number(key.to_owned()).narrow(&Value::String(raw))
}

/// Reads a required comma-separated variable into trimmed segments.
///
/// Empty segments are dropped, so `"a, b,,c"` reads as `["a", "b", "c"]`.
pub fn env_csv(key: &str) -> Result<Vec<String>> {
    require_env(key).map(|v| split_csv(&v))
}

/// Reads an optional comma-separated variable; absent reads as empty.
#[must_use]
pub fn optional_env_csv(key: &str) -> Vec<String> {
    optional_env(key).map(|v| split_csv(&v)).unwrap_or_default()
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
#[allow(unsafe_code)] // tests mutate process env; each test owns a distinct key
mod tests {
    use super::*;

    fn set(key: &str, value: &str) {
        // SAFETY: test-only; no other thread reads this distinct key.
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    fn require_env_reads_set_variables() {
        set("PALISADE_TEST_REQUIRE", "hello");
        assert_eq!(require_env("PALISADE_TEST_REQUIRE").unwrap(), "hello");
    }

    #[test]
    fn require_env_is_not_found_when_unset() {
        let err = require_env("PALISADE_TEST_NEVER_SET").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "missing env PALISADE_TEST_NEVER_SET");
    }

    #[test]
    fn empty_counts_as_absent() {
        set("PALISADE_TEST_EMPTY", "");
        assert!(require_env("PALISADE_TEST_EMPTY").is_err());
        assert_eq!(optional_env("PALISADE_TEST_EMPTY"), None);
    }

    #[test]
    fn env_number_narrows_through_the_guard() {
        set("PALISADE_TEST_PORT", "8080");
        assert_eq!(env_number("PALISADE_TEST_PORT").unwrap(), 8080.0);
    }

    #[test]
    fn env_number_is_bad_input_when_malformed() {
        set("PALISADE_TEST_BAD_PORT", "eight");
        let err = env_number("PALISADE_TEST_BAD_PORT").unwrap_err();
        assert!(err.is_bad_input());
        assert_eq!(err.message(), "PALISADE_TEST_BAD_PORT must be a number");
    }

    #[test]
    fn env_number_is_not_found_when_unset() {
        let err = env_number("PALISADE_TEST_NO_PORT").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn env_csv_splits_and_trims() {
        set("PALISADE_TEST_CSV", "a, b,,c ");
        assert_eq!(
            env_csv("PALISADE_TEST_CSV").unwrap(),
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
        );
    }

    #[test]
    fn optional_env_csv_defaults_to_empty() {
        assert!(optional_env_csv("PALISADE_TEST_NO_CSV").is_empty());
    }
}
