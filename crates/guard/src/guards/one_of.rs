//! Enum membership guard
//!
//! Narrows input to one of a fixed set of allowed literals. Matching is
//! strict (via [`FromRaw`]): a JSON string `"2"` never matches the integer
//! `2`.

use std::borrow::Cow;
use std::fmt::Display;

use palisade_error::{GuardError, Result};
use serde_json::Value;

use crate::foundation::{FromRaw, Guard};

// ============================================================================
// ONE OF
// ============================================================================

/// Narrows input to a member of an allowed set of literals.
///
/// The failure message lists the allowed set, which is almost always what a
/// caller fixing their request wants to see.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = one_of("sort", ["asc".to_owned(), "desc".to_owned()]);
/// assert_eq!(guard.narrow(&json!("asc")).unwrap(), "asc");
///
/// let err = guard.narrow(&json!("sideways")).unwrap_err();
/// assert_eq!(err.message(), "sort must be one of: asc, desc");
///
/// let statuses = one_of("status", [200_i64, 404, 500]);
/// assert_eq!(statuses.narrow(&json!(404)).unwrap(), 404);
/// assert!(statuses.narrow(&json!("404")).is_err()); // strict: no coercion
/// ```
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    label: Cow<'static, str>,
    allowed: Vec<T>,
}

impl<T> Guard for OneOf<T>
where
    T: FromRaw + PartialEq + Display,
{
    type Input = Value;
    type Output = T;

    fn narrow(&self, input: &Value) -> Result<T> {
        if let Some(value) = T::from_raw(input) {
            if self.allowed.contains(&value) {
                return Ok(value);
            }
        }
        let allowed = self
            .allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(GuardError::bad_input(format!(
            "{} must be one of: {allowed}",
            self.label
        )))
    }
}

/// Creates an enum-membership guard over the given allowed literals.
pub fn one_of<T>(label: impl Into<Cow<'static, str>>, allowed: impl Into<Vec<T>>) -> OneOf<T>
where
    T: FromRaw + PartialEq + Display,
{
    OneOf {
        label: label.into(),
        allowed: allowed.into(),
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
    fn matches_string_literals() {
        let guard = one_of("mode", ["fast".to_owned(), "slow".to_owned()]);
        assert_eq!(guard.narrow(&json!("fast")).unwrap(), "fast");
        assert!(guard.narrow(&json!("medium")).is_err());
    }

    #[test]
    fn matches_integer_literals() {
        let guard = one_of("level", [1_i64, 2, 3]);
        assert_eq!(guard.narrow(&json!(2)).unwrap(), 2);
        assert!(guard.narrow(&json!(4)).is_err());
    }

    #[test]
    fn no_cross_type_coercion() {
        let guard = one_of("level", [1_i64, 2, 3]);
        assert!(guard.narrow(&json!("2")).is_err());

        let guard = one_of("mode", ["1".to_owned()]);
        assert!(guard.narrow(&json!(1)).is_err());
    }

    #[test]
    fn message_lists_the_allowed_set() {
        let guard = one_of("sort", ["asc".to_owned(), "desc".to_owned()]);
        let err = guard.narrow(&json!(null)).unwrap_err();
        assert_eq!(err.message(), "sort must be one of: asc, desc");
    }
}
