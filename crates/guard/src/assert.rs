//! Assertion primitives
//!
//! Small checks that classify failures without narrowing a value. They
//! exist for the gaps between guards: relations the type system cannot see
//! (`invariant`), and optional values that must be present from here on
//! (`expect_present` / `require_present`).

use std::borrow::Cow;
use std::fmt::Debug;

use palisade_error::{GuardError, Result};

/// Fails with an **Internal** error when `condition` is false.
///
/// This asserts a contract of our own logic, not a property of caller
/// data, which is why it is the one primitive in the engine that produces
/// the Internal kind.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::assert::invariant;
///
/// fn checkout(cart_len: usize, reserved: usize) -> palisade_error::Result<()> {
///     invariant(reserved <= cart_len, "reserved more items than the cart holds")?;
///     Ok(())
/// }
///
/// assert!(checkout(2, 2).is_ok());
/// assert!(checkout(1, 2).unwrap_err().is_internal());
/// ```
pub fn invariant(condition: bool, message: impl Into<Cow<'static, str>>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(GuardError::internal(message))
    }
}

/// Narrows `Option<T>` to `T`, failing with **Bad Input** on `None`.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::assert::expect_present;
///
/// let value = expect_present(Some(5), "count is required").unwrap();
/// assert_eq!(value, 5);
///
/// let err = expect_present(None::<i64>, "count is required").unwrap_err();
/// assert!(err.is_bad_input());
/// ```
pub fn expect_present<T>(value: Option<T>, message: impl Into<Cow<'static, str>>) -> Result<T> {
    value.ok_or_else(|| GuardError::bad_input(message))
}

/// Checks that an `Option` is `Some` without consuming it.
///
/// The non-consuming sibling of [`expect_present`], for control flow that
/// must keep using the original binding.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::assert::require_present;
///
/// let maybe = Some("cached".to_owned());
/// require_present(&maybe, "cache entry is required").unwrap();
/// // `maybe` is still usable here.
/// assert_eq!(maybe.unwrap(), "cached");
/// ```
pub fn require_present<T>(
    value: &Option<T>,
    message: impl Into<Cow<'static, str>>,
) -> Result<()> {
    if value.is_some() {
        Ok(())
    } else {
        Err(GuardError::bad_input(message))
    }
}

/// Diverges on a value that a closed set of cases should have covered.
///
/// Deliberately unclassified: reaching this is a defect in the calling
/// code's own exhaustiveness over data-driven cases (a tag from a config
/// file, a column value), not a data problem. So it panics with the
/// stringified value rather than returning a [`GuardError`].
///
/// # Examples
///
/// ```rust,should_panic
/// use palisade_guard::assert::assert_never;
///
/// let tag = "frobnicate";
/// match tag {
///     "create" | "delete" => {}
///     other => assert_never(other, "unexpected operation tag"),
/// }
/// ```
pub fn assert_never<T: Debug>(value: T, message: &str) -> ! {
    panic!("{message}: {value:?}")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_passes_on_true() {
        assert!(invariant(true, "unused").is_ok());
    }

    #[test]
    fn invariant_is_internal_on_false() {
        let err = invariant(false, "totals diverged").unwrap_err();
        assert!(err.is_internal());
        assert_eq!(err.message(), "totals diverged");
    }

    #[test]
    fn expect_present_unwraps() {
        assert_eq!(expect_present(Some(1), "m").unwrap(), 1);
    }

    #[test]
    fn expect_present_is_bad_input_on_none() {
        let err = expect_present(None::<()>, "id is required").unwrap_err();
        assert!(err.is_bad_input());
        assert_eq!(err.message(), "id is required");
    }

    #[test]
    fn require_present_leaves_the_binding_alone() {
        let maybe = Some(7);
        assert!(require_present(&maybe, "m").is_ok());
        assert_eq!(maybe, Some(7));

        assert!(require_present(&None::<i64>, "m").is_err());
    }

    #[test]
    #[should_panic(expected = "unexpected kind: \"weird\"")]
    fn assert_never_panics_with_the_value() {
        assert_never("weird", "unexpected kind");
    }
}
