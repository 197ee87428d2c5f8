//! Collection shape combinators
//!
//! Structural constraints over already-parsed slices: non-emptiness and
//! uniqueness. These guards have `Output = ()`; the caller's own binding
//! is the validated array, and element-level validation is applied
//! separately per element (see [`each`](crate::combinators::each::each)).

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use palisade_error::{GuardError, Result};

use crate::foundation::Guard;

// ============================================================================
// NON-EMPTY ARRAY
// ============================================================================

/// Validates that a slice has at least one element.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
///
/// let guard = non_empty_array::<i64>("ids");
/// assert!(guard.narrow(&[1]).is_ok());
///
/// let err = guard.narrow(&[]).unwrap_err();
/// assert_eq!(err.message(), "ids must be a non-empty array");
/// ```
#[derive(Debug, Clone)]
pub struct NonEmptyArray<T> {
    label: Cow<'static, str>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Guard for NonEmptyArray<T> {
    type Input = [T];
    type Output = ();

    fn narrow(&self, input: &[T]) -> Result<()> {
        if input.is_empty() {
            return Err(GuardError::bad_input(format!(
                "{} must be a non-empty array",
                self.label
            )));
        }
        Ok(())
    }
}

/// Creates a non-empty-array guard.
pub fn non_empty_array<T>(label: impl Into<Cow<'static, str>>) -> NonEmptyArray<T> {
    NonEmptyArray {
        label: label.into(),
        _phantom: PhantomData,
    }
}

// ============================================================================
// UNIQUE
// ============================================================================

/// Validates that all elements of a slice are distinct.
///
/// The seen-set is freshly allocated per call; detection order is the slice
/// order, and the error does not identify which element duplicated.
///
/// For non-primitive element types, use [`unique_by`] with an explicit key
/// function instead of relying on element equality.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
///
/// let guard = unique("ids");
/// assert!(guard.narrow(&[1, 2, 3]).is_ok());
/// assert!(guard.narrow(&[1, 2, 2, 3]).unwrap_err().is_bad_input());
/// ```
#[derive(Debug, Clone)]
pub struct Unique<T> {
    label: Cow<'static, str>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Guard for Unique<T>
where
    T: Hash + Eq,
{
    type Input = [T];
    type Output = ();

    fn narrow(&self, input: &[T]) -> Result<()> {
        let mut seen = HashSet::with_capacity(input.len());
        for item in input {
            if !seen.insert(item) {
                return Err(GuardError::bad_input(format!(
                    "{} contains duplicates",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

/// Creates a uniqueness guard keyed by the elements themselves.
pub fn unique<T>(label: impl Into<Cow<'static, str>>) -> Unique<T>
where
    T: Hash + Eq,
{
    Unique {
        label: label.into(),
        _phantom: PhantomData,
    }
}

// ============================================================================
// UNIQUE BY
// ============================================================================

/// Validates uniqueness under an explicit key-extraction function.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
///
/// struct User { id: u64, name: &'static str }
///
/// let users = [User { id: 1, name: "a" }, User { id: 2, name: "b" }];
/// let guard = unique_by("users", |u: &User| u.id);
/// assert!(guard.narrow(&users).is_ok());
///
/// let dupes = [User { id: 1, name: "a" }, User { id: 1, name: "b" }];
/// assert!(guard.narrow(&dupes).is_err());
/// ```
#[derive(Clone)]
pub struct UniqueBy<T, F> {
    label: Cow<'static, str>,
    key: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> fmt::Debug for UniqueBy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueBy")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<T, K, F> Guard for UniqueBy<T, F>
where
    F: Fn(&T) -> K,
    K: Hash + Eq,
{
    type Input = [T];
    type Output = ();

    fn narrow(&self, input: &[T]) -> Result<()> {
        let mut seen = HashSet::with_capacity(input.len());
        for item in input {
            if !seen.insert((self.key)(item)) {
                return Err(GuardError::bad_input(format!(
                    "{} contains duplicates",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

/// Creates a uniqueness guard with an explicit key function.
pub fn unique_by<T, K, F>(label: impl Into<Cow<'static, str>>, key: F) -> UniqueBy<T, F>
where
    F: Fn(&T) -> K,
    K: Hash + Eq,
{
    UniqueBy {
        label: label.into(),
        key,
        _phantom: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::GuardExt;

    #[test]
    fn non_empty_array_rejects_empty() {
        let guard = non_empty_array::<String>("tags");
        let empty: [String; 0] = [];
        assert!(guard.narrow(&empty).is_err());
        assert!(guard.narrow(&["x".to_owned()]).is_ok());
    }

    #[test]
    fn unique_detects_the_first_duplicate() {
        let guard = unique("ids");
        assert!(guard.narrow(&[1, 2, 2, 3]).is_err());
        assert!(guard.narrow(&[1, 2, 3]).is_ok());
    }

    #[test]
    fn unique_works_on_strings() {
        let guard = unique("names");
        let names = ["a".to_owned(), "b".to_owned(), "a".to_owned()];
        let err = guard.narrow(&names).unwrap_err();
        assert_eq!(err.message(), "names contains duplicates");
    }

    #[test]
    fn unique_allocates_fresh_state_per_call() {
        let guard = unique("ids");
        // A failing call must not poison the next one.
        assert!(guard.narrow(&[1, 1]).is_err());
        assert!(guard.narrow(&[1, 2]).is_ok());
    }

    #[test]
    fn unique_by_uses_the_key_function() {
        let guard = unique_by("pairs", |p: &(i64, &str)| p.0);
        assert!(guard.narrow(&[(1, "a"), (2, "a")]).is_ok());
        assert!(guard.narrow(&[(1, "a"), (1, "b")]).is_err());
    }

    #[test]
    fn shape_checks_stack_with_and() {
        let guard = non_empty_array::<i64>("ids").and(unique("ids"));
        assert!(guard.narrow(&[1, 2]).is_ok());

        let err = guard.narrow(&[]).unwrap_err();
        assert_eq!(err.message(), "ids must be a non-empty array");

        let err = guard.narrow(&[5, 5]).unwrap_err();
        assert_eq!(err.message(), "ids contains duplicates");
    }
}
