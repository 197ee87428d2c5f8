//! OR-NULL combinator - lets JSON null narrow to `None`.

use palisade_error::Result;
use serde_json::Value;

use crate::foundation::Guard;

// ============================================================================
// OR-NULL COMBINATOR
// ============================================================================

/// Wraps a guard so that JSON `null` narrows to `None` instead of failing.
///
/// Any non-null input still goes through the inner guard, so absence and
/// invalidity remain distinguishable: an invalid value is still Bad Input.
/// Contrast with the deliberately lenient
/// [`date_or_null`](crate::guards::date::date_or_null), which collapses the
/// two on purpose.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = to_int("limit").min(1).or_null();
/// assert_eq!(guard.narrow(&json!(null)).unwrap(), None);
/// assert_eq!(guard.narrow(&json!("25")).unwrap(), Some(25));
/// assert!(guard.narrow(&json!("abc")).is_err()); // invalid is still invalid
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrNull<G> {
    pub(crate) inner: G,
}

impl<G> OrNull<G> {
    /// Creates a new OR-NULL combinator.
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner guard.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Extracts the inner guard.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G> Guard for OrNull<G>
where
    G: Guard<Input = Value>,
{
    type Input = Value;
    type Output = Option<G::Output>;

    fn narrow(&self, input: &Value) -> Result<Self::Output> {
        if input.is_null() {
            Ok(None)
        } else {
            self.inner.narrow(input).map(Some)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Guard, GuardExt};
    use crate::guards::{non_empty, to_bool};
    use serde_json::json;

    #[test]
    fn null_narrows_to_none() {
        let guard = to_bool("flag").or_null();
        assert_eq!(guard.narrow(&json!(null)).unwrap(), None);
    }

    #[test]
    fn non_null_goes_through_the_inner_guard() {
        let guard = non_empty("q").or_null();
        assert_eq!(guard.narrow(&json!(" x ")).unwrap(), Some("x".to_owned()));
        assert!(guard.narrow(&json!("  ")).is_err());
    }

    #[test]
    fn inner_error_propagates_unchanged() {
        let guard = to_bool("flag").or_null();
        let err = guard.narrow(&json!("yes")).unwrap_err();
        assert_eq!(err.message(), "flag must be boolean");
    }
}
