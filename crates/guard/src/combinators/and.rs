//! AND combinator - both guards inspect the same input.

use palisade_error::Result;

use crate::foundation::Guard;

// ============================================================================
// AND COMBINATOR
// ============================================================================

/// Runs two guards against the same input; both must pass.
///
/// Evaluates left-to-right, short-circuits on the first failure, and
/// returns the right guard's output. Either side's error propagates
/// unchanged.
///
/// Built for stacking structural checks:
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
///
/// let guard = non_empty_array::<i64>("ids").and(unique("ids"));
/// assert!(guard.narrow(&[1, 2, 3]).is_ok());
/// assert!(guard.narrow(&[]).is_err());        // fails non-emptiness
/// assert!(guard.narrow(&[1, 1]).is_err());    // fails uniqueness
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new AND combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left guard.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right guard.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Decomposes the combinator into its parts.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Guard for And<L, R>
where
    L: Guard,
    R: Guard<Input = L::Input>,
{
    type Input = L::Input;
    type Output = R::Output;

    fn narrow(&self, input: &Self::Input) -> Result<Self::Output> {
        // Short-circuit: if left fails, don't run right.
        self.left.narrow(input)?;
        self.right.narrow(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::GuardExt;
    use crate::guards::{non_empty, trimmed};
    use serde_json::json;

    #[test]
    fn both_sides_must_pass() {
        let guard = trimmed("s").and(non_empty("s"));
        assert_eq!(guard.narrow(&json!(" x ")).unwrap(), "x");
        assert!(guard.narrow(&json!("  ")).is_err());
        assert!(guard.narrow(&json!(7)).is_err());
    }

    #[test]
    fn left_error_propagates_unchanged() {
        let guard = trimmed("field").and(non_empty("field"));
        let err = guard.narrow(&json!(7)).unwrap_err();
        assert_eq!(err.message(), "field must be a string");
    }

    #[test]
    fn into_parts_round_trips() {
        let guard = And::new(trimmed("a"), non_empty("b"));
        let (left, right) = guard.into_parts();
        assert!(left.narrow(&json!("x")).is_ok());
        assert!(right.narrow(&json!("x")).is_ok());
    }
}
