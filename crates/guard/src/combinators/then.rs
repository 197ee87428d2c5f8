//! THEN combinator - feeds one guard's output into the next.

use palisade_error::Result;

use crate::foundation::Guard;

// ============================================================================
// THEN COMBINATOR
// ============================================================================

/// Chains two guards: the first narrows the raw input, the second narrows
/// the first's output.
///
/// This is the narrowing pipeline: parse, then constrain what was parsed.
/// Either stage's error propagates unchanged.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// // Parse a JSON payload, then require it to be a numeric array.
/// let guard = parse_json("body").and_then(number_array("body"));
/// assert_eq!(guard.narrow(&json!("[1, 2]")).unwrap(), vec![1.0, 2.0]);
/// assert!(guard.narrow(&json!("{}")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Then<F, S> {
    pub(crate) first: F,
    pub(crate) second: S,
}

impl<F, S> Then<F, S> {
    /// Creates a new THEN combinator.
    pub fn new(first: F, second: S) -> Self {
        Self { first, second }
    }

    /// Decomposes the combinator into its parts.
    pub fn into_parts(self) -> (F, S) {
        (self.first, self.second)
    }
}

impl<F, S> Guard for Then<F, S>
where
    F: Guard,
    S: Guard<Input = F::Output>,
{
    type Input = F::Input;
    type Output = S::Output;

    fn narrow(&self, input: &Self::Input) -> Result<Self::Output> {
        let mid = self.first.narrow(input)?;
        self.second.narrow(&mid)
    }
}

// ============================================================================
// TESTS
// ============================================================================
