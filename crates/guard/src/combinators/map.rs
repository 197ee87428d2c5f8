//! MAP combinator - transforms a guard's output.

use palisade_error::Result;

use crate::foundation::Guard;

// ============================================================================
// MAP COMBINATOR
// ============================================================================

/// Transforms the narrowed output with an infallible function.
///
/// Validation stays in the inner guard; `Map` is for shaping the result
/// (wrapping in a newtype, extracting a field) once narrowing succeeded.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// struct PageNumber(i64);
///
/// let guard = to_int("page").min(1).map(PageNumber);
/// let page = guard.narrow(&json!("3")).unwrap();
/// assert_eq!(page.0, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Map<G, F> {
    pub(crate) inner: G,
    pub(crate) mapper: F,
}

impl<G, F> Map<G, F> {
    /// Creates a new MAP combinator.
    pub fn new(inner: G, mapper: F) -> Self {
        Self { inner, mapper }
    }

    /// Returns a reference to the inner guard.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G, F, U> Guard for Map<G, F>
where
    G: Guard,
    F: Fn(G::Output) -> U,
{
    type Input = G::Input;
    type Output = U;

    fn narrow(&self, input: &Self::Input) -> Result<U> {
        self.inner.narrow(input).map(|value| (self.mapper)(value))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Guard, GuardExt};
    use crate::guards::{to_int, trimmed};
    use serde_json::json;

    #[test]
    fn transforms_on_success() {
        let guard = to_int("n").map(|n| n * 2);
        assert_eq!(guard.narrow(&json!("21")).unwrap(), 42);
    }

    #[test]
    fn error_passes_through_untouched() {
        let guard = trimmed("name").map(|s| s.len());
        let err = guard.narrow(&json!(1)).unwrap_err();
        assert_eq!(err.message(), "name must be a string");
    }
}
