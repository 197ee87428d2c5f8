//! EACH combinator - narrows every element of a slice.

use palisade_error::Result;

use crate::foundation::Guard;

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies an element guard to every element of a slice, collecting the
/// narrowed values.
///
/// Stops at the first failing element; that element's error propagates
/// unchanged, so the label and classification the element guard chose are
/// exactly what the caller sees.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = each(to_int("ids"));
/// let raw = vec![json!(1), json!("2"), json!(3)];
/// assert_eq!(guard.narrow(&raw).unwrap(), vec![1, 2, 3]);
///
/// let raw = vec![json!(1), json!("x")];
/// assert!(guard.narrow(&raw).unwrap_err().is_bad_input());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<G> {
    inner: G,
}

impl<G> Each<G> {
    /// Creates a new EACH combinator.
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// Returns a reference to the element guard.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Extracts the element guard.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G> Guard for Each<G>
where
    G: Guard,
    G::Input: Sized,
{
    type Input = [G::Input];
    type Output = Vec<G::Output>;

    fn narrow(&self, input: &Self::Input) -> Result<Self::Output> {
        let mut out = Vec::with_capacity(input.len());
        for element in input {
            out.push(self.inner.narrow(element)?);
        }
        Ok(out)
    }
}

/// Creates an EACH combinator from an element guard.
pub fn each<G>(guard: G) -> Each<G> {
    Each::new(guard)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::{non_empty, to_int};
    use serde_json::json;

    #[test]
    fn narrows_every_element() {
        let guard = each(non_empty("tags"));
        let raw = vec![json!(" a "), json!("b")];
        assert_eq!(
            guard.narrow(&raw).unwrap(),
            vec!["a".to_owned(), "b".to_owned()]
        );
    }

    #[test]
    fn empty_slice_narrows_to_empty_vec() {
        let guard = each(to_int("ids"));
        assert_eq!(guard.narrow(&[]).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn first_failing_element_error_propagates_unchanged() {
        let guard = each(to_int("ids"));
        let raw = vec![json!(1), json!("x"), json!("also bad")];
        let err = guard.narrow(&raw).unwrap_err();
        assert_eq!(err.message(), "ids must be an integer");
    }
}
