//! Core traits of the guard engine.

use palisade_error::Result;
use serde_json::Value;

// ============================================================================
// GUARD TRAIT
// ============================================================================

/// A labeled, side-effect-free narrowing operation.
///
/// A guard converts a loosely-typed input into one concrete type, or fails
/// with a classified error. The guard value itself is the *configuration*
/// (label plus options), constructed once and applied repeatedly; it holds
/// no mutable state, so a single configuration is safe to share across
/// threads.
///
/// # Type Parameters
///
/// * `Input` - what the guard inspects. Most guards narrow from the
///   permissive [`Value`]; structural combinators work on slices
///   (`?Sized` allows `[T]` and `str`).
/// * `Output` - the narrowed type. Check-only guards (non-emptiness,
///   uniqueness) use `()`: the caller's own binding is the validated value.
///
/// # Contract
///
/// For any guard `g` and input `i`, `g.narrow(&i)` is deterministic,
/// performs no I/O, and either returns a value fully satisfying `Output`
/// or a [`GuardError`](palisade_error::GuardError). Never both, never
/// neither, never a panic.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::foundation::Guard;
/// use palisade_error::{GuardError, Result};
/// use serde_json::Value;
///
/// struct NonZero {
///     label: &'static str,
/// }
///
/// impl Guard for NonZero {
///     type Input = Value;
///     type Output = i64;
///
///     fn narrow(&self, input: &Value) -> Result<i64> {
///         match input.as_i64() {
///             Some(0) | None => Err(GuardError::bad_input(format!(
///                 "{} must be a non-zero integer",
///                 self.label
///             ))),
///             Some(n) => Ok(n),
///         }
///     }
/// }
///
/// let guard = NonZero { label: "offset" };
/// assert_eq!(guard.narrow(&serde_json::json!(7)).unwrap(), 7);
/// assert!(guard.narrow(&serde_json::json!(0)).is_err());
/// ```
pub trait Guard {
    /// The type of input being narrowed.
    ///
    /// `?Sized` so guards can work directly on `[T]` and `str`.
    type Input: ?Sized;

    /// The narrowed type on success.
    type Output;

    /// Applies the guard to a single input.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - the input narrowed to `Output`
    /// * `Err(err)` - a classified failure; the caller-supplied label is
    ///   embedded verbatim in the message
    fn narrow(&self, input: &Self::Input) -> Result<Self::Output>;
}

// ============================================================================
// GUARD EXTENSION TRAIT
// ============================================================================

/// Composition methods, blanket-implemented for every [`Guard`].
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
///
/// // Stack structural checks on the same input:
/// let ids = non_empty_array::<i64>("ids").and(unique("ids"));
/// assert!(ids.narrow(&[1, 2, 3]).is_ok());
///
/// // Feed one guard's output into another:
/// let body = parse_json("body").and_then(number_array("body"));
/// let raw = serde_json::json!("[1, 2, 3]");
/// assert_eq!(body.narrow(&raw).unwrap(), vec![1.0, 2.0, 3.0]);
/// ```
pub trait GuardExt: Guard + Sized {
    /// Runs both guards against the same input; both must pass.
    ///
    /// The second guard's output is returned. Short-circuits on the first
    /// failure, and the failing guard's error propagates unchanged.
    fn and<G>(self, other: G) -> And<Self, G>
    where
        G: Guard<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Feeds this guard's output into the next guard.
    ///
    /// The classic narrowing pipeline: parse, then constrain what was
    /// parsed. Either stage's error propagates unchanged.
    fn and_then<G>(self, next: G) -> Then<Self, G>
    where
        G: Guard<Input = Self::Output>,
    {
        Then::new(self, next)
    }

    /// Transforms the narrowed output with an infallible function.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Lets JSON `null` narrow to `None` instead of failing.
    ///
    /// Any non-null input still goes through the inner guard, so absent and
    /// invalid stay distinguishable, unlike the deliberately lenient date
    /// helpers in [`guards::date`](crate::guards::date).
    fn or_null(self) -> OrNull<Self>
    where
        Self: Guard<Input = Value>,
    {
        OrNull::new(self)
    }
}

// Automatically implement GuardExt for all Guard implementations.
impl<T: Guard> GuardExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// The actual combinator implementations live in `crate::combinators`.

pub use crate::combinators::and::And;
pub use crate::combinators::map::Map;
pub use crate::combinators::or_null::OrNull;
pub use crate::combinators::then::Then;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use palisade_error::GuardError;

    struct AlwaysString;

    impl Guard for AlwaysString {
        type Input = Value;
        type Output = String;

        fn narrow(&self, _input: &Value) -> Result<String> {
            Ok("ok".to_owned())
        }
    }

    struct AlwaysFails;

    impl Guard for AlwaysFails {
        type Input = Value;
        type Output = String;

        fn narrow(&self, _input: &Value) -> Result<String> {
            Err(GuardError::bad_input("always fails"))
        }
    }

    #[test]
    fn guard_trait_narrows() {
        let guard = AlwaysString;
        assert_eq!(guard.narrow(&Value::Null).unwrap(), "ok");
    }

    #[test]
    fn configurations_are_reusable() {
        let guard = AlwaysString;
        let a = guard.narrow(&Value::Null).unwrap();
        let b = guard.narrow(&Value::Null).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn failures_are_classified() {
        let err = AlwaysFails.narrow(&Value::Null).unwrap_err();
        assert!(err.is_bad_input());
    }
}
