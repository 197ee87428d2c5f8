//! The [`GuardError`] type.

use std::borrow::Cow;

use thiserror::Error;

use crate::kind::ErrorKind;

/// A classified validation failure.
///
/// Carries exactly two things: the [`ErrorKind`] a caller branches on, and a
/// human-readable message with the offending field's label embedded
/// verbatim. Guards produce the message; nothing downstream needs schema or
/// field-path tracking to attribute the failure.
///
/// Messages use `Cow<'static, str>` so static text allocates nothing:
///
/// ```rust
/// use palisade_error::GuardError;
///
/// // Static message — zero allocation:
/// let err = GuardError::bad_input("flag must be boolean");
///
/// // Dynamic message — allocates only when needed:
/// let err = GuardError::bad_input(format!("{} must be boolean", "flag"));
/// assert!(err.is_bad_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl GuardError {
    /// Creates an error with an explicit kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Caller-supplied data failed a validation rule.
    #[must_use]
    pub fn bad_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadInput, message)
    }

    /// A referenced entity does not exist.
    #[must_use]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// A contract within our own logic was violated.
    #[must_use]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// The classification a caller branches on.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message, label included.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stable machine code of the kind.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// True for failures attributable to caller-supplied data.
    #[inline]
    #[must_use]
    pub const fn is_bad_input(&self) -> bool {
        self.kind.is_bad_input()
    }

    /// True for lookups that found nothing.
    #[inline]
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.kind.is_not_found()
    }

    /// True for violations of our own contracts.
    #[inline]
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(GuardError::bad_input("x").kind(), ErrorKind::BadInput);
        assert_eq!(GuardError::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(GuardError::internal("x").kind(), ErrorKind::Internal);
    }

    #[test]
    fn display_is_the_message_alone() {
        let err = GuardError::bad_input("age must be an integer");
        assert_eq!(err.to_string(), "age must be an integer");
    }

    #[test]
    fn static_message_does_not_allocate() {
        let err = GuardError::bad_input("static text");
        assert!(matches!(err.message, Cow::Borrowed(_)));
    }

    #[test]
    fn owned_message_is_preserved() {
        let label = "count";
        let err = GuardError::bad_input(format!("{label} must be >= 0"));
        assert_eq!(err.message(), "count must be >= 0");
    }

    #[test]
    fn code_follows_kind() {
        assert_eq!(GuardError::internal("x").code(), "INTERNAL");
    }

    #[test]
    fn implements_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&GuardError::bad_input("x"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_kind_and_message() {
        let err = GuardError::not_found("user 7 does not exist");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "NOT_FOUND",
                "message": "user 7 does not exist",
            })
        );
    }
}
