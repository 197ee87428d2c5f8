//! String guards
//!
//! Guards that narrow raw input into trimmed strings, with optional length
//! and pattern constraints. All of them trim leading/trailing whitespace
//! first: boundary input (query parameters, form fields) routinely arrives
//! padded, and no caller has ever wanted the padding.
//!
//! Length is measured in Unicode scalar values (chars) by default; use the
//! `.bytes()` builder when the bound protects storage rather than text.

use std::borrow::Cow;
use std::sync::LazyLock;

use palisade_error::{GuardError, Result};
use regex::Regex;
use serde_json::Value;

use crate::foundation::Guard;

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
    )
    .expect("uuid pattern is valid")
});

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Narrows to a trimmed string, rejecting anything that is not a string.
fn narrow_trimmed(label: &str, input: &Value) -> Result<String> {
    match input {
        Value::String(s) => Ok(s.trim().to_owned()),
        _ => Err(GuardError::bad_input(format!("{label} must be a string"))),
    }
}

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// TRIMMED
// ============================================================================

/// Narrows any input to a whitespace-trimmed string.
///
/// Fails with Bad Input when the value is not a string; coercion from
/// numbers or booleans would hide a caller error.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = trimmed("name");
/// assert_eq!(guard.narrow(&json!("  ada ")).unwrap(), "ada");
/// assert!(guard.narrow(&json!(42)).unwrap_err().is_bad_input());
/// ```
#[derive(Debug, Clone)]
pub struct Trimmed {
    label: Cow<'static, str>,
}

impl Guard for Trimmed {
    type Input = Value;
    type Output = String;

    fn narrow(&self, input: &Value) -> Result<String> {
        narrow_trimmed(&self.label, input)
    }
}

/// Creates a trimmed-string guard.
pub fn trimmed(label: impl Into<Cow<'static, str>>) -> Trimmed {
    Trimmed {
        label: label.into(),
    }
}

// ============================================================================
// NON-EMPTY
// ============================================================================

/// Narrows to a trimmed string that is non-empty after trimming.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = non_empty("title");
/// assert_eq!(guard.narrow(&json!(" x ")).unwrap(), "x");
/// assert!(guard.narrow(&json!("   ")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NonEmpty {
    label: Cow<'static, str>,
}

impl Guard for NonEmpty {
    type Input = Value;
    type Output = String;

    fn narrow(&self, input: &Value) -> Result<String> {
        let s = narrow_trimmed(&self.label, input)?;
        if s.is_empty() {
            return Err(GuardError::bad_input(format!(
                "{} must not be empty",
                self.label
            )));
        }
        Ok(s)
    }
}

/// Creates a non-empty-string guard.
pub fn non_empty(label: impl Into<Cow<'static, str>>) -> NonEmpty {
    NonEmpty {
        label: label.into(),
    }
}

// ============================================================================
// BOUNDED LENGTH
// ============================================================================

/// Narrows to a trimmed string whose length lies within `[min, max]`.
///
/// Absent bounds mean no constraint: a fresh `bounded_length` guard accepts
/// every string.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = bounded_length("nickname").min(2).max(12);
/// assert_eq!(guard.narrow(&json!("ada")).unwrap(), "ada");
/// assert!(guard.narrow(&json!("a")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BoundedLength {
    label: Cow<'static, str>,
    min: Option<usize>,
    max: Option<usize>,
    mode: LengthMode,
}

impl BoundedLength {
    /// Sets the minimum length (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum length (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Counts bytes instead of Unicode chars.
    #[must_use = "builder methods must be chained or built"]
    pub fn bytes(mut self) -> Self {
        self.mode = LengthMode::Bytes;
        self
    }
}

impl Guard for BoundedLength {
    type Input = Value;
    type Output = String;

    fn narrow(&self, input: &Value) -> Result<String> {
        let s = narrow_trimmed(&self.label, input)?;
        let len = self.mode.measure(&s);
        if let Some(min) = self.min {
            if len < min {
                return Err(GuardError::bad_input(format!(
                    "{} length must be >= {min}",
                    self.label
                )));
            }
        }
        if let Some(max) = self.max {
            if len > max {
                return Err(GuardError::bad_input(format!(
                    "{} length must be <= {max}",
                    self.label
                )));
            }
        }
        Ok(s)
    }
}

/// Creates a length-bounded string guard (no bounds until set).
pub fn bounded_length(label: impl Into<Cow<'static, str>>) -> BoundedLength {
    BoundedLength {
        label: label.into(),
        min: None,
        max: None,
        mode: LengthMode::Chars,
    }
}

// ============================================================================
// MATCHES
// ============================================================================

/// Narrows to a trimmed string matching a regular expression.
///
/// An optional hint is appended to the failure message so callers can say
/// *what shape* was expected without leaking the pattern itself.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = matches("sku", r"^[A-Z]{3}-\d{4}$").unwrap().hint("ABC-1234");
/// assert!(guard.narrow(&json!("XYZ-0001")).is_ok());
///
/// let err = guard.narrow(&json!("nope")).unwrap_err();
/// assert_eq!(err.message(), "sku invalid (ABC-1234)");
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    label: Cow<'static, str>,
    pattern: Regex,
    hint: Option<Cow<'static, str>>,
}

impl Matches {
    /// Attaches a hint describing the expected shape.
    #[must_use = "builder methods must be chained or built"]
    pub fn hint(mut self, hint: impl Into<Cow<'static, str>>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Guard for Matches {
    type Input = Value;
    type Output = String;

    fn narrow(&self, input: &Value) -> Result<String> {
        let s = narrow_trimmed(&self.label, input)?;
        if self.pattern.is_match(&s) {
            Ok(s)
        } else {
            Err(GuardError::bad_input(match &self.hint {
                Some(hint) => format!("{} invalid ({hint})", self.label),
                None => format!("{} invalid", self.label),
            }))
        }
    }
}

/// Creates a pattern-matching string guard.
///
/// Fails if the pattern itself does not compile.
pub fn matches(
    label: impl Into<Cow<'static, str>>,
    pattern: &str,
) -> std::result::Result<Matches, regex::Error> {
    Ok(Matches {
        label: label.into(),
        pattern: Regex::new(pattern)?,
        hint: None,
    })
}

// ============================================================================
// PRESETS
// ============================================================================

/// Creates a UUID guard (v1-v5 shape, case-insensitive).
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = uuid("id");
/// assert!(guard.narrow(&json!("f47ac10b-58cc-4372-a567-0e02b2c3d479")).is_ok());
/// assert!(guard.narrow(&json!("not-a-uuid")).is_err());
/// ```
pub fn uuid(label: impl Into<Cow<'static, str>>) -> Matches {
    Matches {
        label: label.into(),
        pattern: UUID_REGEX.clone(),
        hint: Some(Cow::Borrowed("uuid v4")),
    }
}

/// Creates a basic email guard.
///
/// The pattern is intentionally loose (something@somewhere.tld), because
/// the only authoritative email validator is a delivery attempt.
pub fn email(label: impl Into<Cow<'static, str>>) -> Matches {
    Matches {
        label: label.into(),
        pattern: EMAIL_REGEX.clone(),
        hint: None,
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
    fn trimmed_strips_whitespace() {
        let guard = trimmed("name");
        assert_eq!(guard.narrow(&json!("  a b  ")).unwrap(), "a b");
    }

    #[test]
    fn trimmed_rejects_non_strings() {
        let guard = trimmed("name");
        for raw in [json!(1), json!(true), json!(null), json!([]), json!({})] {
            let err = guard.narrow(&raw).unwrap_err();
            assert!(err.is_bad_input());
            assert_eq!(err.message(), "name must be a string");
        }
    }

    #[test]
    fn non_empty_rejects_whitespace_only() {
        let guard = non_empty("title");
        assert!(guard.narrow(&json!("")).is_err());
        assert!(guard.narrow(&json!("   ")).is_err());
        assert_eq!(guard.narrow(&json!(" x ")).unwrap(), "x");
    }

    #[test]
    fn bounded_length_defaults_to_unbounded() {
        let guard = bounded_length("free");
        assert!(guard.narrow(&json!("")).is_ok());
        assert!(guard.narrow(&json!("anything at all")).is_ok());
    }

    #[test]
    fn bounded_length_enforces_bounds() {
        let guard = bounded_length("nick").min(2).max(4);
        assert!(guard.narrow(&json!("a")).is_err());
        assert!(guard.narrow(&json!("abcd")).is_ok());
        assert!(guard.narrow(&json!("abcde")).is_err());
    }

    #[test]
    fn bounded_length_measures_after_trim() {
        let guard = bounded_length("nick").max(3);
        // "  abc  " trims to "abc", within bounds.
        assert_eq!(guard.narrow(&json!("  abc  ")).unwrap(), "abc");
    }

    #[test]
    fn bounded_length_counts_chars_by_default() {
        let guard = bounded_length("emoji").max(2);
        assert!(guard.narrow(&json!("\u{1f44b}\u{1f30d}")).is_ok()); // 2 chars, 8 bytes

        let byte_guard = bounded_length("emoji").max(2).bytes();
        assert!(byte_guard.narrow(&json!("\u{1f44b}\u{1f30d}")).is_err());
    }

    #[test]
    fn matches_uses_hint_in_message() {
        let guard = matches("code", r"^\d{3}$").unwrap().hint("three digits");
        let err = guard.narrow(&json!("12")).unwrap_err();
        assert_eq!(err.message(), "code invalid (three digits)");

        let bare = matches("code", r"^\d{3}$").unwrap();
        let err = bare.narrow(&json!("12")).unwrap_err();
        assert_eq!(err.message(), "code invalid");
    }

    #[test]
    fn matches_rejects_bad_pattern_at_construction() {
        assert!(matches("x", "(unclosed").is_err());
    }

    #[test]
    fn uuid_accepts_canonical_forms() {
        let guard = uuid("id");
        assert!(
            guard
                .narrow(&json!("f47ac10b-58cc-4372-a567-0e02b2c3d479"))
                .is_ok()
        );
        assert!(
            guard
                .narrow(&json!("F47AC10B-58CC-4372-A567-0E02B2C3D479"))
                .is_ok()
        );
    }

    #[test]
    fn uuid_rejects_malformed() {
        let guard = uuid("id");
        assert!(guard.narrow(&json!("f47ac10b58cc4372a5670e02b2c3d479")).is_err());
        assert!(guard.narrow(&json!("f47ac10b-58cc-0372-a567-0e02b2c3d479")).is_err()); // version 0
        assert!(guard.narrow(&json!("")).is_err());
    }

    #[test]
    fn email_accepts_plausible_addresses() {
        let guard = email("email");
        assert_eq!(
            guard.narrow(&json!(" user@example.com ")).unwrap(),
            "user@example.com"
        );
    }

    #[test]
    fn email_rejects_obviously_wrong() {
        let guard = email("email");
        assert!(guard.narrow(&json!("user@")).is_err());
        assert!(guard.narrow(&json!("@example.com")).is_err());
        assert!(guard.narrow(&json!("user example.com")).is_err());
        assert!(guard.narrow(&json!("user@nodot")).is_err());
    }
}
