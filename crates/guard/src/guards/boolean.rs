//! Boolean guard
//!
//! Narrows the handful of boolean spellings that show up in query strings
//! and form posts. Anything outside the recognized set fails: `"yes"`,
//! `"on"` and friends are ambiguous enough that accepting them has caused
//! real bugs elsewhere.

use std::borrow::Cow;

use palisade_error::{GuardError, Result};
use serde_json::Value;

use crate::foundation::Guard;

// ============================================================================
// TO BOOL
// ============================================================================

/// Narrows `true`/`false`, `"true"`/`"false"`, `1`/`0` and `"1"`/`"0"` to a
/// `bool`.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = to_bool("flag");
/// assert!(guard.narrow(&json!(true)).unwrap());
/// assert!(guard.narrow(&json!("1")).unwrap());
/// assert!(!guard.narrow(&json!("0")).unwrap());
/// assert!(guard.narrow(&json!("yes")).unwrap_err().is_bad_input());
/// ```
#[derive(Debug, Clone)]
pub struct ToBool {
    label: Cow<'static, str>,
}

impl Guard for ToBool {
    type Input = Value;
    type Output = bool;

    fn narrow(&self, input: &Value) -> Result<bool> {
        let value = match input {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            Value::Number(n) => match n.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            _ => None,
        };
        value.ok_or_else(|| GuardError::bad_input(format!("{} must be boolean", self.label)))
    }
}

/// Creates a boolean guard.
pub fn to_bool(label: impl Into<Cow<'static, str>>) -> ToBool {
    ToBool {
        label: label.into(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
