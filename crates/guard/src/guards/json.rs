//! JSON payload guards
//!
//! Guards over JSON-encoded strings. The parse guard enforces a byte
//! ceiling on the raw string *before* parsing: the bound exists to cap
//! parse cost on adversarially large input, so checking it after the fact
//! would defeat it.

use std::borrow::Cow;

use palisade_error::{GuardError, Result};
use serde_json::Value;

use crate::foundation::Guard;
use crate::guards::numeric::parse_f64;

/// Default byte ceiling for JSON parsing (1 MB).
pub const DEFAULT_MAX_BYTES: usize = 1_000_000;

// ============================================================================
// PARSE JSON
// ============================================================================

/// Parses a JSON-encoded string into a [`Value`], up to a byte ceiling.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = parse_json("payload");
/// let parsed = guard.narrow(&json!(r#"{"a": 1}"#)).unwrap();
/// assert_eq!(parsed["a"], 1);
///
/// let tiny = parse_json("payload").max_bytes(4);
/// assert!(tiny.narrow(&json!("[1,2,3]")).unwrap_err().is_bad_input());
/// ```
#[derive(Debug, Clone)]
pub struct ParseJson {
    label: Cow<'static, str>,
    max_bytes: usize,
}

impl ParseJson {
    /// Sets the byte ceiling checked before parsing.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl Guard for ParseJson {
    type Input = Value;
    type Output = Value;

    fn narrow(&self, input: &Value) -> Result<Value> {
        let Value::String(raw) = input else {
            return Err(GuardError::bad_input(format!(
                "{} must be a JSON string",
                self.label
            )));
        };
        // Size check on the raw text, before any parse work happens.
        if raw.len() > self.max_bytes {
            return Err(GuardError::bad_input(format!(
                "{} too large",
                self.label
            )));
        }
        serde_json::from_str(raw)
            .map_err(|_| GuardError::bad_input(format!("{} is not valid JSON", self.label)))
    }
}

/// Creates a JSON-parsing guard with the default byte ceiling.
pub fn parse_json(label: impl Into<Cow<'static, str>>) -> ParseJson {
    ParseJson {
        label: label.into(),
        max_bytes: DEFAULT_MAX_BYTES,
    }
}

// ============================================================================
// NUMBER ARRAY
// ============================================================================

/// Narrows a JSON-encoded string or an array to a `Vec<f64>`.
///
/// Elements coerce the way the numeric guards do: numbers and numeric
/// strings pass, everything else fails.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = number_array("ids");
/// assert_eq!(guard.narrow(&json!("[1, 2, 3]")).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(guard.narrow(&json!([1, "2"])).unwrap(), vec![1.0, 2.0]);
/// assert!(guard.narrow(&json!([1, true])).is_err());
/// assert!(guard.narrow(&json!("not json")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NumberArray {
    label: Cow<'static, str>,
}

impl NumberArray {
    fn expected_array(&self) -> GuardError {
        GuardError::bad_input(format!("invalid {}: expected array", self.label))
    }
}

impl Guard for NumberArray {
    type Input = Value;
    type Output = Vec<f64>;

    fn narrow(&self, input: &Value) -> Result<Vec<f64>> {
        let parsed;
        let items = match input {
            Value::String(raw) => {
                parsed = serde_json::from_str::<Value>(raw)
                    .map_err(|_| self.expected_array())?;
                parsed.as_array().ok_or_else(|| self.expected_array())?
            }
            Value::Array(items) => items,
            _ => return Err(self.expected_array()),
        };
        items
            .iter()
            .map(|item| match item {
                Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
                Value::String(s) => parse_f64(s),
                _ => None,
            })
            .map(|n| {
                n.ok_or_else(|| {
                    GuardError::bad_input(format!(
                        "{} must contain only numbers",
                        self.label
                    ))
                })
            })
            .collect()
    }
}

/// Creates a numeric-array guard.
pub fn number_array(label: impl Into<Cow<'static, str>>) -> NumberArray {
    NumberArray {
        label: label.into(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
