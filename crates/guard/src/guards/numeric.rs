//! Numeric guards
//!
//! Guards that coerce boundary input into integers and floats. Coercion
//! from strings is accepted on purpose: query parameters, CSV cells and
//! form fields all arrive as text. The coercion is still strict about
//! meaning; `"4.2"` is not an integer, and nothing non-finite passes.

use std::borrow::Cow;

use palisade_error::{GuardError, Result};
use serde_json::Value;

use crate::foundation::Guard;

/// Parses a string as a finite float, trimming first.
pub(crate) fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

// ============================================================================
// TO INT
// ============================================================================

/// Narrows a number or numeric string to an `i64`, with optional bounds.
///
/// A float with a fractional part is a failure, not a truncation: `"4.2"`
/// silently becoming `4` is exactly the kind of caller error this guard
/// exists to surface.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = to_int("n");
/// assert_eq!(guard.narrow(&json!("42")).unwrap(), 42);
/// assert_eq!(guard.narrow(&json!(7)).unwrap(), 7);
/// assert!(guard.narrow(&json!("4.2")).unwrap_err().is_bad_input());
///
/// let bounded = to_int("n").min(0).max(10);
/// assert!(bounded.narrow(&json!("11")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ToInt {
    label: Cow<'static, str>,
    min: Option<i64>,
    max: Option<i64>,
}

impl ToInt {
    /// Sets the minimum value (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum value (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    fn not_an_integer(&self) -> GuardError {
        GuardError::bad_input(format!("{} must be an integer", self.label))
    }
}

impl Guard for ToInt {
    type Input = Value;
    type Output = i64;

    fn narrow(&self, input: &Value) -> Result<i64> {
        let n = match input {
            Value::Number(n) => n.as_i64().ok_or_else(|| self.not_an_integer())?,
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| self.not_an_integer())?,
            _ => return Err(self.not_an_integer()),
        };
        if let Some(min) = self.min {
            if n < min {
                return Err(GuardError::bad_input(format!(
                    "{} must be >= {min}",
                    self.label
                )));
            }
        }
        if let Some(max) = self.max {
            if n > max {
                return Err(GuardError::bad_input(format!(
                    "{} must be <= {max}",
                    self.label
                )));
            }
        }
        Ok(n)
    }
}

/// Creates an integer guard (unbounded until `.min()` / `.max()` are set).
pub fn to_int(label: impl Into<Cow<'static, str>>) -> ToInt {
    ToInt {
        label: label.into(),
        min: None,
        max: None,
    }
}

// ============================================================================
// TO NUMBER
// ============================================================================

/// Narrows a number or numeric string to a finite `f64`, with optional
/// bounds.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::prelude::*;
/// use serde_json::json;
///
/// let guard = to_number("ratio").min(0.0).max(1.0);
/// assert_eq!(guard.narrow(&json!("0.25")).unwrap(), 0.25);
/// assert!(guard.narrow(&json!("1.5")).is_err());
/// assert!(guard.narrow(&json!("abc")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ToNumber {
    label: Cow<'static, str>,
    min: Option<f64>,
    max: Option<f64>,
}

impl ToNumber {
    /// Sets the minimum value (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum value (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    fn not_a_number(&self) -> GuardError {
        GuardError::bad_input(format!("{} must be a number", self.label))
    }
}

impl Guard for ToNumber {
    type Input = Value;
    type Output = f64;

    fn narrow(&self, input: &Value) -> Result<f64> {
        let n = match input {
            Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
            Value::String(s) => parse_f64(s),
            _ => None,
        }
        .ok_or_else(|| self.not_a_number())?;
        if let Some(min) = self.min {
            if n < min {
                return Err(GuardError::bad_input(format!(
                    "{} must be >= {min}",
                    self.label
                )));
            }
        }
        if let Some(max) = self.max {
            if n > max {
                return Err(GuardError::bad_input(format!(
                    "{} must be <= {max}",
                    self.label
                )));
            }
        }
        Ok(n)
    }
}

/// Creates a float guard (unbounded until `.min()` / `.max()` are set).
pub fn to_number(label: impl Into<Cow<'static, str>>) -> ToNumber {
    ToNumber {
        label: label.into(),
        min: None,
        max: None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
