//! Conversion from raw values into primitive Rust types.

use serde_json::Value;

/// Lossless extraction of a primitive from a raw [`Value`].
///
/// Used where a guard is generic over the primitive it narrows to, most
/// notably enum membership, where the allowed set fixes the type. The
/// conversion is strict: no cross-type coercion happens here (a JSON string
/// `"2"` does not become the integer `2`). Guards that *do* coerce (the
/// numeric and boolean guards) own their coercion rules explicitly.
///
/// # Examples
///
/// ```rust
/// use palisade_guard::foundation::FromRaw;
/// use serde_json::json;
///
/// assert_eq!(i64::from_raw(&json!(7)), Some(7));
/// assert_eq!(i64::from_raw(&json!("7")), None); // strict: no coercion
/// assert_eq!(String::from_raw(&json!("a")), Some("a".to_owned()));
/// ```
pub trait FromRaw: Sized {
    /// Extracts `Self` from the raw value, or `None` when the tag does not
    /// match.
    fn from_raw(raw: &Value) -> Option<Self>;
}

impl FromRaw for String {
    fn from_raw(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromRaw for i64 {
    fn from_raw(raw: &Value) -> Option<Self> {
        raw.as_i64()
    }
}

impl FromRaw for f64 {
    fn from_raw(raw: &Value) -> Option<Self> {
        raw.as_f64()
    }
}

impl FromRaw for bool {
    fn from_raw(raw: &Value) -> Option<Self> {
        raw.as_bool()
    }
}
