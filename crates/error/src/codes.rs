//! Stable machine codes for each error kind.
//!
//! Codes never change once published; logs and clients may key on them.

/// Caller-supplied data failed validation.
pub const BAD_INPUT: &str = "BAD_INPUT";

/// A referenced entity does not exist.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// A contract within our own logic was violated.
pub const INTERNAL: &str = "INTERNAL";
