//! # palisade-error
//!
//! Classified errors for boundary validation.
//!
//! Every failure a guard can produce is tagged with one of three kinds,
//! chosen by how the caller should react:
//!
//! - [`ErrorKind::BadInput`] - the supplied value broke a validation rule.
//!   Always attributable to caller-supplied data; maps to a 4xx-style
//!   response.
//! - [`ErrorKind::NotFound`] - a referenced entity does not exist. Reserved
//!   for collaborators that look things up by a validated key (for example
//!   the environment readers); guards themselves never raise it.
//! - [`ErrorKind::Internal`] - a contract inside our own logic was violated.
//!   Maps to a 5xx-style response.
//!
//! Callers branch on the kind, never on message text:
//!
//! ```rust
//! use palisade_error::{GuardError, ErrorKind};
//!
//! fn status_for(err: &GuardError) -> u16 {
//!     match err.kind() {
//!         ErrorKind::BadInput => 400,
//!         ErrorKind::NotFound => 404,
//!         ErrorKind::Internal => 500,
//!     }
//! }
//!
//! let err = GuardError::bad_input("age must be an integer");
//! assert_eq!(status_for(&err), 400);
//! ```

mod error;
mod kind;

pub mod codes;

pub use error::GuardError;
pub use kind::ErrorKind;

/// Result alias used throughout the guard engine.
pub type Result<T> = std::result::Result<T, GuardError>;
