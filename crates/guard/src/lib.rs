//! # palisade-guard
//!
//! Composable guards that narrow untrusted boundary input into typed values.
//!
//! A guard is an immutable configuration (a field label plus options)
//! applied repeatedly to loosely-typed input ([`serde_json::Value`]). Each
//! application either returns a fully-typed value or a classified
//! [`GuardError`]; no partially validated value ever escapes.
//!
//! ## Quick Start
//!
//! ```rust
//! use palisade_guard::prelude::*;
//! use serde_json::json;
//!
//! // Configure once, apply many times.
//! let page = to_int("page").min(1);
//! assert_eq!(page.narrow(&json!("2")).unwrap(), 2);
//! assert!(page.narrow(&json!("0")).unwrap_err().is_bad_input());
//!
//! // Compose guards at the seams.
//! let ids = non_empty_array::<i64>("ids").and(unique("ids"));
//! assert!(ids.narrow(&[1, 2, 3]).is_ok());
//! assert!(ids.narrow(&[1, 2, 2]).is_err());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`] - the [`Guard`] trait, the [`GuardExt`] composition
//!   surface, and raw-value conversion.
//! - [`guards`] - primitive guards: strings, numbers, booleans, enums,
//!   JSON payloads, dates.
//! - [`combinators`] - structural constraints built from primitives:
//!   non-empty arrays, uniqueness, date ranges, CSV parsing.
//! - [`assert`] - assertion primitives (`invariant`, `expect_present`, ...).
//! - [`env`] - environment readers that narrow process configuration
//!   through the same guards.

// Deep combinator nesting (Then<And<...>, ...>) produces complex types that
// are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod assert;
pub mod combinators;
pub mod env;
pub mod foundation;
pub mod guards;
pub mod prelude;

pub use foundation::{FromRaw, Guard, GuardExt};
pub use palisade_error::{ErrorKind, GuardError, Result};

// The permissive input type guards narrow from.
pub use serde_json::Value;
