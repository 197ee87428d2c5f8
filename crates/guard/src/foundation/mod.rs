//! Core types and traits of the guard engine
//!
//! This module contains the fundamental building blocks:
//!
//! - **Traits**: [`Guard`], [`GuardExt`], [`FromRaw`]
//! - **Errors**: re-exported from `palisade-error`
//!
//! # Architecture
//!
//! ## 1. Two-stage application
//!
//! A guard is built once from a label (and options) and applied repeatedly.
//! Configuration is immutable; application is deterministic and
//! side-effect-free:
//!
//! ```rust,ignore
//! let guard = to_int("page").min(1).max(500);   // stage 1: configure
//! let page = guard.narrow(&raw)?;               // stage 2: narrow
//! ```
//!
//! ## 2. All-or-nothing narrowing
//!
//! `narrow` returns a value that fully satisfies the guard's declared type,
//! or a classified error. There is no third outcome and no partial value.
//!
//! ## 3. Composition
//!
//! Guards compose through [`GuardExt`]:
//!
//! ```rust,ignore
//! let ids = non_empty_array::<i64>("ids").and(unique("ids"));
//! let name = trimmed("name").and_then(...);
//! ```
//!
//! ## 4. Uniform classification
//!
//! Every failure is a [`GuardError`] carrying one of three kinds. Compound
//! guards let an inner guard's error propagate unchanged: never caught,
//! never downgraded.

mod raw;
mod traits;

pub use raw::FromRaw;
pub use traits::{Guard, GuardExt};

// Re-export the error layer at the foundation level for convenience.
pub use palisade_error::{ErrorKind, GuardError, Result};
