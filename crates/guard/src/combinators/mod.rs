//! Guard combinators
//!
//! Higher-order guards that compose or wrap primitives to express
//! structural constraints.
//!
//! # Composition surface
//!
//! [`And`], [`Then`], [`Map`] and [`OrNull`] back the fluent methods on
//! [`GuardExt`](crate::foundation::GuardExt); [`Each`] lifts an element
//! guard over a slice.
//!
//! # Structural guards
//!
//! [`non_empty_array`], [`unique`] / [`unique_by`], [`date_range`] and
//! [`csv_numbers`] are the ready-made shapes boundary code keeps needing.
//!
//! # Examples
//!
//! ```rust
//! use palisade_guard::prelude::*;
//! use serde_json::json;
//!
//! // Parse a JSON payload into numbers, then check the shape.
//! let ids = number_array("ids").map(|ns| {
//!     ns.into_iter().map(|n| n as i64).collect::<Vec<_>>()
//! });
//! let narrowed = ids.narrow(&json!("[3, 1, 2]")).unwrap();
//!
//! let shape = non_empty_array::<i64>("ids").and(unique("ids"));
//! assert!(shape.narrow(&narrowed).is_ok());
//! ```

pub mod and;
pub mod collection;
pub mod csv;
pub mod date_range;
pub mod each;
pub mod map;
pub mod or_null;
pub mod then;

// ============================================================================
// RE-EXPORTS: Composition surface
// ============================================================================

pub use and::And;
pub use each::{Each, each};
pub use map::Map;
pub use or_null::OrNull;
pub use then::Then;

// ============================================================================
// RE-EXPORTS: Structural guards
// ============================================================================

pub use collection::{
    NonEmptyArray, Unique, UniqueBy, non_empty_array, unique, unique_by,
};
pub use csv::{CsvNumbers, csv_numbers};
pub use date_range::{DateRange, DateSpan, date_range, date_range_labeled};
