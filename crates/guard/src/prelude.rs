//! Prelude module for convenient imports.
//!
//! A single `use palisade_guard::prelude::*;` brings in the traits, the
//! error types, every guard factory, and the combinators.
//!
//! # Examples
//!
//! ```rust
//! use palisade_guard::prelude::*;
//! use serde_json::json;
//!
//! let page = to_int("page").min(1);
//! let sort = one_of("sort", ["asc".to_owned(), "desc".to_owned()]);
//!
//! assert_eq!(page.narrow(&json!("2")).unwrap(), 2);
//! assert_eq!(sort.narrow(&json!("desc")).unwrap(), "desc");
//! ```

// ============================================================================
// FOUNDATION: Traits and errors
// ============================================================================

pub use crate::foundation::{ErrorKind, FromRaw, Guard, GuardError, GuardExt, Result};

// ============================================================================
// GUARDS: All primitive factories
// ============================================================================

pub use crate::guards::{
    BoundedLength, IsoDate, LengthMode, Matches, NonEmpty, NumberArray, OneOf, ParseJson, ToBool,
    ToInt, ToNumber, Trimmed, bounded_length, date_or_null, email, iso_date, matches, non_empty,
    number_array, one_of, parse_json, to_bool, to_int, to_number, trimmed, uuid, year_or_null,
};

// ============================================================================
// COMBINATORS: Composition types and structural guards
// ============================================================================

pub use crate::combinators::{
    And, CsvNumbers, DateRange, DateSpan, Each, Map, NonEmptyArray, OrNull, Then, Unique,
    UniqueBy, csv_numbers, date_range, date_range_labeled, each, non_empty_array, unique,
    unique_by,
};

// ============================================================================
// ASSERTIONS
// ============================================================================

pub use crate::assert::{assert_never, expect_present, invariant, require_present};
