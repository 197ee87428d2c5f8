//! Primitive guards
//!
//! Label-parameterized factories that narrow raw input into one concrete
//! type each.
//!
//! # Categories
//!
//! - **String**: [`trimmed`], [`non_empty`], [`bounded_length`],
//!   [`matches`], [`uuid`], [`email`]
//! - **Numeric**: [`to_int`], [`to_number`]
//! - **Boolean**: [`to_bool`]
//! - **Enum membership**: [`one_of`]
//! - **JSON**: [`parse_json`], [`number_array`]
//! - **Date**: [`iso_date`], plus the lenient [`date_or_null`] /
//!   [`year_or_null`] helpers
//!
//! # Coercion policy
//!
//! Guards that coerce (`to_int`, `to_number`, `to_bool` accept string
//! forms) exist because boundary input typically arrives as strings.
//! Strict-typed guards (`trimmed`, `parse_json`, `uuid`) exist where
//! coercion would hide a caller error.

pub mod boolean;
pub mod date;
pub mod json;
pub mod numeric;
pub mod one_of;
pub mod string;

// ============================================================================
// RE-EXPORTS: String guards
// ============================================================================

pub use string::{
    BoundedLength, LengthMode, Matches, NonEmpty, Trimmed, bounded_length, email, matches,
    non_empty, trimmed, uuid,
};

// ============================================================================
// RE-EXPORTS: Numeric / boolean / enum guards
// ============================================================================

pub use boolean::{ToBool, to_bool};
pub use numeric::{ToInt, ToNumber, to_int, to_number};
pub use one_of::{OneOf, one_of};

// ============================================================================
// RE-EXPORTS: JSON guards
// ============================================================================

pub use json::{DEFAULT_MAX_BYTES, NumberArray, ParseJson, number_array, parse_json};

// ============================================================================
// RE-EXPORTS: Date guards
// ============================================================================

pub use date::{IsoDate, date_or_null, iso_date, year_or_null};
