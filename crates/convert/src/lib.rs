//! # sextant-convert
//!
//! Type-keyed conversion of raw text into strongly typed values.
//!
//! A process-wide [`ConversionRegistry`] maps target types to parsers.
//! The built-in set covers `String`, `bool` (with the extended
//! Y/YES/T/TRUE/1 token table), `i32`, `i64`, [`rust_decimal::Decimal`],
//! `f64`, [`chrono::NaiveDateTime`], and [`TypeToken`] name resolution.
//! Enumerations join the table through [`TextEnum`], which declares the
//! member names explicitly — there is no reflection anywhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use sextant_convert::{convert, convert_or};
//! use sextant_outcome::Outcome;
//!
//! assert_eq!(convert::<bool>("yes"), Outcome::success(true));
//! assert_eq!(convert::<i32>("42"), Outcome::success(42));
//! assert_eq!(convert_or::<i32>("not a number", 7), 7);
//! ```

#![warn(clippy::all)]

pub mod enums;
pub mod parsers;
pub mod registry;

// Re-exports
pub use enums::{TextEnum, parse_enum, parse_enum_or};
pub use parsers::{
    parse_bool, parse_bool_or, parse_datetime, parse_datetime_or, parse_decimal, parse_decimal_or,
    parse_f64, parse_f64_or, parse_i32, parse_i32_or, parse_i64, parse_i64_or, parse_string,
};
pub use registry::{BoxedValue, ConversionRegistry, Parser, TypeToken, convert, convert_or, registry};

// Re-export the outcome types conversions produce
pub use sextant_outcome::{Outcome, OutcomeError};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ConversionRegistry, Outcome, OutcomeError, TextEnum, TypeToken, convert, convert_or,
        parse_enum, registry,
    };
}
