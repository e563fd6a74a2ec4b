//! # sextant-outcome
//!
//! Success/failure algebra for the sextant workspace, plus the central
//! error type every other crate fails through.
//!
//! An [`Outcome<T>`] is either `Success(T)` or `Failure(OutcomeError)`.
//! Combinators short-circuit on the first failure; recovery is always
//! explicit (`or`, `or_else`, `or_success`, `or_failure`). The
//! [`OutcomeError`] carries an operator-readable message, a kind taxonomy,
//! and an optional wrapped cause.
//!
//! ## Quick Start
//!
//! ```rust
//! use sextant_outcome::{Outcome, OutcomeError};
//!
//! let outcome = Outcome::from_fn(|| "21".parse::<i32>()
//!         .map_err(|e| OutcomeError::conversion("21", "i32").with_cause(
//!             OutcomeError::computation_fault(e.to_string()))))
//!     .map(|n| n * 2)
//!     .inspect(|n| println!("got {n}"));
//!
//! assert_eq!(outcome, Outcome::success(42));
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod optional;
pub mod outcome;

// Re-exports
pub use error::{ErrorKind, OutcomeError};
pub use optional::{OptionalExt, first_match_ignore_case};
pub use outcome::{Outcome, partition};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ErrorKind, Outcome, OutcomeError, OptionalExt, first_match_ignore_case, partition,
    };
}
