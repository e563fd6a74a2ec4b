//! # sextant-navigator
//!
//! Path-based navigation over an owned XML tree, with typed leaf
//! extraction through the conversion registry.
//!
//! Descent is fail-fast: the first missing segment produces a `Failure`
//! naming exactly that segment, and later segments are never examined.
//! Parsing, lookup, and conversion failures all surface through the same
//! [`Outcome`] channel.
//!
//! ## Quick Start
//!
//! ```rust
//! use sextant_navigator::{Document, NavigateOutcome};
//!
//! let xml = "<head><depositor><email_address>a@b.com</email_address></depositor></head>";
//!
//! let email = Document::parse(xml)
//!     .as_ref()
//!     .element_value::<String>(&["head", "depositor", "email_address"]);
//! assert_eq!(email.into_value(), Some("a@b.com".to_string()));
//!
//! let missing = Document::parse(xml)
//!     .as_ref()
//!     .element_value::<String>(&["head", "depositor", "phone"]);
//! assert_eq!(
//!     missing.into_error().unwrap().message(),
//!     "Element with name 'phone' not found."
//! );
//! ```

#![warn(clippy::all)]

pub mod namespace;
pub mod path;
pub mod tree;

// Re-exports
pub use path::NavigateOutcome;
pub use tree::{Attribute, Document, Element};

// Re-export the types navigation produces
pub use sextant_outcome::{Outcome, OutcomeError};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Attribute, Document, Element, NavigateOutcome, Outcome, OutcomeError};
}
