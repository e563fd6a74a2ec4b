//! Central error type for the sextant workspace
//!
//! Uses thiserror for clean, idiomatic Rust error definitions. Every crate
//! in the workspace fails through [`OutcomeError`]; the carried [`ErrorKind`]
//! records which operation produced the failure.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Error Kind Taxonomy
// ============================================================================

/// The specific kind of failure, one variant per failing operation.
///
/// Display strings are the operator-facing messages; they name the offending
/// path segment, attribute, or target type and need no translation before
/// being shown.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A path segment named no child element
    #[error("Element with name '{name}' not found.")]
    MissingElement { name: String },

    /// The final segment of a group lookup matched no children
    #[error("Elements with name '{name}' not found.")]
    MissingElementGroup { name: String },

    /// The final segment named no attribute on the parent element
    #[error("Attribute with name '{name}' not found.")]
    MissingAttribute { name: String },

    /// Conversion input was null, empty, or whitespace
    #[error("Value specified was null or empty.")]
    EmptyInput,

    /// A registered parser rejected its input
    #[error("Error converting '{input}' to {target}.")]
    Conversion { input: String, target: String },

    /// No declared enum member matched the input
    #[error("Value {input} couldn't be converted to enum {target}.")]
    EnumConversion { input: String, target: String },

    /// No parser is registered for the requested target type
    #[error("Could not convert '{input}' to type '{target}'.")]
    UnsupportedTarget { input: String, target: String },

    /// Document text could not be parsed into a tree
    #[error("Malformed document: {detail}")]
    MalformedDocument { detail: String },

    /// An error captured while evaluating a deferred computation
    #[error("{detail}")]
    ComputationFault { detail: String },

    /// Caller-supplied failure, built through the error factory
    #[error("{message}")]
    Custom { message: String },
}

// ============================================================================
// Error Carrier
// ============================================================================

/// The failure payload carried by [`Outcome::Failure`](crate::Outcome).
///
/// A kind (boxed to keep the success path of `Outcome<T>` small) plus an
/// optional wrapped cause. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeError {
    kind: Box<ErrorKind>,
    source: Option<Box<OutcomeError>>,
}

impl OutcomeError {
    /// Create an error with the given kind and no cause
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
            source: None,
        }
    }

    /// Attach a wrapped cause, preserving the outer message
    #[must_use]
    pub fn with_cause(mut self, cause: OutcomeError) -> Self {
        self.source = Some(Box::new(cause));
        self
    }

    /// The kind of failure
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The operator-facing message, exactly as displayed
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The wrapped cause, if one was attached
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&OutcomeError> {
        self.source.as_deref()
    }

    // =========================================================================
    // Convenience Constructors
    // =========================================================================

    /// Create a caller-defined failure (the error factory)
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Custom {
            message: message.into(),
        })
    }

    /// Create a missing-element failure naming the path segment
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingElement { name: name.into() })
    }

    /// Create a missing-element-group failure naming the final segment
    pub fn missing_element_group(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingElementGroup { name: name.into() })
    }

    /// Create a missing-attribute failure naming the attribute
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingAttribute { name: name.into() })
    }

    /// Create an empty-input failure
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Create a conversion failure naming the input and the target type
    pub fn conversion(input: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conversion {
            input: input.into(),
            target: target.into(),
        })
    }

    /// Create an enum conversion failure naming the input and the enum
    pub fn enum_conversion(input: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::EnumConversion {
            input: input.into(),
            target: target.into(),
        })
    }

    /// Create an unsupported-target failure naming the requested type
    pub fn unsupported_target(input: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedTarget {
            input: input.into(),
            target: target.into(),
        })
    }

    /// Create a malformed-document failure
    pub fn malformed_document(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedDocument {
            detail: detail.into(),
        })
    }

    /// Wrap an error captured from a deferred computation
    pub fn computation_fault(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::ComputationFault {
            detail: detail.into(),
        })
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Stable code for monitoring and log aggregation
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self.kind.as_ref() {
            ErrorKind::MissingElement { .. } => "NAV_MISSING_ELEMENT",
            ErrorKind::MissingElementGroup { .. } => "NAV_MISSING_ELEMENT_GROUP",
            ErrorKind::MissingAttribute { .. } => "NAV_MISSING_ATTRIBUTE",
            ErrorKind::EmptyInput => "CONVERT_EMPTY_INPUT",
            ErrorKind::Conversion { .. } => "CONVERT_FAILED",
            ErrorKind::EnumConversion { .. } => "CONVERT_ENUM_FAILED",
            ErrorKind::UnsupportedTarget { .. } => "CONVERT_UNSUPPORTED_TARGET",
            ErrorKind::MalformedDocument { .. } => "NAV_MALFORMED_DOCUMENT",
            ErrorKind::ComputationFault { .. } => "OUTCOME_COMPUTATION_FAULT",
            ErrorKind::Custom { .. } => "OUTCOME_CUSTOM",
        }
    }

    /// Check whether this failure is a lookup miss (element, group, attribute)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind.as_ref(),
            ErrorKind::MissingElement { .. }
                | ErrorKind::MissingElementGroup { .. }
                | ErrorKind::MissingAttribute { .. }
        )
    }

    /// Check whether this failure came from text-to-value conversion
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(
            self.kind.as_ref(),
            ErrorKind::EmptyInput
                | ErrorKind::Conversion { .. }
                | ErrorKind::EnumConversion { .. }
                | ErrorKind::UnsupportedTarget { .. }
        )
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for OutcomeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl From<ErrorKind> for OutcomeError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_message_matches_display() {
        let error = OutcomeError::missing_element("phone");
        assert_eq!(error.message(), "Element with name 'phone' not found.");
        assert_eq!(error.to_string(), error.message());
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            OutcomeError::missing_attribute("id").code(),
            "NAV_MISSING_ATTRIBUTE"
        );
        assert_eq!(OutcomeError::empty_input().code(), "CONVERT_EMPTY_INPUT");
        assert_eq!(OutcomeError::custom("boom").code(), "OUTCOME_CUSTOM");
    }

    #[test]
    fn test_cause_chain() {
        let inner = OutcomeError::conversion("abc", "i32");
        let outer = OutcomeError::custom("Wrapped Error").with_cause(inner.clone());

        assert_eq!(outer.message(), "Wrapped Error");
        assert_eq!(outer.cause(), Some(&inner));
        assert!(outer.source().is_some());
    }

    #[test]
    fn test_without_cause_has_no_source() {
        let error = OutcomeError::custom("Wrapped Error");
        assert_eq!(error.cause(), None);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_classification() {
        assert!(OutcomeError::missing_element("a").is_not_found());
        assert!(!OutcomeError::missing_element("a").is_conversion());
        assert!(OutcomeError::conversion("x", "bool").is_conversion());
        assert!(OutcomeError::empty_input().is_conversion());
        assert!(!OutcomeError::custom("x").is_not_found());
    }
}
