//! Path-based navigation and typed leaf extraction
//!
//! Every operation folds over the path one level per segment and stops at
//! the first missing name; later segments are never examined. Terminal
//! text goes through the conversion registry, so lookup and conversion
//! failures surface through the same channel.

use std::any::Any;

use sextant_convert::convert;
use sextant_outcome::{Outcome, OutcomeError};
use tracing::trace;

use crate::tree::{Document, Element};

/// Descend one level per segment from `start`.
///
/// An empty path is the identity; public entry points reject it before
/// calling in here.
fn descend<'a, S: AsRef<str>>(start: &'a Element, path: &[S]) -> Outcome<&'a Element> {
    let mut current = start;

    for segment in path {
        let name = segment.as_ref();
        match current.child(name) {
            Some(child) => current = child,
            None => {
                trace!(segment = name, "descent stopped at missing element");
                return Outcome::failure(OutcomeError::missing_element(name));
            }
        }
    }

    Outcome::success(current)
}

fn empty_path_failure<T>() -> Outcome<T> {
    Outcome::custom_failure("Element path must not be empty.")
}

impl Element {
    /// The element reached by descending the path, one level per segment.
    ///
    /// Stops at the first missing segment; the failure names exactly that
    /// segment and no work is attempted beyond it.
    pub fn element_at(&self, path: &[impl AsRef<str>]) -> Outcome<&Element> {
        if path.is_empty() {
            return empty_path_failure();
        }
        descend(self, path)
    }

    /// All elements matching the final segment, after descending to its
    /// parent. Zero matches fail; one or more succeed in document order.
    pub fn elements_at(&self, path: &[impl AsRef<str>]) -> Outcome<Vec<&Element>> {
        let Some((last, parents)) = path.split_last() else {
            return empty_path_failure();
        };

        descend(self, parents).and_then(|parent| {
            let matches: Vec<&Element> = parent.children_named(last.as_ref()).collect();
            if matches.is_empty() {
                Outcome::failure(OutcomeError::missing_element_group(last.as_ref()))
            } else {
                Outcome::success(matches)
            }
        })
    }

    /// The typed value of the attribute named by the final segment, looked
    /// up on the element reached by the preceding segments.
    pub fn attribute_value<T: Any + Send + Sync>(&self, path: &[impl AsRef<str>]) -> Outcome<T> {
        let Some((attribute, parents)) = path.split_last() else {
            return empty_path_failure();
        };

        descend(self, parents).and_then(|parent| match parent.attribute(attribute.as_ref()) {
            Some(raw) => convert::<T>(raw),
            None => Outcome::failure(OutcomeError::missing_attribute(attribute.as_ref())),
        })
    }

    /// The typed value of the terminal element's own text content
    pub fn element_value<T: Any + Send + Sync>(&self, path: &[impl AsRef<str>]) -> Outcome<T> {
        self.element_at(path)
            .and_then(|element| convert::<T>(element.text()))
    }
}

impl Document {
    /// [`Element::element_at`] from the document level: the first segment
    /// must name the root, the rest descend through children.
    pub fn element_at(&self, path: &[impl AsRef<str>]) -> Outcome<&Element> {
        let Some((first, rest)) = path.split_first() else {
            return empty_path_failure();
        };

        match self.child(first.as_ref()) {
            Some(root) => descend(root, rest),
            None => Outcome::failure(OutcomeError::missing_element(first.as_ref())),
        }
    }

    /// [`Element::elements_at`] from the document level
    pub fn elements_at(&self, path: &[impl AsRef<str>]) -> Outcome<Vec<&Element>> {
        let Some((last, parents)) = path.split_last() else {
            return empty_path_failure();
        };

        if parents.is_empty() {
            // A document holds exactly one element group: its root.
            return match self.child(last.as_ref()) {
                Some(root) => Outcome::success(vec![root]),
                None => Outcome::failure(OutcomeError::missing_element_group(last.as_ref())),
            };
        }

        self.element_at(parents).and_then(|parent| {
            let matches: Vec<&Element> = parent.children_named(last.as_ref()).collect();
            if matches.is_empty() {
                Outcome::failure(OutcomeError::missing_element_group(last.as_ref()))
            } else {
                Outcome::success(matches)
            }
        })
    }

    /// [`Element::attribute_value`] from the document level
    pub fn attribute_value<T: Any + Send + Sync>(&self, path: &[impl AsRef<str>]) -> Outcome<T> {
        let Some((attribute, parents)) = path.split_last() else {
            return empty_path_failure();
        };

        if parents.is_empty() {
            // The document node itself carries no attributes.
            return Outcome::failure(OutcomeError::missing_attribute(attribute.as_ref()));
        }

        self.element_at(parents)
            .and_then(|parent| match parent.attribute(attribute.as_ref()) {
                Some(raw) => convert::<T>(raw),
                None => Outcome::failure(OutcomeError::missing_attribute(attribute.as_ref())),
            })
    }

    /// [`Element::element_value`] from the document level
    pub fn element_value<T: Any + Send + Sync>(&self, path: &[impl AsRef<str>]) -> Outcome<T> {
        self.element_at(path)
            .and_then(|element| convert::<T>(element.text()))
    }
}

/// The navigation surface on an `Outcome<&Element>`.
///
/// An already-failed outcome passes through without walking, so a parse
/// chains straight into navigation:
///
/// ```rust
/// use sextant_navigator::{Element, NavigateOutcome};
///
/// let document = Element::parse("<head><status>ok</status></head>");
/// let status = document.as_ref().element_value::<String>(&["status"]);
/// assert_eq!(status.into_value(), Some("ok".to_string()));
/// ```
pub trait NavigateOutcome<'a>: Sized {
    /// [`Element::element_at`] through the outcome
    fn element_at(self, path: &[impl AsRef<str>]) -> Outcome<&'a Element>;

    /// [`Element::elements_at`] through the outcome
    fn elements_at(self, path: &[impl AsRef<str>]) -> Outcome<Vec<&'a Element>>;

    /// [`Element::attribute_value`] through the outcome
    fn attribute_value<T: Any + Send + Sync>(self, path: &[impl AsRef<str>]) -> Outcome<T>;

    /// [`Element::element_value`] through the outcome
    fn element_value<T: Any + Send + Sync>(self, path: &[impl AsRef<str>]) -> Outcome<T>;
}

impl<'a> NavigateOutcome<'a> for Outcome<&'a Element> {
    fn element_at(self, path: &[impl AsRef<str>]) -> Outcome<&'a Element> {
        self.and_then(|element| element.element_at(path))
    }

    fn elements_at(self, path: &[impl AsRef<str>]) -> Outcome<Vec<&'a Element>> {
        self.and_then(|element| element.elements_at(path))
    }

    fn attribute_value<T: Any + Send + Sync>(self, path: &[impl AsRef<str>]) -> Outcome<T> {
        self.and_then(|element| element.attribute_value(path))
    }

    fn element_value<T: Any + Send + Sync>(self, path: &[impl AsRef<str>]) -> Outcome<T> {
        self.and_then(|element| element.element_value(path))
    }
}

impl<'a> NavigateOutcome<'a> for Outcome<&'a Document> {
    fn element_at(self, path: &[impl AsRef<str>]) -> Outcome<&'a Element> {
        self.and_then(|document| document.element_at(path))
    }

    fn elements_at(self, path: &[impl AsRef<str>]) -> Outcome<Vec<&'a Element>> {
        self.and_then(|document| document.elements_at(path))
    }

    fn attribute_value<T: Any + Send + Sync>(self, path: &[impl AsRef<str>]) -> Outcome<T> {
        self.and_then(|document| document.attribute_value(path))
    }

    fn element_value<T: Any + Send + Sync>(self, path: &[impl AsRef<str>]) -> Outcome<T> {
        self.and_then(|document| document.element_value(path))
    }
}

// ============================================================================
// Tests
// ============================================================================
