//! Owned document tree built from XML text
//!
//! A small DOM over the quick-xml event reader. Parsing is wrapped as a
//! failable operation so malformed input surfaces as a typed `Failure`
//! rather than an uncaught fault.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use sextant_outcome::{Outcome, OutcomeError};
use tracing::trace;

/// A named attribute with its raw text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name as written, including any namespace prefix
    pub name: String,
    /// Unescaped attribute value
    pub value: String,
}

/// An element node in an owned document tree.
///
/// Children keep document order; `text` is the element's own character
/// content with entities unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// An element with the given name and nothing else
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Add an attribute, returning self for chaining
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a child element, returning self for chaining
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the element's own text content, returning self for chaining
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The element's name as written in the document
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's own text content
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All attributes in document order
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The value of the named attribute, if present
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// All child elements in document order
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// The first child element with the given name, if any
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All child elements with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Parse XML text into an owned tree, returning the root element.
    ///
    /// Reader errors, missing or multiple roots, and mismatched tags all
    /// surface as a malformed-document failure.
    pub fn parse(xml: &str) -> Outcome<Self> {
        Outcome::from_fn(|| parse_document(xml))
    }
}

/// A parsed document: the node above the root element.
///
/// Navigation from a document matches the first path segment against the
/// root's name, so paths read top-down from the document text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse XML text into a document
    pub fn parse(xml: &str) -> Outcome<Self> {
        Element::parse(xml).map(|root| Self { root })
    }

    /// Wrap an existing root element
    #[must_use]
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// The root element
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The root element, if it carries the given name.
    ///
    /// This is the document-level analogue of [`Element::child`]: a
    /// document has exactly one "child", its root.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        (self.root.name() == name).then_some(&self.root)
    }
}

fn parse_document(xml: &str) -> Result<Element, OutcomeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                // The reader has already verified the closing name matches.
                let element = stack
                    .pop()
                    .ok_or_else(|| OutcomeError::malformed_document("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                if let Some(parent) = stack.last_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|error| OutcomeError::malformed_document(error.to_string()))?;
                    parent.text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(data.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => return Err(OutcomeError::malformed_document(error.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(OutcomeError::malformed_document("unclosed element"));
    }
    trace!(parsed = root.is_some(), "document parse finished");
    root.ok_or_else(|| OutcomeError::malformed_document("no root element"))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), OutcomeError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_some() => Err(OutcomeError::malformed_document("multiple root elements")),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, OutcomeError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);

    for attribute in start.attributes() {
        let attribute =
            attribute.map_err(|error| OutcomeError::malformed_document(error.to_string()))?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|error| OutcomeError::malformed_document(error.to_string()))?
            .into_owned();
        element.attributes.push(Attribute { name, value });
    }

    Ok(element)
}

// ============================================================================
// Tests
// ============================================================================
