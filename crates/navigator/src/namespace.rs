//! Namespace stripping
//!
//! Produces a structurally identical tree whose element and attribute
//! names have lost their namespace qualifier, with namespace-declaration
//! attributes dropped entirely. Total and idempotent.

use crate::tree::{Document, Element};

/// The name without its namespace prefix
fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

/// Check for `xmlns` / `xmlns:*` declaration attributes
fn is_namespace_declaration(name: &str) -> bool {
    name == "xmlns" || name.starts_with("xmlns:")
}

impl Element {
    /// A new tree with every namespace qualifier stripped.
    ///
    /// Structure and ordering are preserved; `xmlns` declarations are
    /// removed. Applying this to its own output yields an identical tree.
    #[must_use]
    pub fn strip_namespaces(&self) -> Element {
        let mut stripped = Element::new(local_name(self.name())).with_text(self.text());

        for attribute in self.attributes() {
            if is_namespace_declaration(&attribute.name) {
                continue;
            }
            stripped = stripped.with_attribute(local_name(&attribute.name), &attribute.value);
        }

        for child in self.children() {
            stripped = stripped.with_child(child.strip_namespaces());
        }

        stripped
    }
}

impl Document {
    /// A new document with every namespace qualifier stripped from the tree
    #[must_use]
    pub fn strip_namespaces(&self) -> Document {
        Document::from_root(self.root().strip_namespaces())
    }
}

// ============================================================================
// Tests
// ============================================================================
