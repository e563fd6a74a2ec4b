//! Enumeration parsing over explicitly declared member names
//!
//! There is no runtime reflection here: an enum opts in by implementing
//! [`TextEnum`], supplying its declared member names and values. Parsing
//! tries an exact-name match first, then a case-insensitive scan that
//! resolves to the exact-cased member found.

use std::any::Any;

use sextant_outcome::{Outcome, OutcomeError, first_match_ignore_case};

/// An enumeration whose members can be parsed from text.
///
/// # Examples
///
/// ```rust
/// use sextant_convert::{TextEnum, parse_enum};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// impl TextEnum for Color {
///     const NAME: &'static str = "Color";
///
///     fn variants() -> &'static [(&'static str, Self)] {
///         &[("Red", Color::Red), ("Green", Color::Green)]
///     }
/// }
///
/// assert_eq!(parse_enum::<Color>("red").into_value(), Some(Color::Red));
/// assert_eq!(parse_enum::<Color>("RED").into_value(), Some(Color::Red));
/// ```
pub trait TextEnum: Any + Clone + Send + Sync {
    /// Short name used in failure messages
    const NAME: &'static str;

    /// Declared members: exact-cased name plus value
    fn variants() -> &'static [(&'static str, Self)];
}

/// Parse an enum member from text.
///
/// Lookup is case-insensitive across the declared member names; the match
/// always resolves to a declared member, never a case-mangled synthetic.
pub fn parse_enum<T: TextEnum>(value: &str) -> Outcome<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Outcome::failure(OutcomeError::empty_input());
    }

    let variants = T::variants();
    if let Some((_, variant)) = variants.iter().find(|(name, _)| *name == trimmed) {
        return Outcome::success(variant.clone());
    }

    let names: Vec<&str> = variants.iter().map(|(name, _)| *name).collect();
    match first_match_ignore_case(&names, trimmed) {
        Some(exact) => {
            let variant = variants
                .iter()
                .find(|(name, _)| *name == exact)
                .map(|(_, variant)| variant.clone())
                .expect("first_match_ignore_case returned a declared member");
            Outcome::success(variant)
        }
        None => Outcome::failure(OutcomeError::enum_conversion(trimmed, T::NAME)),
    }
}

/// Parse an enum member, with a default on failure
pub fn parse_enum_or<T: TextEnum>(value: &str, default: T) -> T {
    parse_enum(value).value_or(default)
}

// ============================================================================
// Tests
// ============================================================================
