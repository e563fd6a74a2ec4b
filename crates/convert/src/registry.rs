//! The type-keyed conversion registry
//!
//! A process-wide table mapping a target type (by `TypeId`) to a parser
//! from raw text. Built-ins are installed when the global is first touched;
//! the table is treated as read-only afterwards, so unsynchronized
//! concurrent reads are safe. Register any additional parsers before the
//! first `convert` call.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use sextant_outcome::{Outcome, OutcomeError};
use tracing::{debug, trace};

use crate::enums::TextEnum;
use crate::parsers;

/// Type-erased success value produced by a registered parser
pub type BoxedValue = Box<dyn Any + Send + Sync>;

/// A registered parser: raw text in, type-erased value out
pub type Parser = Arc<dyn Fn(&str) -> Outcome<BoxedValue> + Send + Sync>;

// ============================================================================
// Type Tokens
// ============================================================================

/// Opaque handle for a registered target type.
///
/// This is what a type-reference conversion resolves to: a `TypeId` plus
/// the type's path name, with no runtime reflection behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// The token for a concrete type
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying `TypeId`
    #[inline]
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The full path name of the type
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this token refers to `T`
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

/// Last path segment of a type name, for operator-facing messages
fn short_type_name<T: Any>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

// ============================================================================
// Registry
// ============================================================================

struct Entry {
    type_name: &'static str,
    parse: Parser,
}

/// Table of text-to-value parsers keyed by target type.
///
/// The global instance from [`registry`] carries the built-in set; a
/// standalone instance is mainly useful in tests.
pub struct ConversionRegistry {
    entries: RwLock<HashMap<TypeId, Entry>>,
    // Shared with the type-reference parser closure, which resolves
    // fully qualified names against the same instance it lives in.
    names: Arc<RwLock<HashMap<String, TypeToken>>>,
}

impl ConversionRegistry {
    /// A registry with no parsers at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            names: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// A registry populated with the built-in parser set: `String`,
    /// `bool`, `i32`, `i64`, `Decimal`, `f64`, `NaiveDateTime`, and
    /// [`TypeToken`] resolution.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        registry.register(parsers::parse_string);
        registry.register(parsers::parse_bool);
        registry.register(parsers::parse_i32);
        registry.register(parsers::parse_i64);
        registry.register(parsers::parse_decimal);
        registry.register(parsers::parse_f64);
        registry.register(parsers::parse_datetime);

        // Type references resolve against this registry's own name table.
        let names = Arc::clone(&registry.names);
        registry.register(move |value: &str| resolve_type_token(&names, value));

        debug!(parsers = registry.len(), "conversion registry initialized");
        registry
    }

    /// Register a parser for `T`, replacing any existing one.
    ///
    /// The type also becomes resolvable as a [`TypeToken`] under both its
    /// full path name and its short name.
    pub fn register<T, F>(&self, parse: F)
    where
        T: Any + Send + Sync,
        F: Fn(&str) -> Outcome<T> + Send + Sync + 'static,
    {
        let full_name = type_name::<T>();
        trace!(target_type = full_name, "registering parser");

        self.entries.write().insert(
            TypeId::of::<T>(),
            Entry {
                type_name: full_name,
                parse: Arc::new(move |text| parse(text).map(|value| Box::new(value) as BoxedValue)),
            },
        );

        let token = TypeToken::of::<T>();
        let mut names = self.names.write();
        names.insert(full_name.to_string(), token);
        names.insert(short_type_name::<T>().to_string(), token);
    }

    /// Register the [`TextEnum`] parser for `T`, making the enum a
    /// first-class conversion target.
    pub fn register_enum<T: TextEnum>(&self) {
        self.register(crate::enums::parse_enum::<T>);
    }

    /// The parser registered for a type, if any
    #[must_use]
    pub fn lookup(&self, type_id: TypeId) -> Option<Parser> {
        self.entries
            .read()
            .get(&type_id)
            .map(|entry| Arc::clone(&entry.parse))
    }

    /// Check whether a parser is registered for `T`
    #[must_use]
    pub fn contains<T: Any>(&self) -> bool {
        self.entries.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of registered parsers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the registry holds no parsers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Resolve a registered type's name to its [`TypeToken`] handle.
    ///
    /// Unknown names fail with a descriptive conversion message rather
    /// than a raw lookup error.
    pub fn resolve_type_name(&self, value: &str) -> Outcome<TypeToken> {
        resolve_type_token(&self.names, value)
    }

    /// Convert raw text to `T`.
    ///
    /// Blank input fails immediately; a registered parser's failure
    /// propagates as-is; a type with no registered parser fails naming
    /// the type.
    pub fn convert<T: Any + Send + Sync>(&self, value: &str) -> Outcome<T> {
        if value.trim().is_empty() {
            return Outcome::failure(OutcomeError::empty_input());
        }

        let Some(parse) = self.lookup(TypeId::of::<T>()) else {
            trace!(target_type = type_name::<T>(), "no parser registered");
            return Outcome::failure(OutcomeError::unsupported_target(
                value,
                short_type_name::<T>(),
            ));
        };

        (*parse)(value).map(|boxed| {
            *boxed
                .downcast::<T>()
                .expect("registered parser produced a value of its registered type")
        })
    }

    /// Full path names of every registered target type, for diagnostics
    #[must_use]
    pub fn registered_type_names(&self) -> Vec<&'static str> {
        self.entries
            .read()
            .values()
            .map(|entry| entry.type_name)
            .collect()
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn resolve_type_token(
    names: &RwLock<HashMap<String, TypeToken>>,
    value: &str,
) -> Outcome<TypeToken> {
    match names.read().get(value.trim()) {
        Some(token) => Outcome::success(*token),
        None => Outcome::failure(OutcomeError::conversion(value, "Type")),
    }
}

// ============================================================================
// Global Surface
// ============================================================================

static REGISTRY: Lazy<ConversionRegistry> = Lazy::new(ConversionRegistry::with_builtins);

/// The process-wide registry, initialized with built-ins on first touch
pub fn registry() -> &'static ConversionRegistry {
    &REGISTRY
}

/// Convert raw text to `T` using the process-wide registry
pub fn convert<T: Any + Send + Sync>(value: &str) -> Outcome<T> {
    REGISTRY.convert(value)
}

/// Convert raw text to `T`, with a default on failure
pub fn convert_or<T: Any + Send + Sync>(value: &str, default: T) -> T {
    convert(value).value_or(default)
}

// ============================================================================
// Tests
// ============================================================================
