//! The [`Outcome`] container and its combinators
//!
//! An `Outcome<T>` is a computation that has either produced a value or
//! captured a failure. Chaining combinators short-circuit on the first
//! `Failure`; recovery only happens through the explicit `or_*` family.

use crate::error::OutcomeError;

/// Result of a fallible computation: a success value or a captured error.
///
/// Never both. Values are immutable once produced and freely shareable.
///
/// # Examples
///
/// ```rust
/// use sextant_outcome::{Outcome, OutcomeError};
///
/// let doubled = Outcome::success(21).map(|n| n * 2);
/// assert_eq!(doubled, Outcome::success(42));
///
/// let failed: Outcome<i32> = Outcome::failure(OutcomeError::custom("boom"));
/// assert!(failed.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T> {
    /// The computation produced a value
    Success(T),
    /// The computation failed with a captured error
    Failure(OutcomeError),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wrap a value as a success
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap an error as a failure
    pub fn failure(error: impl Into<OutcomeError>) -> Self {
        Self::Failure(error.into())
    }

    /// Evaluate a fallible computation, capturing any error as a `Failure`.
    ///
    /// The closure's error never escapes as a raw error; the caller always
    /// receives a well-formed `Outcome`.
    pub fn from_fn<E>(f: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: Into<OutcomeError>,
    {
        match f() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }

    /// An always-failed outcome carrying a caller-defined message.
    ///
    /// This is the error factory used by every navigator failure path.
    pub fn custom_failure(message: impl Into<String>) -> Self {
        Self::Failure(OutcomeError::custom(message))
    }

    /// An always-failed outcome carrying a message and a wrapped cause
    pub fn custom_failure_with_cause(message: impl Into<String>, cause: OutcomeError) -> Self {
        Self::Failure(OutcomeError::custom(message).with_cause(cause))
    }

    // =========================================================================
    // Predicates and Accessors
    // =========================================================================

    /// Check if this is a success
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if this is a failure
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume and return the success value, if present
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The success value, or the given default on failure
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The captured error, if this is a failure
    pub fn error(&self) -> Option<&OutcomeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume and return the captured error, if this is a failure
    pub fn into_error(self) -> Option<OutcomeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrowing view, for chaining over an owned outcome without consuming it
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Monadic bind: on success run `f`, on failure pass the original
    /// failure through unchanged (no re-wrapping).
    pub fn and_then<R>(self, f: impl FnOnce(T) -> Outcome<R>) -> Outcome<R> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Bind with `f` lifted to always succeed
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Outcome<R> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// On success, evaluate `f` with the same error-capture contract as
    /// [`Outcome::from_fn`]; on failure, propagate unchanged.
    pub fn try_map<R, E>(self, f: impl FnOnce(T) -> Result<R, E>) -> Outcome<R>
    where
        E: Into<OutcomeError>,
    {
        match self {
            Self::Success(value) => Outcome::from_fn(|| f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Value-ignoring form of [`Outcome::try_map`]
    pub fn try_run<R, E>(self, f: impl FnOnce() -> Result<R, E>) -> Outcome<R>
    where
        E: Into<OutcomeError>,
    {
        self.try_map(|_| f())
    }

    // =========================================================================
    // Failure Mapping
    // =========================================================================

    /// Replace the error via a function of the old error; success untouched
    pub fn map_failure(self, f: impl FnOnce(OutcomeError) -> OutcomeError) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error)),
        }
    }

    /// On failure, compute a replacement outcome; success untouched
    pub fn or_else(self, f: impl FnOnce(OutcomeError) -> Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// On failure, replace with a constant outcome; success untouched
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// On failure, replace with a constant success value; success untouched
    pub fn or_success(self, value: T) -> Self {
        match self {
            Self::Success(original) => Self::Success(original),
            Self::Failure(_) => Self::Success(value),
        }
    }

    /// On failure, replace the error with a constant; success untouched
    pub fn or_failure(self, error: OutcomeError) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => Self::Failure(error),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Invoke `f` on the success value for observation; always returns
    /// self unchanged, safe to chain.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Invoke `f` on the captured error for observation; always returns
    /// self unchanged, safe to chain.
    pub fn inspect_failure(self, f: impl FnOnce(&OutcomeError)) -> Self {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    // =========================================================================
    // Fatal Extraction
    // =========================================================================

    /// Return the success value, panicking on failure.
    ///
    /// Intended only for call sites that treat failure here as a programming
    /// defect, not a recoverable condition.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                tracing::error!(code = error.code(), %error, "fatal failure unwrapped");
                panic!("called `Outcome::unwrap()` on a `Failure` value: {error}")
            }
        }
    }

    /// Return the success value, panicking with `msg` on failure.
    ///
    /// Same defect-only contract as [`Outcome::unwrap`].
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                tracing::error!(code = error.code(), %error, "fatal failure unwrapped");
                panic!("{msg}: {error}")
            }
        }
    }

    /// Convert into a std `Result`
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Collapse one level of nesting; an outer failure takes precedence
    /// over any inner content.
    pub fn flatten(self) -> Outcome<T> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<OutcomeError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, OutcomeError> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

// ============================================================================
// Collection Operations
// ============================================================================

/// Split a sequence of outcomes into its successes and its failures.
///
/// Every input item lands in exactly one output list, and both lists
/// preserve the relative order of the corresponding inputs.
pub fn partition<T>(
    outcomes: impl IntoIterator<Item = Outcome<T>>,
) -> (Vec<T>, Vec<OutcomeError>) {
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => successes.push(value),
            Outcome::Failure(error) => failures.push(error),
        }
    }

    (successes, failures)
}

// ============================================================================
// Tests
// ============================================================================
