//! Built-in text parsers
//!
//! Each parser has two forms: the failable primitive returning an
//! [`Outcome`], and an `_or` variant that recovers locally with a default
//! instead of failing. Failure messages name both the offending text and
//! the target type.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use sextant_outcome::{Outcome, OutcomeError};

/// Identity conversion; always succeeds
pub fn parse_string(value: &str) -> Outcome<String> {
    Outcome::success(value.to_string())
}

/// Parse a boolean, accepting Y/YES/T/TRUE/1 and N/NO/F/FALSE/0 in any
/// case before falling back to the standard `bool` literal parse.
pub fn parse_bool(value: &str) -> Outcome<bool> {
    let token = value.trim().to_ascii_uppercase();

    if matches!(token.as_str(), "Y" | "YES" | "T" | "TRUE" | "1") {
        return Outcome::success(true);
    }
    if matches!(token.as_str(), "N" | "NO" | "F" | "FALSE" | "0") {
        return Outcome::success(false);
    }

    // Standard literal parse as the last resort.
    match value.trim().to_ascii_lowercase().parse::<bool>() {
        Ok(parsed) => Outcome::success(parsed),
        Err(_) => Outcome::failure(OutcomeError::conversion(value, "bool")),
    }
}

/// Parse a boolean, with a default on failure
pub fn parse_bool_or(value: &str, default: bool) -> bool {
    parse_bool(value).value_or(default)
}

/// Parse an `i32`
pub fn parse_i32(value: &str) -> Outcome<i32> {
    match value.trim().parse::<i32>() {
        Ok(parsed) => Outcome::success(parsed),
        Err(_) => Outcome::failure(OutcomeError::conversion(value, "i32")),
    }
}

/// Parse an `i32`, with a default on failure
pub fn parse_i32_or(value: &str, default: i32) -> i32 {
    parse_i32(value).value_or(default)
}

/// Parse an `i64`
pub fn parse_i64(value: &str) -> Outcome<i64> {
    match value.trim().parse::<i64>() {
        Ok(parsed) => Outcome::success(parsed),
        Err(_) => Outcome::failure(OutcomeError::conversion(value, "i64")),
    }
}

/// Parse an `i64`, with a default on failure
pub fn parse_i64_or(value: &str, default: i64) -> i64 {
    parse_i64(value).value_or(default)
}

/// Parse a fixed-point decimal
pub fn parse_decimal(value: &str) -> Outcome<Decimal> {
    match Decimal::from_str(value.trim()) {
        Ok(parsed) => Outcome::success(parsed),
        Err(_) => Outcome::failure(OutcomeError::conversion(value, "Decimal")),
    }
}

/// Parse a fixed-point decimal, with a default on failure
pub fn parse_decimal_or(value: &str, default: Decimal) -> Decimal {
    parse_decimal(value).value_or(default)
}

/// Parse an `f64`
pub fn parse_f64(value: &str) -> Outcome<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) => Outcome::success(parsed),
        Err(_) => Outcome::failure(OutcomeError::conversion(value, "f64")),
    }
}

/// Parse an `f64`, with a default on failure
pub fn parse_f64_or(value: &str, default: f64) -> f64 {
    parse_f64(value).value_or(default)
}

/// Parse a date-time.
///
/// Accepts RFC 3339 (offset is dropped after normalizing to UTC), the
/// common `T`- and space-separated local forms with optional fractional
/// seconds, and a bare date (midnight).
pub fn parse_datetime(value: &str) -> Outcome<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Outcome::success(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Outcome::success(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Outcome::success(date.and_time(NaiveTime::MIN));
    }

    Outcome::failure(OutcomeError::conversion(value, "NaiveDateTime"))
}

/// Parse a date-time, with a default on failure
pub fn parse_datetime_or(value: &str, default: NaiveDateTime) -> NaiveDateTime {
    parse_datetime(value).value_or(default)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bool_extended_tokens() {
        for input in ["Y", "yes", "T", "true", "1", "TRUE", "yEs"] {
            assert_eq!(parse_bool(input), Outcome::success(true), "input: {input}");
        }
        for input in ["N", "no", "F", "false", "0", "FALSE", "nO"] {
            assert_eq!(parse_bool(input), Outcome::success(false), "input: {input}");
        }
    }

    #[test]
    fn test_bool_rejects_garbage_with_message() {
        let error = parse_bool("maybe").into_error().unwrap();
        assert_eq!(error.message(), "Error converting 'maybe' to bool.");
    }

    #[test]
    fn test_bool_trims_whitespace() {
        assert_eq!(parse_bool("  yes  "), Outcome::success(true));
    }

    #[test]
    fn test_numeric_parses() {
        assert_eq!(parse_i32("42"), Outcome::success(42));
        assert_eq!(parse_i64("-9000000000"), Outcome::success(-9_000_000_000));
        assert_eq!(parse_f64("2.5"), Outcome::success(2.5));
        assert_eq!(parse_decimal("19.99"), Outcome::success(Decimal::new(1999, 2)));
    }

    #[test]
    fn test_numeric_failures_name_text_and_type() {
        assert_eq!(
            parse_i32("abc").into_error().unwrap().message(),
            "Error converting 'abc' to i32."
        );
        assert_eq!(
            parse_i64("abc").into_error().unwrap().message(),
            "Error converting 'abc' to i64."
        );
        assert_eq!(
            parse_decimal("abc").into_error().unwrap().message(),
            "Error converting 'abc' to Decimal."
        );
        assert_eq!(
            parse_f64("abc").into_error().unwrap().message(),
            "Error converting 'abc' to f64."
        );
    }

    #[test]
    fn test_datetime_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        assert_eq!(parse_datetime("2024-12-25T10:30:00"), Outcome::success(expected));
        assert_eq!(parse_datetime("2024-12-25 10:30:00"), Outcome::success(expected));
        assert_eq!(parse_datetime("2024-12-25T10:30:00Z"), Outcome::success(expected));

        let midnight = NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert_eq!(parse_datetime("2024-12-25"), Outcome::success(midnight));
    }

    #[test]
    fn test_datetime_failure() {
        let error = parse_datetime("not a date").into_error().unwrap();
        assert_eq!(error.message(), "Error converting 'not a date' to NaiveDateTime.");
    }

    #[test]
    fn test_default_variants_recover() {
        assert!(parse_bool_or("garbage", true));
        assert_eq!(parse_i32_or("garbage", 7), 7);
        assert_eq!(parse_i32_or("12", 7), 12);
        assert_eq!(parse_f64_or("garbage", 1.5), 1.5);
    }
}
