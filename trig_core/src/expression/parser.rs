//! # Expression Parser
//!
//! Converts free-form numeric text into an `f64`. The grammar is deliberately
//! permissive and the parser is total: malformed input yields `None`, never a
//! panic or an error.
//!
//! Parsing is an ordered rewrite of the input followed by a plain float parse:
//!
//! 1. `√<digits>` is replaced with the decimal square root of the digits
//! 2. `sqrt(<digits>)` (any case) is replaced the same way
//! 3. `π`, `pi` and `PI` are replaced with the decimal expansion of π
//! 4. A string with exactly one `/` is evaluated as `numerator / denominator`
//! 5. Anything else is parsed directly as a float
//!
//! There is no operator precedence, no nesting and no implicit multiplication:
//! `2π` rewrites to `23.141592653589793`, and `1/2/3` is rejected.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::expression::parse_number;
//!
//! assert_eq!(parse_number("1/2"), Some(0.5));
//! assert!((parse_number("π/3").unwrap() - 1.047197551).abs() < 1e-9);
//! assert_eq!(parse_number("abc"), None);
//! ```

use std::f64::consts::PI;

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::{TrigError, TrigResult};

static RADICAL_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"√([0-9]+)").expect("radical pattern is valid"));

static RADICAL_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sqrt\(([0-9]+)\)").expect("sqrt pattern is valid"));

/// Spellings of π that are rewritten, in replacement order.
const PI_SPELLINGS: [&str; 3] = ["π", "pi", "PI"];

/// Parse a numeric expression that may contain `√`, `sqrt()`, `π` or one `/`.
///
/// Returns `None` for empty input, unparseable input, a zero denominator, or
/// anything that evaluates to NaN.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let rewritten = substitute_constants(&substitute_radicals(trimmed));

    let value = match split_fraction(&rewritten) {
        Some((numerator, denominator)) => {
            let numerator = parse_plain(numerator)?;
            let denominator = parse_plain(denominator)?;
            if denominator == 0.0 {
                debug!("rejecting '{}': zero denominator", text);
                return None;
            }
            numerator / denominator
        }
        None => parse_plain(&rewritten)?,
    };

    if value.is_nan() {
        debug!("rejecting '{}': evaluates to NaN", text);
        return None;
    }
    Some(value)
}

/// Parse a required field, turning a blank or malformed value into an error.
///
/// ```rust
/// use trig_core::expression::parse_field;
///
/// assert_eq!(parse_field("radius", "5").unwrap(), 5.0);
/// assert!(parse_field("radius", "").is_err());
/// assert!(parse_field("radius", "five").is_err());
/// ```
pub fn parse_field(field: &str, text: &str) -> TrigResult<f64> {
    match parse_optional_field(field, text)? {
        Some(value) => Ok(value),
        None => Err(TrigError::missing_field(field)),
    }
}

/// Parse an optional field: blank text is `Ok(None)`, malformed text is an error.
pub fn parse_optional_field(field: &str, text: &str) -> TrigResult<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_number(text)
        .map(Some)
        .ok_or_else(|| TrigError::invalid_input(field, text.trim(), "Not a valid number"))
}

/// Parse an optional field, falling back to `default` when it is blank.
pub fn parse_field_or(field: &str, text: &str, default: f64) -> TrigResult<f64> {
    Ok(parse_optional_field(field, text)?.unwrap_or(default))
}

fn substitute_radicals(text: &str) -> String {
    let pass = RADICAL_SYMBOL.replace_all(text, root_of_capture);
    RADICAL_CALL.replace_all(&pass, root_of_capture).into_owned()
}

fn root_of_capture(caps: &Captures) -> String {
    // The pattern only admits ASCII digits, so the parse cannot fail.
    let radicand: f64 = caps[1].parse().unwrap_or(f64::NAN);
    // Always written with a decimal point, so `√4.5` becomes `2.0.5` and fails.
    format!("{:?}", radicand.sqrt())
}

fn substitute_constants(text: &str) -> String {
    let pi = PI.to_string();
    PI_SPELLINGS
        .iter()
        .fold(text.to_string(), |acc, spelling| acc.replace(spelling, &pi))
}

/// Split on the only `/` in the text; two or more slashes is not a fraction.
fn split_fraction(text: &str) -> Option<(&str, &str)> {
    let (numerator, denominator) = text.split_once('/')?;
    if denominator.contains('/') {
        return None;
    }
    Some((numerator, denominator))
}

fn parse_plain(text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("'{}' is not a plain number", text);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: Option<f64>, expected: f64) -> bool {
        matches!(actual, Some(v) if (v - expected).abs() < 1e-9)
    }

    #[test]
    fn test_root_followed_by_decimal() {
        assert_eq!(parse_number("√4.5"), None);
        assert_eq!(parse_number("sqrt(9).5"), None);
        assert_eq!(parse_number("√2.5"), None);
        assert!(approx(parse_number("√4"), 2.0));
        assert!(approx(parse_number("sqrt(9)"), 3.0));
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("45"), Some(45.0));
        assert_eq!(parse_number(" 45.5 "), Some(45.5));
        assert_eq!(parse_number("-30"), Some(-30.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_radicals() {
        assert!(approx(parse_number("√2"), 1.414213562));
        assert!(approx(parse_number("sqrt(9)"), 3.0));
        assert!(approx(parse_number("SQRT(16)"), 4.0));
        // √3/2 goes through the fraction path after substitution
        assert!(approx(parse_number("√3/2"), 0.866025404));
    }

    #[test]
    fn test_radical_of_symbol_is_rejected() {
        assert_eq!(parse_number("√x"), None);
        assert_eq!(parse_number("sqrt(pi)"), None);
    }

    #[test]
    fn test_pi() {
        assert!(approx(parse_number("π"), PI));
        assert!(approx(parse_number("pi"), PI));
        assert!(approx(parse_number("PI"), PI));
        assert!(approx(parse_number("π/3"), 1.047197551));
        assert!(approx(parse_number("-π/4"), -PI / 4.0));
    }

    #[test]
    fn test_no_implicit_multiplication() {
        // "2π" becomes "23.14159..." rather than 2 × π
        let value = parse_number("2π").unwrap();
        assert!((value - 23.141592653589793).abs() < 1e-9);
    }

    #[test]
    fn test_fractions() {
        assert_eq!(parse_number("1/2"), Some(0.5));
        assert_eq!(parse_number(" 3 / 4 "), Some(0.75));
        assert_eq!(parse_number("/2"), None);
        assert_eq!(parse_number("1/"), None);
    }

    #[test]
    fn test_more_than_one_slash() {
        assert_eq!(parse_number("1/2/3"), None);
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(parse_number("1/0"), None);
        assert_eq!(parse_number("0/0"), None);
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("nan"), None);
        assert_eq!(parse_number("1+2"), None);
    }

    #[test]
    fn test_field_helpers() {
        assert_eq!(parse_optional_field("a", "  ").unwrap(), None);
        assert_eq!(parse_optional_field("a", "3").unwrap(), Some(3.0));
        assert_eq!(
            parse_field("a", "").unwrap_err().error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            parse_field("a", "x").unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(parse_field_or("g", "", 9.81).unwrap(), 9.81);
    }
}
