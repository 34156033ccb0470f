//! # Numeric Formatting
//!
//! Renders doubles for display: decimal strings with floating-point noise
//! collapsed, radian values as fractions of π, and complex numbers in
//! `a + bi` form.
//!
//! ```rust
//! use std::f64::consts::PI;
//! use trig_core::expression::{format_complex, format_number, format_radians};
//!
//! assert_eq!(format_number(2.5), "2.5");
//! assert_eq!(format_radians(PI / 4.0), "π/4");
//! assert_eq!(format_complex(3.0, -4.0), "3 - 4i");
//! ```

use std::f64::consts::PI;

use crate::angle::AngleMode;

/// Default number of decimal places used by [`format_number`].
pub const DEFAULT_DECIMALS: usize = 6;

/// Magnitudes below this are displayed as exactly zero.
pub const ZERO_EPSILON: f64 = 1e-10;

/// Absolute tolerance when matching `value / π` against [`PI_FRACTIONS`].
///
/// A match means "within tolerance of", not "exactly equal to".
pub const PI_FRACTION_TOLERANCE: f64 = 1e-4;

/// Multiples of π recognised by [`format_radians`], as (numerator, denominator),
/// in the order they are tried.
pub const PI_FRACTIONS: [(u32, u32); 16] = [
    (1, 6),
    (1, 4),
    (1, 3),
    (1, 2),
    (2, 3),
    (3, 4),
    (5, 6),
    (1, 1),
    (7, 6),
    (5, 4),
    (4, 3),
    (3, 2),
    (5, 3),
    (7, 4),
    (11, 6),
    (2, 1),
];

/// Format a number with [`DEFAULT_DECIMALS`] decimal places.
pub fn format_number(value: f64) -> String {
    format_number_to(value, DEFAULT_DECIMALS)
}

/// Format a number rounded to `decimals` places.
///
/// Values within [`ZERO_EPSILON`] of zero render as `"0"`, integral results
/// render without a decimal point, and trailing zeros are stripped.
///
/// ```rust
/// use trig_core::expression::format_number_to;
///
/// assert_eq!(format_number_to(1.0 / 3.0, 6), "0.333333");
/// assert_eq!(format_number_to(2.0, 6), "2");
/// assert_eq!(format_number_to(1e-11, 6), "0");
/// ```
pub fn format_number_to(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "undefined".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if value.abs() < ZERO_EPSILON {
        return "0".to_string();
    }

    let rendered = format!("{:.*}", decimals, value);
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };

    // Rounding a small negative value can leave "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a radian value as a multiple of π when it is close to one of
/// [`PI_FRACTIONS`], otherwise as a decimal followed by `" rad"`.
///
/// ```rust
/// use std::f64::consts::PI;
/// use trig_core::expression::format_radians;
///
/// assert_eq!(format_radians(-PI), "-π");
/// assert_eq!(format_radians(3.0 * PI / 2.0), "3π/2");
/// assert_eq!(format_radians(1.0), "1 rad");
/// ```
pub fn format_radians(value: f64) -> String {
    let ratio = value / PI;

    for &(numerator, denominator) in PI_FRACTIONS.iter() {
        let fraction = f64::from(numerator) / f64::from(denominator);
        if (ratio - fraction).abs() < PI_FRACTION_TOLERANCE {
            return pi_multiple(numerator, denominator, false);
        }
        if (ratio + fraction).abs() < PI_FRACTION_TOLERANCE {
            return pi_multiple(numerator, denominator, true);
        }
    }

    format!("{} rad", format_number(value))
}

fn pi_multiple(numerator: u32, denominator: u32, negative: bool) -> String {
    let sign = if negative { "-" } else { "" };
    match (numerator, denominator) {
        (1, 1) => format!("{}π", sign),
        (n, 1) => format!("{}{}π", sign, n),
        (1, d) => format!("{}π/{}", sign, d),
        (n, d) => format!("{}{}π/{}", sign, n, d),
    }
}

/// Format a complex number `re + im·i`.
///
/// A negligible imaginary part renders as a real number and a negligible
/// real part renders as a pure imaginary.
pub fn format_complex(re: f64, im: f64) -> String {
    if im.abs() < ZERO_EPSILON {
        return format_number(re);
    }
    if re.abs() < ZERO_EPSILON {
        return format!("{}i", format_number(im));
    }
    let sign = if im >= 0.0 { '+' } else { '-' };
    format!("{} {} {}i", format_number(re), sign, format_number(im.abs()))
}

/// Format an angle given in radians in the caller's display unit:
/// `"1.5 rad"` in radian mode, `"85.943669°"` in degree mode.
pub fn format_angle(radians: f64, mode: AngleMode) -> String {
    match mode {
        AngleMode::Radians => format!("{} rad", format_number(radians)),
        AngleMode::Degrees => format!("{}°", format_number(radians.to_degrees())),
    }
}

/// Format a value already in degrees with a trailing degree sign.
pub fn format_degrees(degrees: f64) -> String {
    format!("{}°", format_number(degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert_eq!(format_number(0.00000000001), "0");
        assert_eq!(format_number(-0.00000000001), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_integral_values() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(1.9999999999), "2");
        assert_eq!(format_number(360.0), "360");
    }

    #[test]
    fn test_decimal_values() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-0.125), "-0.125");
    }

    #[test]
    fn test_small_values_round_to_zero() {
        assert_eq!(format_number(1e-7), "0");
        assert_eq!(format_number(-1e-7), "0");
    }

    #[test]
    fn test_custom_decimals() {
        assert_eq!(format_number_to(PI, 4), "3.1416");
        assert_eq!(format_number_to(PI, 10), "3.1415926536");
        assert_eq!(format_number_to(12.345, 0), "12");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "undefined");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_radians_matches() {
        assert_eq!(format_radians(PI / 4.0), "π/4");
        assert_eq!(format_radians(PI / 6.0), "π/6");
        assert_eq!(format_radians(2.0 * PI / 3.0), "2π/3");
        assert_eq!(format_radians(PI), "π");
        assert_eq!(format_radians(-PI), "-π");
        assert_eq!(format_radians(2.0 * PI), "2π");
        assert_eq!(format_radians(-11.0 * PI / 6.0), "-11π/6");
    }

    #[test]
    fn test_format_radians_tolerance() {
        // 0.78535 is within 1e-4·π of π/4
        assert_eq!(format_radians(0.78535), "π/4");
        assert_eq!(format_radians(PI / 7.0), "0.448799 rad");
    }

    #[test]
    fn test_format_radians_fallback() {
        assert_eq!(format_radians(1.0), "1 rad");
        assert_eq!(format_radians(0.0), "0 rad");
    }

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(3.0, 0.0), "3");
        assert_eq!(format_complex(0.0, 4.0), "4i");
        assert_eq!(format_complex(0.0, -4.0), "-4i");
        assert_eq!(format_complex(3.0, -4.0), "3 - 4i");
        assert_eq!(format_complex(3.0, 4.5), "3 + 4.5i");
    }

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(PI / 2.0, AngleMode::Degrees), "90°");
        assert_eq!(format_angle(1.5, AngleMode::Radians), "1.5 rad");
        assert_eq!(format_degrees(45.0), "45°");
    }
}
