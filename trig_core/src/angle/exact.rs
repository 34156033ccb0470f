//! # Exact Values at Special Angles
//!
//! Pre-rendered symbolic values of sin, cos and tan at the 17 multiples of
//! 30° and 45° from 0° to 360°. The table is built once on first use and is
//! read-only afterwards.
//!
//! ```rust
//! use trig_core::angle::{exact_value, TrigFunction};
//!
//! assert_eq!(exact_value(30.0, TrigFunction::Sin), Some("1/2"));
//! assert_eq!(exact_value(-60.0, TrigFunction::Tan), Some("-√3"));
//! assert_eq!(exact_value(31.0, TrigFunction::Sin), None);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::functions::TrigFunction;

/// (degrees, sin, cos, tan)
pub const SPECIAL_ANGLES: [(u16, &str, &str, &str); 17] = [
    (0, "0", "1", "0"),
    (30, "1/2", "√3/2", "√3/3"),
    (45, "√2/2", "√2/2", "1"),
    (60, "√3/2", "1/2", "√3"),
    (90, "1", "0", "undefined"),
    (120, "√3/2", "-1/2", "-√3"),
    (135, "√2/2", "-√2/2", "-1"),
    (150, "1/2", "-√3/2", "-√3/3"),
    (180, "0", "-1", "0"),
    (210, "-1/2", "-√3/2", "√3/3"),
    (225, "-√2/2", "-√2/2", "1"),
    (240, "-√3/2", "-1/2", "√3"),
    (270, "-1", "0", "undefined"),
    (300, "-√3/2", "1/2", "-√3"),
    (315, "-√2/2", "√2/2", "-1"),
    (330, "-1/2", "√3/2", "-√3/3"),
    (360, "0", "1", "0"),
];

static EXACT_TABLE: Lazy<HashMap<(u16, TrigFunction), &'static str>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(SPECIAL_ANGLES.len() * 3);
    for &(degrees, sin, cos, tan) in SPECIAL_ANGLES.iter() {
        table.insert((degrees, TrigFunction::Sin), sin);
        table.insert((degrees, TrigFunction::Cos), cos);
        table.insert((degrees, TrigFunction::Tan), tan);
    }
    table
});

/// Exact symbolic value of `function` at an angle in degrees.
///
/// The angle is rounded to the nearest whole degree (ties to even) and
/// normalized into [0, 360) before lookup. Returns `None` for angles that are
/// not multiples of 30° or 45°, and always for csc, sec and cot.
pub fn exact_value(degrees: f64, function: TrigFunction) -> Option<&'static str> {
    if !degrees.is_finite() {
        return None;
    }
    let whole = degrees.round_ties_even();
    let normalized = ((whole % 360.0) + 360.0) % 360.0;
    // normalized is a whole number in [0, 360)
    let key = normalized as u16;
    EXACT_TABLE.get(&(key, function)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(EXACT_TABLE.len(), 17 * 3);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(exact_value(30.0, TrigFunction::Sin), Some("1/2"));
        assert_eq!(exact_value(45.0, TrigFunction::Cos), Some("√2/2"));
        assert_eq!(exact_value(90.0, TrigFunction::Tan), Some("undefined"));
        assert_eq!(exact_value(330.0, TrigFunction::Tan), Some("-√3/3"));
    }

    #[test]
    fn test_rounds_to_whole_degree() {
        assert_eq!(exact_value(29.6, TrigFunction::Sin), Some("1/2"));
        assert_eq!(exact_value(30.4, TrigFunction::Sin), Some("1/2"));
        assert_eq!(exact_value(31.0, TrigFunction::Sin), None);
    }

    #[test]
    fn test_normalizes() {
        assert_eq!(exact_value(390.0, TrigFunction::Sin), Some("1/2"));
        assert_eq!(exact_value(-30.0, TrigFunction::Sin), Some("-1/2"));
        assert_eq!(exact_value(360.0, TrigFunction::Cos), Some("1"));
    }

    #[test]
    fn test_reciprocals_have_no_entry() {
        assert_eq!(exact_value(30.0, TrigFunction::Csc), None);
        assert_eq!(exact_value(60.0, TrigFunction::Cot), None);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(exact_value(f64::NAN, TrigFunction::Sin), None);
        assert_eq!(exact_value(f64::INFINITY, TrigFunction::Sin), None);
    }
}
