//! # Expression Core
//!
//! Text in, text out: [`parser`] turns user-entered strings such as `"π/3"`
//! or `"√2"` into `f64`, and [`format`] turns results back into readable
//! strings such as `"π/3"`, `"0.707107"` or `"3 - 4i"`.
//!
//! Everything here is a pure function on primitive values. Angle units are
//! never inferred; callers track whether a value is in degrees or radians.

pub mod format;
pub mod parser;

pub use format::{
    format_angle,
    format_complex,
    format_degrees,
    format_number,
    format_number_to,
    format_radians,
    DEFAULT_DECIMALS,
    PI_FRACTIONS,
    PI_FRACTION_TOLERANCE,
    ZERO_EPSILON,
};

pub use parser::{parse_field, parse_field_or, parse_number, parse_optional_field};
