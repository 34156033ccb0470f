//! # Degrees-Minutes-Seconds
//!
//! ```rust
//! use trig_core::angle::format_dms;
//!
//! assert_eq!(format_dms(45.5), "45° 30' 0\"");
//! assert_eq!(format_dms(-12.2575), "-12° 15' 27\"");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expression::format_number_to;

/// An angle split into whole degrees, whole minutes and decimal seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub negative: bool,
    /// Whole degrees, kept as a float so very large angles do not saturate
    pub degrees: f64,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    /// Split a decimal angle in degrees.
    ///
    /// Seconds are kept to two decimals; a value that would display as
    /// 60 seconds carries into the minutes (and 60 minutes into the degrees).
    pub fn from_degrees(degrees: f64) -> Self {
        let negative = degrees < 0.0;
        let magnitude = degrees.abs();

        let mut whole_degrees = magnitude.trunc();
        let minutes_float = (magnitude - magnitude.trunc()) * 60.0;
        let mut minutes = minutes_float.trunc() as u32;
        let mut seconds = (minutes_float - minutes_float.trunc()) * 60.0;

        if (seconds * 100.0).round() >= 6000.0 {
            seconds = 0.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            whole_degrees += 1.0;
        }

        Dms {
            negative,
            degrees: whole_degrees,
            minutes,
            seconds,
        }
    }

}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}° {}' {}\"",
            if self.negative { "-" } else { "" },
            format_number_to(self.degrees, 0),
            self.minutes,
            format_number_to(self.seconds, 2)
        )
    }
}

/// Render a decimal angle in degrees as `D° M' S"`.
pub fn format_dms(degrees: f64) -> String {
    Dms::from_degrees(degrees).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_degrees() {
        assert_eq!(format_dms(30.0), "30° 0' 0\"");
        assert_eq!(format_dms(0.0), "0° 0' 0\"");
    }

    #[test]
    fn test_fractional_degrees() {
        let dms = Dms::from_degrees(45.5125);
        assert_eq!(dms.degrees, 45.0);
        assert_eq!(dms.minutes, 30);
        assert!((dms.seconds - 45.0).abs() < 1e-6);
        assert_eq!(format_dms(45.5125), "45° 30' 45\"");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_dms(-12.2575), "-12° 15' 27\"");
        assert!(Dms::from_degrees(-1.5).negative);
    }

    #[test]
    fn test_seconds_carry() {
        // 29.9999999° would otherwise print as 29° 59' 60"
        assert_eq!(format_dms(29.9999999), "30° 0' 0\"");
    }

    #[test]
    fn test_huge_angle_keeps_magnitude() {
        let dms = Dms::from_degrees(1e20);
        assert_eq!(dms.degrees, 1e20);
        assert_eq!(format_dms(1e20), "100000000000000000000° 0' 0\"");
    }
}
