//! # Angles
//!
//! Angles are plain `f64` values. Whether a value is in degrees or radians is
//! carried alongside it as an [`AngleMode`] and never inferred from the value.
//!
//! ## Modules
//!
//! - [`classify`] - Normalization, quadrant and reference angle
//! - [`exact`] - Exact symbolic values at multiples of 30° and 45°
//! - [`dms`] - Degrees-minutes-seconds conversion
//! - [`functions`] - Names of the trigonometric and inverse functions
//!
//! ## Example
//!
//! ```rust
//! use trig_core::angle::{quadrant, reference_angle, AngleMode, Quadrant};
//!
//! let degrees = AngleMode::Radians.to_degrees(std::f64::consts::PI / 4.0);
//! assert!((degrees - 45.0).abs() < 1e-9);
//! assert_eq!(quadrant(-30.0), Quadrant::IV);
//! assert_eq!(reference_angle(150.0), 30.0);
//! ```

pub mod classify;
pub mod dms;
pub mod exact;
pub mod functions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrigError;

pub use classify::{coterminal, normalize, quadrant, reference_angle, Quadrant};
pub use dms::{format_dms, Dms};
pub use exact::{exact_value, SPECIAL_ANGLES};
pub use functions::{InverseFunction, TrigFunction};

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Unit an angle value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Convert a value in this unit to degrees.
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleMode::Degrees => value,
            AngleMode::Radians => to_degrees(value),
        }
    }

    /// Convert a value in this unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleMode::Degrees => to_radians(value),
            AngleMode::Radians => value,
        }
    }

    /// Convert a value in radians to this unit.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleMode::Degrees => to_degrees(radians),
            AngleMode::Radians => radians,
        }
    }

    /// Lowercase unit name for prompts and derivations.
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Degrees => "degrees",
            AngleMode::Radians => "radians",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Degrees => write!(f, "Degrees (DEG)"),
            AngleMode::Radians => write!(f, "Radians (RAD)"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = TrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleMode::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleMode::Radians),
            other => Err(TrigError::invalid_input(
                "angle_mode",
                other,
                "Expected 'degrees' or 'radians'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_conversions() {
        assert!((to_radians(180.0) - PI).abs() < 1e-12);
        assert!((to_degrees(PI / 2.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_mode_conversions() {
        assert_eq!(AngleMode::Degrees.to_degrees(30.0), 30.0);
        assert!((AngleMode::Degrees.to_radians(30.0) - PI / 6.0).abs() < 1e-12);
        assert!((AngleMode::Radians.to_degrees(PI) - 180.0).abs() < 1e-12);
        assert!((AngleMode::Degrees.from_radians(PI) - 180.0).abs() < 1e-12);
        assert_eq!(AngleMode::Radians.from_radians(1.0), 1.0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("RAD".parse::<AngleMode>().unwrap(), AngleMode::Radians);
        assert_eq!("degrees".parse::<AngleMode>().unwrap(), AngleMode::Degrees);
        assert!("gradians".parse::<AngleMode>().is_err());
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&AngleMode::Radians).unwrap();
        assert_eq!(json, "\"radians\"");
    }
}
