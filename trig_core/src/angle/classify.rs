//! # Angle Classification
//!
//! Standard-position quadrant and reference angle for an angle in degrees.
//! Both are periodic: any multiple of 360° added to the input gives the same
//! answer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reduce an angle in degrees to the equivalent value in [0, 360).
#[inline]
pub fn normalize(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Add `turns` full revolutions to an angle in degrees.
#[inline]
pub fn coterminal(degrees: f64, turns: i32) -> f64 {
    degrees + 360.0 * f64::from(turns)
}

/// Where the terminal side of an angle in standard position lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
    #[serde(rename = "+x axis")]
    PositiveX,
    #[serde(rename = "+y axis")]
    PositiveY,
    #[serde(rename = "-x axis")]
    NegativeX,
    #[serde(rename = "-y axis")]
    NegativeY,
}

impl Quadrant {
    /// True when the terminal side lies on an axis rather than inside a quadrant.
    pub fn is_axis(&self) -> bool {
        matches!(
            self,
            Quadrant::PositiveX | Quadrant::PositiveY | Quadrant::NegativeX | Quadrant::NegativeY
        )
    }

    /// Display label (`"II"`, `"+y axis"`, ...)
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::I => "I",
            Quadrant::II => "II",
            Quadrant::III => "III",
            Quadrant::IV => "IV",
            Quadrant::PositiveX => "+x axis",
            Quadrant::PositiveY => "+y axis",
            Quadrant::NegativeX => "-x axis",
            Quadrant::NegativeY => "-y axis",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an angle in degrees by the position of its terminal side.
///
/// Axis checks are exact comparisons on the normalized angle.
pub fn quadrant(degrees: f64) -> Quadrant {
    let n = normalize(degrees);
    if n == 0.0 || n == 360.0 {
        Quadrant::PositiveX
    } else if n == 90.0 {
        Quadrant::PositiveY
    } else if n == 180.0 {
        Quadrant::NegativeX
    } else if n == 270.0 {
        Quadrant::NegativeY
    } else if n < 90.0 {
        Quadrant::I
    } else if n < 180.0 {
        Quadrant::II
    } else if n < 270.0 {
        Quadrant::III
    } else {
        Quadrant::IV
    }
}

/// Acute angle between the terminal side and the x-axis, in [0, 90].
pub fn reference_angle(degrees: f64) -> f64 {
    let n = normalize(degrees);
    if n <= 90.0 {
        n
    } else if n <= 180.0 {
        180.0 - n
    } else if n <= 270.0 {
        n - 180.0
    } else {
        360.0 - n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(-30.0), 330.0);
        assert_eq!(normalize(720.0), 0.0);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(quadrant(45.0), Quadrant::I);
        assert_eq!(quadrant(135.0), Quadrant::II);
        assert_eq!(quadrant(200.0), Quadrant::III);
        assert_eq!(quadrant(300.0), Quadrant::IV);
        assert_eq!(quadrant(-30.0), Quadrant::IV);
    }

    #[test]
    fn test_axes() {
        assert_eq!(quadrant(0.0), Quadrant::PositiveX);
        assert_eq!(quadrant(360.0), Quadrant::PositiveX);
        assert_eq!(quadrant(90.0), Quadrant::PositiveY);
        assert_eq!(quadrant(180.0), Quadrant::NegativeX);
        assert_eq!(quadrant(-90.0), Quadrant::NegativeY);
        assert!(quadrant(270.0).is_axis());
        assert!(!quadrant(271.0).is_axis());
    }

    #[test]
    fn test_quadrant_labels() {
        assert_eq!(quadrant(90.0).to_string(), "+y axis");
        assert_eq!(quadrant(100.0).to_string(), "II");
        let json = serde_json::to_string(&Quadrant::NegativeX).unwrap();
        assert_eq!(json, "\"-x axis\"");
    }

    #[test]
    fn test_quadrant_is_periodic() {
        for angle in [15.0, 95.0, 181.5, 275.0, 0.0, 90.0, -45.0] {
            let expected = quadrant(angle);
            for turns in -3..=3 {
                assert_eq!(quadrant(coterminal(angle, turns)), expected, "angle {} turns {}", angle, turns);
            }
        }
    }

    #[test]
    fn test_reference_angles() {
        assert_eq!(reference_angle(150.0), 30.0);
        assert_eq!(reference_angle(200.0), 20.0);
        assert_eq!(reference_angle(300.0), 60.0);
        assert_eq!(reference_angle(45.0), 45.0);
        assert_eq!(reference_angle(-120.0), 60.0);
    }
}
