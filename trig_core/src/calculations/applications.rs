//! # Right Triangle Applications
//!
//! Angle of elevation, angle of depression and bearing problems. Angles are
//! always in degrees here, matching how these problems are stated.
//!
//! ```rust
//! use trig_core::calculations::applications::parse_bearing;
//!
//! assert_eq!(parse_bearing("N30°E"), Some(30.0));
//! assert_eq!(parse_bearing("s45w"), Some(225.0));
//! assert_eq!(parse_bearing("120"), Some(120.0));
//! assert_eq!(parse_bearing("east-ish"), None);
//! ```

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::angle::to_radians;
use crate::derivation::Derivation;
use crate::errors::{require_finite, TrigError, TrigResult};
use crate::expression::{format_number, parse_number, ZERO_EPSILON};

static QUADRANT_BEARING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([NS])([0-9]+(?:\.[0-9]+)?)°?([EW])").expect("bearing pattern is valid")
});

// ============================================================================
// Angle of Elevation / Depression
// ============================================================================

/// Observer at a known horizontal distance looking up at angle θ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationInput {
    pub distance: f64,
    pub angle_deg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationResult {
    pub height: f64,
    pub tangent: f64,
    pub steps: Derivation,
}

/// height = distance × tan(θ)
pub fn elevation(input: &ElevationInput) -> TrigResult<ElevationResult> {
    require_finite("distance", input.distance)?;
    require_finite("angle_deg", input.angle_deg)?;

    let rad = to_radians(input.angle_deg);
    if rad.cos().abs() < ZERO_EPSILON {
        return Err(TrigError::domain_error("tan", "Tangent is undefined at this angle"));
    }
    let tangent = rad.tan();
    let height = input.distance * tangent;

    let d = format_number(input.distance);
    let ang = format_number(input.angle_deg);
    let mut steps = Derivation::new("Angle of Elevation Problem");
    steps.given(format!("Horizontal distance = {} units", d));
    steps.given(format!("Angle of elevation = {}°", ang));
    steps.step(
        "Set up the right triangle",
        [
            "• The horizontal distance is the adjacent side",
            "• The height is the opposite side",
            "• The angle is measured from horizontal upward",
        ],
    );
    steps.step(
        "Use tangent ratio",
        [
            "tan(θ) = opposite/adjacent = height/distance".to_string(),
            format!("tan({}°) = height/{}", ang, d),
        ],
    );
    steps.step(
        "Solve for height",
        [
            "height = distance × tan(θ)".to_string(),
            format!("height = {} × tan({}°)", d, ang),
            format!("height = {} × {}", d, format_number(tangent)),
            format!("height = {} units", format_number(height)),
        ],
    );

    Ok(ElevationResult { height, tangent, steps })
}

/// Observer at a known height looking down at angle θ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepressionInput {
    pub height: f64,
    pub angle_deg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepressionResult {
    pub distance: f64,
    pub tangent: f64,
    pub steps: Derivation,
}

/// distance = height / tan(θ)
pub fn depression(input: &DepressionInput) -> TrigResult<DepressionResult> {
    require_finite("height", input.height)?;
    require_finite("angle_deg", input.angle_deg)?;

    let rad = to_radians(input.angle_deg);
    if rad.cos().abs() < ZERO_EPSILON {
        return Err(TrigError::domain_error("tan", "Tangent is undefined at this angle"));
    }
    let tangent = rad.tan();
    if tangent.abs() < ZERO_EPSILON {
        return Err(TrigError::domain_error(
            "distance = height/tan(θ)",
            "Angle of depression cannot be 0°",
        ));
    }
    let distance = input.height / tangent;

    let h = format_number(input.height);
    let ang = format_number(input.angle_deg);
    let mut steps = Derivation::new("Angle of Depression Problem");
    steps.given(format!("Observer height = {} units", h));
    steps.given(format!("Angle of depression = {}°", ang));
    steps.step(
        "Set up the right triangle",
        [
            "• The height is the opposite side",
            "• The horizontal distance is the adjacent side",
            "• Angle of depression = angle of elevation (alternate interior angles)",
        ],
    );
    steps.step(
        "Use tangent ratio",
        [
            "tan(θ) = opposite/adjacent = height/distance".to_string(),
            format!("tan({}°) = {}/distance", ang, h),
        ],
    );
    steps.step(
        "Solve for distance",
        [
            "distance = height/tan(θ)".to_string(),
            format!("distance = {}/tan({}°)", h, ang),
            format!("distance = {}/{}", h, format_number(tangent)),
            format!("distance = {} units", format_number(distance)),
        ],
    );

    Ok(DepressionResult { distance, tangent, steps })
}

// ============================================================================
// Bearings
// ============================================================================

/// Parse a bearing into degrees clockwise from north.
///
/// Accepts quadrant bearings such as `N30°E` or `S45W` (case-insensitive, the
/// degree sign is optional) and plain numbers accepted by
/// [`parse_number`](crate::expression::parse_number).
pub fn parse_bearing(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some(caps) = QUADRANT_BEARING.captures(text) {
        let angle: f64 = caps[2].parse().ok()?;
        let ns = caps[1].to_ascii_uppercase();
        let ew = caps[3].to_ascii_uppercase();
        let azimuth = match (ns.as_str(), ew.as_str()) {
            ("N", "E") => angle,
            ("S", "E") => 180.0 - angle,
            ("S", "W") => 180.0 + angle,
            _ => 360.0 - angle,
        };
        debug!("bearing '{}' -> azimuth {}", text, azimuth);
        return Some(azimuth);
    }
    parse_number(text)
}

/// Distance travelled along a bearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearingInput {
    pub distance: f64,
    /// Quadrant bearing (`N30°E`) or azimuth in degrees
    pub bearing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearingResult {
    /// Degrees clockwise from north
    pub azimuth_deg: f64,
    /// Signed north component (negative = south)
    pub north: f64,
    /// Signed east component (negative = west)
    pub east: f64,
    pub steps: Derivation,
}

impl BearingResult {
    /// e.g. "8.660254 N"
    pub fn north_south_display(&self) -> String {
        let dir = if self.north >= 0.0 { 'N' } else { 'S' };
        format!("{} {}", format_number(self.north.abs()), dir)
    }

    /// e.g. "5 E"
    pub fn east_west_display(&self) -> String {
        let dir = if self.east >= 0.0 { 'E' } else { 'W' };
        format!("{} {}", format_number(self.east.abs()), dir)
    }
}

/// North/south and east/west components of travel along a bearing.
pub fn bearing(input: &BearingInput) -> TrigResult<BearingResult> {
    require_finite("distance", input.distance)?;
    if input.bearing.trim().is_empty() {
        return Err(TrigError::missing_field("bearing"));
    }
    let azimuth_deg = parse_bearing(&input.bearing).ok_or_else(|| {
        TrigError::invalid_input(
            "bearing",
            input.bearing.trim(),
            "Invalid bearing format. Use 'N30°E' or numeric degrees.",
        )
    })?;

    let rad = to_radians(azimuth_deg);
    let north = input.distance * rad.cos();
    let east = input.distance * rad.sin();

    let mut steps = Derivation::new("Bearing Problem");
    steps.given(format!("Distance = {}", format_number(input.distance)));
    steps.given(format!("Bearing = {}", input.bearing.trim()));
    steps.step(
        "Convert to azimuth (clockwise from north)",
        [format!("θ = {}°", format_number(azimuth_deg))],
    );
    steps.step(
        "Resolve components",
        [
            format!(
                "N/S = d × cos(θ) = {} × cos({}°) = {}",
                format_number(input.distance),
                format_number(azimuth_deg),
                format_number(north)
            ),
            format!(
                "E/W = d × sin(θ) = {} × sin({}°) = {}",
                format_number(input.distance),
                format_number(azimuth_deg),
                format_number(east)
            ),
        ],
    );

    Ok(BearingResult {
        azimuth_deg,
        north,
        east,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation() {
        let result = elevation(&ElevationInput {
            distance: 100.0,
            angle_deg: 45.0,
        })
        .unwrap();
        assert!((result.height - 100.0).abs() < 1e-9);
        assert!(result.steps.to_string().contains("height = 100 units"));
    }

    #[test]
    fn test_elevation_vertical_rejected() {
        let input = ElevationInput {
            distance: 10.0,
            angle_deg: 90.0,
        };
        assert_eq!(elevation(&input).unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_depression() {
        let result = depression(&DepressionInput {
            height: 50.0,
            angle_deg: 45.0,
        })
        .unwrap();
        assert!((result.distance - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_depression_flat_rejected() {
        let input = DepressionInput {
            height: 50.0,
            angle_deg: 0.0,
        };
        assert!(depression(&input).is_err());
    }

    #[test]
    fn test_parse_bearing_quadrants() {
        assert_eq!(parse_bearing("N30°E"), Some(30.0));
        assert_eq!(parse_bearing("S30E"), Some(150.0));
        assert_eq!(parse_bearing("S30°W"), Some(210.0));
        assert_eq!(parse_bearing("n30w"), Some(330.0));
        assert_eq!(parse_bearing("N12.5E"), Some(12.5));
    }

    #[test]
    fn test_parse_bearing_numeric() {
        assert_eq!(parse_bearing("270"), Some(270.0));
        assert_eq!(parse_bearing("E30N"), None);
    }

    #[test]
    fn test_bearing_components() {
        let result = bearing(&BearingInput {
            distance: 10.0,
            bearing: "S60°W".to_string(),
        })
        .unwrap();
        assert_eq!(result.azimuth_deg, 240.0);
        assert!((result.north + 5.0).abs() < 1e-9);
        assert!((result.east + 8.660254038).abs() < 1e-8);
        assert_eq!(result.north_south_display(), "5 S");
        assert_eq!(result.east_west_display(), "8.660254 W");
    }

    #[test]
    fn test_bearing_invalid() {
        let input = BearingInput {
            distance: 10.0,
            bearing: "somewhere".to_string(),
        };
        assert_eq!(bearing(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let blank = BearingInput {
            distance: 10.0,
            bearing: " ".to_string(),
        };
        assert_eq!(bearing(&blank).unwrap_err().error_code(), "MISSING_FIELD");
    }
}
