//! # Angles & Arcs
//!
//! Angle conversion (degrees, radians, DMS, quadrant), arc length and sector
//! area, and the linear/angular speed relation v = rω.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::angle::{AngleMode, Quadrant};
//! use trig_core::calculations::angles::{convert_angle, AngleConversionInput};
//!
//! let input = AngleConversionInput { value: 150.0, unit: AngleMode::Degrees };
//! let result = convert_angle(&input).unwrap();
//!
//! assert_eq!(result.radians_display, "5π/6");
//! assert_eq!(result.quadrant, Quadrant::II);
//! assert_eq!(result.reference_angle, 30.0);
//! ```

use std::f64::consts::PI;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angle::{self, AngleMode, Dms, Quadrant};
use crate::derivation::Derivation;
use crate::errors::{require_finite, require_positive, TrigError, TrigResult};
use crate::expression::{format_degrees, format_number, format_radians, ZERO_EPSILON};

// ============================================================================
// Angle Conversion
// ============================================================================

/// An angle to convert and classify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleConversionInput {
    pub value: f64,
    /// Unit `value` is expressed in
    pub unit: AngleMode,
}

impl AngleConversionInput {
    pub fn validate(&self) -> TrigResult<()> {
        require_finite("value", self.value)?;
        Ok(())
    }
}

/// Every representation of the converted angle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleConversionResult {
    pub degrees: f64,
    pub radians: f64,
    /// Radians as a multiple of π when possible (e.g. "π/4")
    pub radians_display: String,
    pub dms: Dms,
    /// Equivalent angle in [0, 360)
    pub normalized_degrees: f64,
    pub quadrant: Quadrant,
    pub reference_angle: f64,
    /// The angle plus one full revolution
    pub coterminal_degrees: f64,
    pub steps: Derivation,
}

/// Convert an angle between units and classify it.
pub fn convert_angle(input: &AngleConversionInput) -> TrigResult<AngleConversionResult> {
    input.validate()?;

    let degrees = input.unit.to_degrees(input.value);
    let radians = input.unit.to_radians(input.value);
    let radians_display = format_radians(radians);
    let dms = Dms::from_degrees(degrees);
    let normalized_degrees = angle::normalize(degrees);
    let quadrant = angle::quadrant(degrees);
    let reference_angle = angle::reference_angle(degrees);
    let coterminal_degrees = angle::coterminal(degrees, 1);

    let mut steps = Derivation::new("Angle Conversion");
    steps.given(format!("{} ({})", format_number(input.value), input.unit.label()));
    steps.step(
        "Convert to decimal degrees",
        [format!("{} = {}", format_number(input.value), format_degrees(degrees))],
    );
    steps.step(
        "Convert to radians",
        [
            "Radians = Degrees × (π/180)".to_string(),
            format!("{} × (π/180) = {} rad", format_degrees(degrees), format_number(radians)),
            format!("= {}", radians_display),
        ],
    );
    let placement = if quadrant.is_axis() {
        format!("This angle lies on the {}", quadrant)
    } else {
        format!("This angle is in Quadrant {}", quadrant)
    };
    steps.step(
        "Find the quadrant",
        [
            format!(
                "Normalize: {} mod 360° = {}",
                format_degrees(degrees),
                format_degrees(normalized_degrees)
            ),
            placement,
        ],
    );
    steps.step(
        "Find the reference angle",
        [format!("Reference angle = {}", format_degrees(reference_angle))],
    );
    steps.step(
        "Convert to DMS",
        [format!("{} = {}", format_degrees(degrees), dms)],
    );

    Ok(AngleConversionResult {
        degrees,
        radians,
        radians_display,
        dms,
        normalized_degrees,
        quadrant,
        reference_angle,
        coterminal_degrees,
        steps,
    })
}

// ============================================================================
// Arc Length & Sector
// ============================================================================

/// Circle radius and central angle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcSectorInput {
    pub radius: f64,
    pub angle: f64,
    pub unit: AngleMode,
}

impl ArcSectorInput {
    pub fn validate(&self) -> TrigResult<()> {
        require_positive("radius", self.radius)?;
        require_finite("angle", self.angle)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcSectorResult {
    pub angle_radians: f64,
    /// s = rθ
    pub arc_length: f64,
    /// A = ½r²θ
    pub sector_area: f64,
    pub circumference: f64,
    pub circle_area: f64,
    /// Arc length as a percentage of the circumference
    pub arc_percent: f64,
    /// Sector area as a percentage of the circle area
    pub sector_percent: f64,
    pub steps: Derivation,
}

/// Arc length and sector area for a central angle.
pub fn arc_sector(input: &ArcSectorInput) -> TrigResult<ArcSectorResult> {
    input.validate()?;

    let r = input.radius;
    let theta = input.unit.to_radians(input.angle);
    let arc_length = r * theta;
    let sector_area = 0.5 * r * r * theta;
    let circumference = 2.0 * PI * r;
    let circle_area = PI * r * r;
    let arc_percent = arc_length / circumference * 100.0;
    let sector_percent = sector_area / circle_area * 100.0;

    let mut steps = Derivation::new("Arc Length & Sector Area");
    steps.given(format!("Radius r = {}", format_number(r)));
    steps.given(format!(
        "Central angle θ = {} {}",
        format_number(input.angle),
        input.unit.label()
    ));
    if input.unit == AngleMode::Degrees {
        steps.given(format!(
            "  → θ in radians = {}° × (π/180) = {} rad",
            format_number(input.angle),
            format_number(theta)
        ));
    }
    steps.step(
        "Calculate Arc Length",
        [
            "Formula: s = rθ (θ must be in radians)".to_string(),
            format!("s = {} × {}", format_number(r), format_number(theta)),
            format!("s = {} units", format_number(arc_length)),
        ],
    );
    steps.step(
        "Calculate Sector Area",
        [
            "Formula: A = ½r²θ (θ must be in radians)".to_string(),
            format!("A = ½ × {}² × {}", format_number(r), format_number(theta)),
            format!("A = ½ × {} × {}", format_number(r * r), format_number(theta)),
            format!("A = {} square units", format_number(sector_area)),
        ],
    );
    steps.step(
        "Comparison with full circle",
        [
            format!(
                "Full circumference = 2πr = 2π × {} = {}",
                format_number(r),
                format_number(circumference)
            ),
            format!("Arc is {}% of circumference", format_number(arc_percent)),
            format!("Full area = πr² = π × {}² = {}", format_number(r), format_number(circle_area)),
            format!("Sector is {}% of circle", format_number(sector_percent)),
        ],
    );

    Ok(ArcSectorResult {
        angle_radians: theta,
        arc_length,
        sector_area,
        circumference,
        circle_area,
        arc_percent,
        sector_percent,
        steps,
    })
}

// ============================================================================
// Linear & Angular Speed
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Meters,
    Centimeters,
    Feet,
}

impl LengthUnit {
    /// Meters per unit
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Feet => 0.3048,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Feet => "feet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngularSpeedUnit {
    #[default]
    RadPerSec,
    Rpm,
    DegPerSec,
}

impl AngularSpeedUnit {
    /// rad/s per unit
    pub fn factor(&self) -> f64 {
        match self {
            AngularSpeedUnit::RadPerSec => 1.0,
            AngularSpeedUnit::Rpm => 2.0 * PI / 60.0,
            AngularSpeedUnit::DegPerSec => PI / 180.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AngularSpeedUnit::RadPerSec => "rad/s",
            AngularSpeedUnit::Rpm => "rpm",
            AngularSpeedUnit::DegPerSec => "deg/s",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearSpeedUnit {
    #[default]
    MetersPerSec,
    KmPerHour,
    Mph,
}

impl LinearSpeedUnit {
    /// m/s per unit
    pub fn factor(&self) -> f64 {
        match self {
            LinearSpeedUnit::MetersPerSec => 1.0,
            LinearSpeedUnit::KmPerHour => 1.0 / 3.6,
            LinearSpeedUnit::Mph => 0.44704,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinearSpeedUnit::MetersPerSec => "m/s",
            LinearSpeedUnit::KmPerHour => "km/h",
            LinearSpeedUnit::Mph => "mph",
        }
    }
}

/// Any two of radius, angular speed and linear speed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AngularSpeedInput {
    pub radius: Option<f64>,
    pub angular_speed: Option<f64>,
    pub linear_speed: Option<f64>,
    #[serde(default)]
    pub length_unit: LengthUnit,
    #[serde(default)]
    pub angular_unit: AngularSpeedUnit,
    #[serde(default)]
    pub linear_unit: LinearSpeedUnit,
}

impl AngularSpeedInput {
    pub fn validate(&self) -> TrigResult<()> {
        let provided = [
            ("radius", self.radius),
            ("angular_speed", self.angular_speed),
            ("linear_speed", self.linear_speed),
        ];
        for (field, value) in provided {
            if let Some(v) = value {
                require_finite(field, v)?;
            }
        }
        let count = provided.iter().filter(|(_, v)| v.is_some()).count();
        if count < 2 {
            return Err(TrigError::calculation_failed(
                "Linear & Angular Speed",
                "Please enter at least two values",
            ));
        }
        Ok(())
    }
}

/// Which quantity was computed from the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvedQuantity {
    Radius,
    AngularSpeed,
    LinearSpeed,
}

impl fmt::Display for SolvedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolvedQuantity::Radius => write!(f, "radius"),
            SolvedQuantity::AngularSpeed => write!(f, "angular speed"),
            SolvedQuantity::LinearSpeed => write!(f, "linear speed"),
        }
    }
}

/// All three quantities, in the caller's units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngularSpeedResult {
    pub radius: f64,
    pub angular_speed: f64,
    pub linear_speed: f64,
    pub solved: SolvedQuantity,
    pub steps: Derivation,
}

/// Solve v = rω for whichever quantity is missing.
///
/// When all three are supplied the linear speed is recomputed.
pub fn angular_speed(input: &AngularSpeedInput) -> TrigResult<AngularSpeedResult> {
    input.validate()?;

    let r_factor = input.length_unit.factor();
    let w_factor = input.angular_unit.factor();
    let v_factor = input.linear_unit.factor();

    let mut steps = Derivation::new("Linear & Angular Speed (v = rω)");

    let (radius, angular_speed, linear_speed, solved) =
        match (input.radius, input.angular_speed, input.linear_speed) {
            (None, Some(w), Some(v)) => {
                let w_base = w * w_factor;
                if w_base.abs() < ZERO_EPSILON {
                    return Err(TrigError::domain_error("r = v/ω", "Angular speed cannot be zero"));
                }
                let r_base = v * v_factor / w_base;
                steps.step(
                    "Solve for radius",
                    [
                        "r = v/ω".to_string(),
                        format!(
                            "r = {} m/s / {} rad/s = {} m",
                            format_number(v * v_factor),
                            format_number(w_base),
                            format_number(r_base)
                        ),
                    ],
                );
                (r_base / r_factor, w, v, SolvedQuantity::Radius)
            }
            (Some(r), None, Some(v)) => {
                let r_base = r * r_factor;
                if r_base.abs() < ZERO_EPSILON {
                    return Err(TrigError::domain_error("ω = v/r", "Radius cannot be zero"));
                }
                let w_base = v * v_factor / r_base;
                steps.step(
                    "Solve for angular speed",
                    [
                        "ω = v/r".to_string(),
                        format!(
                            "ω = {} m/s / {} m = {} rad/s",
                            format_number(v * v_factor),
                            format_number(r_base),
                            format_number(w_base)
                        ),
                    ],
                );
                (r, w_base / w_factor, v, SolvedQuantity::AngularSpeed)
            }
            (Some(r), Some(w), _) => {
                let v_base = r * r_factor * w * w_factor;
                steps.step(
                    "Solve for linear speed",
                    [
                        "v = rω".to_string(),
                        format!(
                            "v = {} m × {} rad/s = {} m/s",
                            format_number(r * r_factor),
                            format_number(w * w_factor),
                            format_number(v_base)
                        ),
                    ],
                );
                (r, w, v_base / v_factor, SolvedQuantity::LinearSpeed)
            }
            // validate() guarantees two of the three are present
            _ => {
                return Err(TrigError::calculation_failed(
                    "Linear & Angular Speed",
                    "Please enter at least two values",
                ))
            }
        };

    debug!("angular speed: solved for {}", solved);
    steps.step(
        "Convert to requested units",
        [
            format!("r = {} {}", format_number(radius), input.length_unit.label()),
            format!("ω = {} {}", format_number(angular_speed), input.angular_unit.label()),
            format!("v = {} {}", format_number(linear_speed), input.linear_unit.label()),
        ],
    );

    Ok(AngularSpeedResult {
        radius,
        angular_speed,
        linear_speed,
        solved,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_degrees() {
        let result = convert_angle(&AngleConversionInput {
            value: 45.0,
            unit: AngleMode::Degrees,
        })
        .unwrap();
        assert!((result.radians - PI / 4.0).abs() < 1e-12);
        assert_eq!(result.radians_display, "π/4");
        assert_eq!(result.quadrant, Quadrant::I);
        assert_eq!(result.coterminal_degrees, 405.0);
        assert_eq!(result.dms.to_string(), "45° 0' 0\"");
    }

    #[test]
    fn test_convert_radians() {
        let result = convert_angle(&AngleConversionInput {
            value: -PI / 6.0,
            unit: AngleMode::Radians,
        })
        .unwrap();
        assert!((result.degrees + 30.0).abs() < 1e-9);
        assert!((result.normalized_degrees - 330.0).abs() < 1e-9);
        assert_eq!(result.quadrant, Quadrant::IV);
        assert_eq!(result.radians_display, "-π/6");
        assert_eq!(result.steps.step_count(), 5);
    }

    #[test]
    fn test_convert_axis_wording() {
        let result = convert_angle(&AngleConversionInput {
            value: 90.0,
            unit: AngleMode::Degrees,
        })
        .unwrap();
        assert!(result.steps.to_string().contains("lies on the +y axis"));
    }

    #[test]
    fn test_arc_sector() {
        let result = arc_sector(&ArcSectorInput {
            radius: 5.0,
            angle: 90.0,
            unit: AngleMode::Degrees,
        })
        .unwrap();
        assert!((result.arc_length - 5.0 * PI / 2.0).abs() < 1e-9);
        assert!((result.sector_area - 25.0 * PI / 4.0).abs() < 1e-9);
        assert!((result.arc_percent - 25.0).abs() < 1e-9);
        assert!((result.sector_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_arc_sector_rejects_bad_radius() {
        let input = ArcSectorInput {
            radius: 0.0,
            angle: 1.0,
            unit: AngleMode::Radians,
        };
        assert_eq!(arc_sector(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_solve_linear_speed() {
        let result = angular_speed(&AngularSpeedInput {
            radius: Some(2.0),
            angular_speed: Some(3.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(result.solved, SolvedQuantity::LinearSpeed);
        assert!((result.linear_speed - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_radius_with_units() {
        // 60 rpm = 2π rad/s; v = 2π m/s → r = 1 m = 100 cm
        let result = angular_speed(&AngularSpeedInput {
            radius: None,
            angular_speed: Some(60.0),
            linear_speed: Some(2.0 * PI),
            length_unit: LengthUnit::Centimeters,
            angular_unit: AngularSpeedUnit::Rpm,
            linear_unit: LinearSpeedUnit::MetersPerSec,
        })
        .unwrap();
        assert_eq!(result.solved, SolvedQuantity::Radius);
        assert!((result.radius - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_angular_speed() {
        let result = angular_speed(&AngularSpeedInput {
            radius: Some(0.5),
            linear_speed: Some(36.0),
            linear_unit: LinearSpeedUnit::KmPerHour,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(result.solved, SolvedQuantity::AngularSpeed);
        assert!((result.angular_speed - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_needs_two_values() {
        let input = AngularSpeedInput {
            radius: Some(1.0),
            ..Default::default()
        };
        assert!(angular_speed(&input).is_err());
    }

    #[test]
    fn test_zero_angular_speed_rejected() {
        let input = AngularSpeedInput {
            angular_speed: Some(0.0),
            linear_speed: Some(3.0),
            ..Default::default()
        };
        assert_eq!(angular_speed(&input).unwrap_err().error_code(), "DOMAIN_ERROR");
    }
}
