//! # Vectors
//!
//! Two-dimensional vector arithmetic and single-vector analysis.
//!
//! ```rust
//! use trig_core::calculations::vectors::{operate, Vector2, VectorOp, VectorOpInput, VectorValue};
//! use trig_core::angle::AngleMode;
//!
//! let input = VectorOpInput {
//!     u: Vector2::new(3.0, 4.0),
//!     v: Vector2::new(1.0, 2.0),
//!     op: VectorOp::Dot,
//!     angle_mode: AngleMode::Degrees,
//! };
//! let result = operate(&input).unwrap();
//! assert_eq!(result.value, VectorValue::Scalar { value: 11.0 });
//! ```

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::angle::AngleMode;
use crate::derivation::Derivation;
use crate::errors::{require_finite, TrigError, TrigResult};
use crate::expression::{format_angle, format_number, ZERO_EPSILON};

/// A vector in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product
    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Direction from the positive x-axis, in radians (-π, π]
    pub fn direction(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unit vector, or the zero vector when the magnitude is negligible.
    pub fn unit(&self) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude > ZERO_EPSILON {
            Vector2::new(self.x / magnitude, self.y / magnitude)
        } else {
            Vector2::default()
        }
    }

    fn check_finite(&self, name: &str) -> TrigResult<()> {
        require_finite(&format!("{}.x", name), self.x)?;
        require_finite(&format!("{}.y", name), self.y)?;
        Ok(())
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_number(self.x), format_number(self.y))
    }
}

// ============================================================================
// Operations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorOp {
    Add,
    Subtract,
    Dot,
    Cross,
    AngleBetween,
}

impl fmt::Display for VectorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorOp::Add => write!(f, "Add (U + V)"),
            VectorOp::Subtract => write!(f, "Subtract (U - V)"),
            VectorOp::Dot => write!(f, "Dot Product (U · V)"),
            VectorOp::Cross => write!(f, "Cross Product (U × V)"),
            VectorOp::AngleBetween => write!(f, "Angle Between"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorOpInput {
    pub u: Vector2,
    pub v: Vector2,
    pub op: VectorOp,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

/// What an operation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VectorValue {
    Vector { vector: Vector2, magnitude: f64 },
    Scalar { value: f64 },
    /// Angle in radians
    Angle { radians: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorOpResult {
    pub value: VectorValue,
    /// Result formatted for display in the requested angle mode
    pub display: String,
    pub steps: Derivation,
}

/// Apply a binary vector operation.
pub fn operate(input: &VectorOpInput) -> TrigResult<VectorOpResult> {
    let (u, v) = (input.u, input.v);
    u.check_finite("u")?;
    v.check_finite("v")?;

    let mut steps = Derivation::new(input.op.to_string());
    steps.given(format!("U = {}", u));
    steps.given(format!("V = {}", v));

    let (value, display) = match input.op {
        VectorOp::Add | VectorOp::Subtract => {
            let (vector, symbol) = if input.op == VectorOp::Add { (u + v, '+') } else { (u - v, '-') };
            let magnitude = vector.magnitude();
            steps.step(
                "Combine components",
                [
                    format!(
                        "U {} V = ({} {} {}, {} {} {})",
                        symbol,
                        format_number(u.x),
                        symbol,
                        format_number(v.x),
                        format_number(u.y),
                        symbol,
                        format_number(v.y)
                    ),
                    format!("U {} V = {}", symbol, vector),
                ],
            );
            steps.step("Magnitude", [format!("|R| = √(x² + y²) = {}", format_number(magnitude))]);
            (VectorValue::Vector { vector, magnitude }, vector.to_string())
        }
        VectorOp::Dot => {
            let dot = u.dot(&v);
            steps.step(
                "Multiply and add components",
                [
                    "U · V = UₓVₓ + UᵧVᵧ".to_string(),
                    format!("U · V = {}", format_number(dot)),
                ],
            );
            steps.note("Dot product is 0 if vectors are perpendicular");
            (VectorValue::Scalar { value: dot }, format_number(dot))
        }
        VectorOp::Cross => {
            let cross = u.cross(&v);
            steps.step(
                "Cross components",
                [
                    "U × V = UₓVᵧ - UᵧVₓ".to_string(),
                    format!("U × V = {}", format_number(cross)),
                ],
            );
            steps.note("This represents the signed area of the parallelogram");
            (VectorValue::Scalar { value: cross }, format_number(cross))
        }
        VectorOp::AngleBetween => {
            let (mag_u, mag_v) = (u.magnitude(), v.magnitude());
            if mag_u < ZERO_EPSILON || mag_v < ZERO_EPSILON {
                return Err(TrigError::domain_error("angle between", "Cannot find angle with zero vector"));
            }
            let cos = (u.dot(&v) / (mag_u * mag_v)).clamp(-1.0, 1.0);
            let radians = cos.acos();
            let display = format_angle(radians, input.angle_mode);
            steps.step(
                "Use the dot product",
                [
                    "cos(θ) = (U · V) / (|U||V|)".to_string(),
                    format!("cos(θ) = {}", format_number(cos)),
                    format!("θ = {}", display),
                ],
            );
            (VectorValue::Angle { radians }, display)
        }
    };

    Ok(VectorOpResult { value, display, steps })
}

// ============================================================================
// Single Vector
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorAnalysisInput {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorAnalysisResult {
    pub magnitude: f64,
    /// Direction in radians
    pub direction: f64,
    pub direction_display: String,
    pub unit: Vector2,
    pub steps: Derivation,
}

/// Magnitude, direction and unit vector.
pub fn analyze(input: &VectorAnalysisInput) -> TrigResult<VectorAnalysisResult> {
    let vector = Vector2::new(input.x, input.y);
    vector.check_finite("vector")?;

    let magnitude = vector.magnitude();
    let direction = vector.direction();
    let direction_display = format_angle(direction, input.angle_mode);
    let unit = vector.unit();

    let mut steps = Derivation::new("Vector Properties");
    steps.given(format!("V = {}", vector));
    steps.step("Magnitude", [format!("|V| = √(x² + y²) = {}", format_number(magnitude))]);
    steps.step("Direction", [format!("θ = atan2(y, x) = {}", direction_display)]);
    steps.step("Unit vector", [format!("V/|V| = {}", unit)]);

    Ok(VectorAnalysisResult {
        magnitude,
        direction,
        direction_display,
        unit,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(op: VectorOp, u: (f64, f64), v: (f64, f64)) -> TrigResult<VectorOpResult> {
        operate(&VectorOpInput {
            u: Vector2::new(u.0, u.1),
            v: Vector2::new(v.0, v.1),
            op,
            angle_mode: AngleMode::Degrees,
        })
    }

    #[test]
    fn test_add_and_subtract() {
        let sum = op(VectorOp::Add, (3.0, 4.0), (1.0, 2.0)).unwrap();
        assert_eq!(sum.display, "(4, 6)");
        match sum.value {
            VectorValue::Vector { magnitude, .. } => assert!((magnitude - 52f64.sqrt()).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }

        let diff = op(VectorOp::Subtract, (3.0, 4.0), (3.0, 4.0)).unwrap();
        assert_eq!(diff.value, VectorValue::Vector { vector: Vector2::default(), magnitude: 0.0 });
    }

    #[test]
    fn test_cross() {
        let result = op(VectorOp::Cross, (1.0, 0.0), (0.0, 1.0)).unwrap();
        assert_eq!(result.value, VectorValue::Scalar { value: 1.0 });
        assert_eq!(result.steps.notes.len(), 1);
    }

    #[test]
    fn test_angle_between() {
        let result = op(VectorOp::AngleBetween, (1.0, 0.0), (0.0, 2.0)).unwrap();
        assert_eq!(result.display, "90°");

        let parallel = op(VectorOp::AngleBetween, (1.0, 0.0), (3.0, 0.0)).unwrap();
        assert_eq!(parallel.display, "0°");
    }

    #[test]
    fn test_angle_between_radians() {
        let result = operate(&VectorOpInput {
            u: Vector2::new(1.0, 0.0),
            v: Vector2::new(-1.0, 0.0),
            op: VectorOp::AngleBetween,
            angle_mode: AngleMode::Radians,
        })
        .unwrap();
        assert_eq!(result.display, "3.141593 rad");
    }

    #[test]
    fn test_angle_with_zero_vector() {
        let err = op(VectorOp::AngleBetween, (0.0, 0.0), (1.0, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_analyze() {
        let result = analyze(&VectorAnalysisInput {
            x: 3.0,
            y: 4.0,
            angle_mode: AngleMode::Degrees,
        })
        .unwrap();
        assert_eq!(result.magnitude, 5.0);
        assert_eq!(result.direction_display, "53.130102°");
        assert_eq!(result.unit, Vector2::new(0.6, 0.8));
    }

    #[test]
    fn test_analyze_zero_vector() {
        let result = analyze(&VectorAnalysisInput {
            x: 0.0,
            y: 0.0,
            angle_mode: AngleMode::Degrees,
        })
        .unwrap();
        assert_eq!(result.unit, Vector2::default());
        assert_eq!(result.direction, 0.0);
    }
}
