//! # Polar & Complex
//!
//! Rectangular/polar coordinate conversion, complex arithmetic and
//! De Moivre's theorem. Complex values are [`num_complex::Complex64`], which
//! serializes as a `[re, im]` pair.
//!
//! ```rust
//! use num_complex::Complex64;
//! use trig_core::calculations::complex::{complex_op, ComplexOp, ComplexOpInput};
//! use trig_core::angle::AngleMode;
//!
//! let input = ComplexOpInput {
//!     z1: Complex64::new(3.0, 4.0),
//!     z2: Some(Complex64::new(1.0, 2.0)),
//!     op: ComplexOp::Multiply,
//!     angle_mode: AngleMode::Degrees,
//! };
//! assert_eq!(complex_op(&input).unwrap().display, "-5 + 10i");
//! ```

use std::fmt;

pub use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::angle::AngleMode;
use crate::derivation::Derivation;
use crate::errors::{require_finite, TrigError, TrigResult};
use crate::expression::{format_angle, format_complex, format_number, ZERO_EPSILON};

fn check_complex(field: &str, z: Complex64) -> TrigResult<Complex64> {
    require_finite(&format!("{}.re", field), z.re)?;
    require_finite(&format!("{}.im", field), z.im)?;
    Ok(z)
}

fn display(z: Complex64) -> String {
    format_complex(z.re, z.im)
}

// ============================================================================
// Coordinate Conversion
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectToPolarInput {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarResult {
    pub r: f64,
    /// θ in the requested angle mode
    pub theta: f64,
    pub theta_display: String,
    pub steps: Derivation,
}

/// (x, y) → (r, θ), with θ from atan2.
pub fn rect_to_polar(input: &RectToPolarInput) -> TrigResult<PolarResult> {
    let x = require_finite("x", input.x)?;
    let y = require_finite("y", input.y)?;

    let (r, radians) = Complex64::new(x, y).to_polar();
    let theta = input.angle_mode.from_radians(radians);
    let theta_display = format_angle(radians, input.angle_mode);

    let mut steps = Derivation::new("Rectangular → Polar");
    steps.given(format!("(x, y) = ({}, {})", format_number(x), format_number(y)));
    steps.step("Radius", [format!("r = √(x² + y²) = {}", format_number(r))]);
    steps.step("Angle", [format!("θ = atan2(y, x) = {}", theta_display)]);

    Ok(PolarResult {
        r,
        theta,
        theta_display,
        steps,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarToRectInput {
    pub r: f64,
    /// θ in `angle_mode` units
    pub theta: f64,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectResult {
    pub x: f64,
    pub y: f64,
    pub steps: Derivation,
}

/// (r, θ) → (x, y)
pub fn polar_to_rect(input: &PolarToRectInput) -> TrigResult<RectResult> {
    let r = require_finite("r", input.r)?;
    let theta = require_finite("theta", input.theta)?;

    let radians = input.angle_mode.to_radians(theta);
    let z = Complex64::from_polar(r, radians);

    let mut steps = Derivation::new("Polar → Rectangular");
    steps.given(format!("r = {}", format_number(r)));
    steps.given(format!("θ = {}", format_angle(radians, input.angle_mode)));
    steps.step(
        "Project onto the axes",
        [
            format!("x = r·cos(θ) = {}", format_number(z.re)),
            format!("y = r·sin(θ) = {}", format_number(z.im)),
        ],
    );

    Ok(RectResult {
        x: z.re,
        y: z.im,
        steps,
    })
}

// ============================================================================
// Complex Arithmetic
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Conjugate,
    ToPolar,
}

impl ComplexOp {
    /// Whether the operation needs a second operand
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            ComplexOp::Add | ComplexOp::Subtract | ComplexOp::Multiply | ComplexOp::Divide
        )
    }
}

impl fmt::Display for ComplexOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexOp::Add => write!(f, "Add (Z₁ + Z₂)"),
            ComplexOp::Subtract => write!(f, "Subtract (Z₁ - Z₂)"),
            ComplexOp::Multiply => write!(f, "Multiply (Z₁ × Z₂)"),
            ComplexOp::Divide => write!(f, "Divide (Z₁ ÷ Z₂)"),
            ComplexOp::Modulus => write!(f, "Modulus |Z₁|"),
            ComplexOp::Conjugate => write!(f, "Conjugate Z̄₁"),
            ComplexOp::ToPolar => write!(f, "To Polar Form"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexOpInput {
    pub z1: Complex64,
    #[serde(default)]
    pub z2: Option<Complex64>,
    pub op: ComplexOp,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComplexValue {
    Number { z: Complex64 },
    Modulus { value: f64 },
    /// θ in radians
    Polar { r: f64, theta: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexOpResult {
    pub value: ComplexValue,
    pub display: String,
    pub steps: Derivation,
}

/// Apply a complex-number operation. `z2` is required for binary operations.
pub fn complex_op(input: &ComplexOpInput) -> TrigResult<ComplexOpResult> {
    let z1 = check_complex("z1", input.z1)?;
    let z2 = if input.op.is_binary() {
        let z2 = input.z2.ok_or_else(|| TrigError::missing_field("z2"))?;
        check_complex("z2", z2)?
    } else {
        Complex64::new(0.0, 0.0)
    };

    let mut steps = Derivation::new(input.op.to_string());
    steps.given(format!("Z₁ = {}", display(z1)));
    if input.op.is_binary() {
        steps.given(format!("Z₂ = {}", display(z2)));
    }

    let (value, text) = match input.op {
        ComplexOp::Add => {
            let z = z1 + z2;
            steps.step("Add real and imaginary parts", [format!("Z₁ + Z₂ = {}", display(z))]);
            (ComplexValue::Number { z }, display(z))
        }
        ComplexOp::Subtract => {
            let z = z1 - z2;
            steps.step("Subtract real and imaginary parts", [format!("Z₁ - Z₂ = {}", display(z))]);
            (ComplexValue::Number { z }, display(z))
        }
        ComplexOp::Multiply => {
            let z = z1 * z2;
            steps.step(
                "Multiply",
                [
                    "(a + bi)(c + di) = (ac - bd) + (ad + bc)i".to_string(),
                    format!("Z₁ × Z₂ = {}", display(z)),
                ],
            );
            (ComplexValue::Number { z }, display(z))
        }
        ComplexOp::Divide => {
            let denominator = z2.norm_sqr();
            if denominator < ZERO_EPSILON {
                return Err(TrigError::domain_error("Z₁ ÷ Z₂", "Cannot divide by zero"));
            }
            let z = z1 / z2;
            steps.step(
                "Multiply by the conjugate of Z₂",
                [
                    format!("|Z₂|² = c² + d² = {}", format_number(denominator)),
                    format!("Z₁ ÷ Z₂ = {}", display(z)),
                ],
            );
            (ComplexValue::Number { z }, display(z))
        }
        ComplexOp::Modulus => {
            let value = z1.norm();
            steps.step("Modulus", [format!("|Z₁| = √(a² + b²) = {}", format_number(value))]);
            (ComplexValue::Modulus { value }, format_number(value))
        }
        ComplexOp::Conjugate => {
            let z = z1.conj();
            steps.step("Negate the imaginary part", [format!("Z̄₁ = {}", display(z))]);
            (ComplexValue::Number { z }, display(z))
        }
        ComplexOp::ToPolar => {
            let (r, theta) = z1.to_polar();
            let angle = format_angle(theta, input.angle_mode);
            let text = format!("{}(cos({}) + i·sin({}))", format_number(r), angle, angle);
            steps.step(
                "Modulus and argument",
                [
                    format!("r = {}", format_number(r)),
                    format!("θ = atan2(b, a) = {}", angle),
                ],
            );
            steps.step("Polar form", [text.clone()]);
            (ComplexValue::Polar { r, theta }, text)
        }
    };

    Ok(ComplexOpResult {
        value,
        display: text,
        steps,
    })
}

// ============================================================================
// De Moivre's Theorem
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeMoivreInput {
    pub theta: f64,
    pub n: f64,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeMoivreResult {
    pub z: Complex64,
    pub display: String,
    pub steps: Derivation,
}

/// (cos θ + i·sin θ)ⁿ = cos(nθ) + i·sin(nθ)
pub fn de_moivre(input: &DeMoivreInput) -> TrigResult<DeMoivreResult> {
    let theta = require_finite("theta", input.theta)?;
    let n = require_finite("n", input.n)?;

    let radians = input.angle_mode.to_radians(theta);
    let z = Complex64::from_polar(1.0, n * radians);
    let text = display(z);

    let mut steps = Derivation::new("De Moivre's Theorem");
    steps.given(format!("θ = {}", format_angle(radians, input.angle_mode)));
    steps.given(format!("n = {}", format_number(n)));
    steps.step("Apply the theorem", ["(cos θ + i·sin θ)ⁿ = cos(nθ) + i·sin(nθ)".to_string()]);
    steps.step(
        "Evaluate",
        [
            format!("nθ = {}", format_angle(n * radians, input.angle_mode)),
            format!("Result = {}", text),
        ],
    );

    Ok(DeMoivreResult {
        z,
        display: text,
        steps,
    })
}
