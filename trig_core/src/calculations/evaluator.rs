//! # Trig Evaluator
//!
//! Evaluates the six trigonometric functions and their inverses, simplified
//! compositions such as `sin(arccos(x))`, and solves `f(θ) = k` for its
//! general solution.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::angle::{AngleMode, TrigFunction};
//! use trig_core::calculations::evaluator::{evaluate, EvaluateInput};
//!
//! let input = EvaluateInput {
//!     function: TrigFunction::Cos,
//!     angle: 120.0,
//!     angle_mode: AngleMode::Degrees,
//! };
//! let result = evaluate(&input).unwrap();
//! assert_eq!(result.exact.as_deref(), Some("-1/2"));
//! assert!((result.value + 0.5).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::angle::{self, exact_value, to_degrees, AngleMode, InverseFunction, Quadrant, TrigFunction};
use crate::derivation::Derivation;
use crate::errors::{require_finite, TrigError, TrigResult};
use crate::expression::{format_degrees, format_number, format_number_to, format_radians, ZERO_EPSILON};

// ============================================================================
// Basic Functions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateInput {
    pub function: TrigFunction,
    pub angle: f64,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResult {
    pub value: f64,
    /// Symbolic value at special angles (sin, cos, tan only)
    pub exact: Option<String>,
    pub degrees: f64,
    pub quadrant: Quadrant,
    pub reference_angle: f64,
    pub steps: Derivation,
}

/// Apply `function` to an angle in radians, or `None` where it is undefined.
pub fn apply(function: TrigFunction, radians: f64) -> Option<f64> {
    let (sin, cos) = radians.sin_cos();
    match function {
        TrigFunction::Sin => Some(sin),
        TrigFunction::Cos => Some(cos),
        TrigFunction::Tan if cos.abs() < ZERO_EPSILON => None,
        TrigFunction::Tan => Some(radians.tan()),
        TrigFunction::Csc if sin.abs() < ZERO_EPSILON => None,
        TrigFunction::Csc => Some(1.0 / sin),
        TrigFunction::Sec if cos.abs() < ZERO_EPSILON => None,
        TrigFunction::Sec => Some(1.0 / cos),
        TrigFunction::Cot if sin.abs() < ZERO_EPSILON => None,
        TrigFunction::Cot => Some(1.0 / radians.tan()),
    }
}

/// Evaluate a trigonometric function at an angle.
pub fn evaluate(input: &EvaluateInput) -> TrigResult<EvaluateResult> {
    require_finite("angle", input.angle)?;

    let degrees = input.angle_mode.to_degrees(input.angle);
    let radians = angle::to_radians(degrees);
    let function = input.function;

    let value = apply(function, radians).ok_or_else(|| {
        warn!("{} undefined at {}°", function, degrees);
        TrigError::domain_error(function.name(), format!("{} is undefined at this angle", function.long_name()))
    })?;

    let exact = exact_value(degrees, function).map(str::to_string);
    let quadrant = angle::quadrant(degrees);
    let reference_angle = angle::reference_angle(degrees);

    let mut steps = Derivation::new(format!("Evaluating {}({})", function, format_number(input.angle)));
    steps.step("Convert to degrees", [format!("θ = {}", format_degrees(degrees))]);
    steps.step(
        "Find reference angle",
        [
            format!("Quadrant: {}", quadrant),
            format!("Reference angle: {}", format_degrees(reference_angle)),
        ],
    );
    steps.step(
        "Evaluate",
        [
            format!(
                "{}({}) = {}",
                function,
                format_degrees(degrees),
                exact.clone().unwrap_or_else(|| format_number_to(value, 10))
            ),
            format!("≈ {}", format_number_to(value, 10)),
        ],
    );

    Ok(EvaluateResult {
        value,
        exact,
        degrees,
        quadrant,
        reference_angle,
        steps,
    })
}

// ============================================================================
// Inverse Functions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverseInput {
    pub function: InverseFunction,
    pub x: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverseResult {
    pub radians: f64,
    /// Radians as a multiple of π when possible
    pub radians_display: String,
    pub degrees: f64,
    pub steps: Derivation,
}

/// Principal value of an inverse function, in radians.
pub fn apply_inverse(function: InverseFunction, x: f64) -> TrigResult<f64> {
    let inside_unit = (-1.0..=1.0).contains(&x);
    let strictly_inside_unit = x > -1.0 && x < 1.0;
    match function {
        InverseFunction::Arcsin if !inside_unit => Err(TrigError::domain_error("arcsin", "Value must be in [-1, 1]")),
        InverseFunction::Arcsin => Ok(x.asin()),
        InverseFunction::Arccos if !inside_unit => Err(TrigError::domain_error("arccos", "Value must be in [-1, 1]")),
        InverseFunction::Arccos => Ok(x.acos()),
        InverseFunction::Arctan => Ok(x.atan()),
        InverseFunction::Arccsc if strictly_inside_unit => {
            Err(TrigError::domain_error("arccsc", "Value must satisfy |x| ≥ 1"))
        }
        InverseFunction::Arccsc => Ok((1.0 / x).asin()),
        InverseFunction::Arcsec if strictly_inside_unit => {
            Err(TrigError::domain_error("arcsec", "Value must satisfy |x| ≥ 1"))
        }
        InverseFunction::Arcsec => Ok((1.0 / x).acos()),
        // Range (0, π)
        InverseFunction::Arccot if x == 0.0 => Ok(PI / 2.0),
        InverseFunction::Arccot if x < 0.0 => Ok((1.0 / x).atan() + PI),
        InverseFunction::Arccot => Ok((1.0 / x).atan()),
    }
}

/// Evaluate an inverse trigonometric function.
pub fn inverse(input: &InverseInput) -> TrigResult<InverseResult> {
    require_finite("x", input.x)?;

    let radians = apply_inverse(input.function, input.x)?;
    let degrees = to_degrees(radians);
    let radians_display = format_radians(radians);

    let x = format_number(input.x);
    let mut steps = Derivation::new(format!("Evaluating {}({})", input.function, x));
    steps.step("Check domain", [format!("{}(x) requires valid input ✓", input.function)]);
    steps.step(
        "Calculate result",
        [
            format!("θ = {}({})", input.function, x),
            format!("θ = {} radians", format_number(radians)),
            format!("θ = {}", radians_display),
        ],
    );
    steps.step(
        "Convert to degrees",
        [
            format!("θ = {} × (180/π)", format_number(radians)),
            format!("θ = {}", format_degrees(degrees)),
        ],
    );

    Ok(InverseResult {
        radians,
        radians_display,
        degrees,
        steps,
    })
}

// ============================================================================
// Compositions
// ============================================================================

/// A trig function applied to an inverse trig function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Composition {
    SinArccos,
    CosArcsin,
    TanArcsin,
    TanArccos,
    SinArctan,
    CosArctan,
}

impl Composition {
    pub const ALL: [Composition; 6] = [
        Composition::SinArccos,
        Composition::CosArcsin,
        Composition::TanArcsin,
        Composition::TanArccos,
        Composition::SinArctan,
        Composition::CosArctan,
    ];

    /// Algebraic form the composition simplifies to
    pub fn identity(&self) -> &'static str {
        match self {
            Composition::SinArccos | Composition::CosArcsin => "√(1 - x²)",
            Composition::TanArcsin => "x/√(1 - x²)",
            Composition::TanArccos => "√(1 - x²)/x",
            Composition::SinArctan => "x/√(1 + x²)",
            Composition::CosArctan => "1/√(1 + x²)",
        }
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Composition::SinArccos => "sin(arccos(x))",
            Composition::CosArcsin => "cos(arcsin(x))",
            Composition::TanArcsin => "tan(arcsin(x))",
            Composition::TanArccos => "tan(arccos(x))",
            Composition::SinArctan => "sin(arctan(x))",
            Composition::CosArctan => "cos(arctan(x))",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionInput {
    pub kind: Composition,
    pub x: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionResult {
    pub value: f64,
    /// The composition with x substituted, e.g. "sin(arccos(0.6))"
    pub expression: String,
    pub steps: Derivation,
}

/// Evaluate a composition through its algebraic identity.
pub fn composition(input: &CompositionInput) -> TrigResult<CompositionResult> {
    let x = require_finite("x", input.x)?;
    let kind = input.kind;
    let op = kind.to_string();

    let value = match kind {
        Composition::SinArccos | Composition::CosArcsin => {
            if !(-1.0..=1.0).contains(&x) {
                let inner = if kind == Composition::SinArccos { "arccos" } else { "arcsin" };
                return Err(TrigError::domain_error(op, format!("{} needs x ∈ [-1, 1]", inner)));
            }
            (1.0 - x * x).sqrt()
        }
        Composition::TanArcsin => {
            if x <= -1.0 || x >= 1.0 {
                return Err(TrigError::domain_error(op, "Need x ∈ (-1, 1)"));
            }
            x / (1.0 - x * x).sqrt()
        }
        Composition::TanArccos => {
            if x <= -1.0 || x > 1.0 || x == 0.0 {
                return Err(TrigError::domain_error(op, "Need x ∈ (-1, 1] and x ≠ 0"));
            }
            (1.0 - x * x).sqrt() / x
        }
        Composition::SinArctan => x / (1.0 + x * x).sqrt(),
        Composition::CosArctan => 1.0 / (1.0 + x * x).sqrt(),
    };

    let expression = op.replace('x', &format_number(x));
    let mut steps = Derivation::new(format!("Evaluating {}", expression));
    steps.step("Apply identity", [format!("{} = {}", kind, kind.identity())]);
    steps.step("Substitute", [format!("x = {}", format_number(x)), format!("= {}", format_number(value))]);

    Ok(CompositionResult {
        value,
        expression,
        steps,
    })
}

// ============================================================================
// Trig Equations
// ============================================================================

/// `function(θ) = k`, with `function` one of sin, cos, tan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrigEquationInput {
    pub function: TrigFunction,
    pub k: f64,
}

/// A family of solutions `θ = [±]base + period·n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionFamily {
    pub base_deg: f64,
    pub period_deg: f64,
    /// True for `±base` (cosine)
    pub plus_minus: bool,
}

impl fmt::Display for SolutionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "θ = {}{}° + {}°n",
            if self.plus_minus { "±" } else { "" },
            format_number(self.base_deg),
            format_number(self.period_deg)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrigEquationResult {
    pub families: Vec<SolutionFamily>,
    /// Solutions in [0°, 360°), ascending
    pub solutions_in_one_turn: Vec<f64>,
    pub steps: Derivation,
}

/// General solution of `sin θ = k`, `cos θ = k` or `tan θ = k`, in degrees.
pub fn solve_equation(input: &TrigEquationInput) -> TrigResult<TrigEquationResult> {
    let k = require_finite("k", input.k)?;
    let function = input.function;

    let families = match function {
        TrigFunction::Sin | TrigFunction::Cos if !(-1.0..=1.0).contains(&k) => {
            return Err(TrigError::domain_error(
                format!("{}(θ) = k", function),
                format!("No solution: {}(θ) ∈ [-1, 1]", function),
            ));
        }
        TrigFunction::Sin => {
            let base = to_degrees(k.asin());
            vec![
                SolutionFamily { base_deg: base, period_deg: 360.0, plus_minus: false },
                SolutionFamily { base_deg: 180.0 - base, period_deg: 360.0, plus_minus: false },
            ]
        }
        TrigFunction::Cos => {
            let base = to_degrees(k.acos());
            vec![SolutionFamily { base_deg: base, period_deg: 360.0, plus_minus: true }]
        }
        TrigFunction::Tan => {
            let base = to_degrees(k.atan());
            vec![SolutionFamily { base_deg: base, period_deg: 180.0, plus_minus: false }]
        }
        other => {
            return Err(TrigError::invalid_input(
                "function",
                other.name(),
                "Equations can be solved for sin, cos or tan",
            ));
        }
    };

    let mut solutions_in_one_turn: Vec<f64> = Vec::new();
    for family in &families {
        let mut candidates = vec![family.base_deg];
        if family.plus_minus {
            candidates.push(-family.base_deg);
        }
        if family.period_deg < 360.0 {
            candidates.push(family.base_deg + family.period_deg);
        }
        for candidate in candidates {
            let n = angle::normalize(candidate);
            // Fold values a rounding error short of 360° back to 0°
            let n = if (360.0 - n).abs() < 1e-9 { 0.0 } else { n };
            if !solutions_in_one_turn.iter().any(|s| (s - n).abs() < 1e-9) {
                solutions_in_one_turn.push(n);
            }
        }
    }
    solutions_in_one_turn.sort_by(|a, b| a.total_cmp(b));

    let mut steps = Derivation::new(format!("Solving {}(θ) = {}", function, format_number(k)));
    let inverse = match function {
        TrigFunction::Sin => "arcsin",
        TrigFunction::Cos => "arccos",
        _ => "arctan",
    };
    steps.step(
        "Find the principal value",
        [format!("θ₀ = {}({}) = {}", inverse, format_number(k), format_degrees(families[0].base_deg))],
    );
    steps.step("Write the general solution", families.iter().map(|f| f.to_string()));
    steps.line("where n is any integer");
    steps.step(
        "Solutions in [0°, 360°)",
        [solutions_in_one_turn
            .iter()
            .map(|s| format_degrees(*s))
            .collect::<Vec<_>>()
            .join(", ")],
    );

    Ok(TrigEquationResult {
        families,
        solutions_in_one_turn,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_special_angle() {
        let result = evaluate(&EvaluateInput {
            function: TrigFunction::Sin,
            angle: 30.0,
            angle_mode: AngleMode::Degrees,
        })
        .unwrap();
        assert!((result.value - 0.5).abs() < 1e-12);
        assert_eq!(result.exact.as_deref(), Some("1/2"));
        assert_eq!(result.quadrant, Quadrant::I);
    }

    #[test]
    fn test_evaluate_radian_mode() {
        let result = evaluate(&EvaluateInput {
            function: TrigFunction::Tan,
            angle: PI / 4.0,
            angle_mode: AngleMode::Radians,
        })
        .unwrap();
        assert!((result.value - 1.0).abs() < 1e-12);
        assert_eq!(result.exact.as_deref(), Some("1"));
    }

    #[test]
    fn test_evaluate_undefined() {
        for (function, angle) in [
            (TrigFunction::Tan, 90.0),
            (TrigFunction::Sec, 270.0),
            (TrigFunction::Csc, 180.0),
            (TrigFunction::Cot, 0.0),
        ] {
            let err = evaluate(&EvaluateInput {
                function,
                angle,
                angle_mode: AngleMode::Degrees,
            })
            .unwrap_err();
            assert_eq!(err.error_code(), "DOMAIN_ERROR", "{} at {}", function, angle);
        }
    }

    #[test]
    fn test_evaluate_reciprocal_has_no_exact() {
        let result = evaluate(&EvaluateInput {
            function: TrigFunction::Sec,
            angle: 60.0,
            angle_mode: AngleMode::Degrees,
        })
        .unwrap();
        assert!((result.value - 2.0).abs() < 1e-9);
        assert_eq!(result.exact, None);
    }

    #[test]
    fn test_inverse_functions() {
        let asin = inverse(&InverseInput { function: InverseFunction::Arcsin, x: 0.5 }).unwrap();
        assert_eq!(asin.radians_display, "π/6");
        assert!((asin.degrees - 30.0).abs() < 1e-9);

        let asec = inverse(&InverseInput { function: InverseFunction::Arcsec, x: 2.0 }).unwrap();
        assert!((asec.degrees - 60.0).abs() < 1e-9);

        let acot = inverse(&InverseInput { function: InverseFunction::Arccot, x: -1.0 }).unwrap();
        assert!((acot.degrees - 135.0).abs() < 1e-9);

        let acot0 = inverse(&InverseInput { function: InverseFunction::Arccot, x: 0.0 }).unwrap();
        assert_eq!(acot0.radians_display, "π/2");
    }

    #[test]
    fn test_inverse_domain() {
        assert!(apply_inverse(InverseFunction::Arcsin, 1.5).is_err());
        assert!(apply_inverse(InverseFunction::Arccos, -1.01).is_err());
        assert!(apply_inverse(InverseFunction::Arccsc, 0.5).is_err());
        assert!(apply_inverse(InverseFunction::Arcsec, 0.0).is_err());
        assert!(apply_inverse(InverseFunction::Arccsc, 1.0).is_ok());
    }

    #[test]
    fn test_compositions() {
        let r = composition(&CompositionInput { kind: Composition::SinArccos, x: 0.6 }).unwrap();
        assert!((r.value - 0.8).abs() < 1e-12);
        assert_eq!(r.expression, "sin(arccos(0.6))");

        let r = composition(&CompositionInput { kind: Composition::TanArccos, x: 0.6 }).unwrap();
        assert!((r.value - 4.0 / 3.0).abs() < 1e-12);

        let r = composition(&CompositionInput { kind: Composition::CosArctan, x: 0.0 }).unwrap();
        assert!((r.value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_composition_domains() {
        assert!(composition(&CompositionInput { kind: Composition::CosArcsin, x: 2.0 }).is_err());
        assert!(composition(&CompositionInput { kind: Composition::TanArcsin, x: 1.0 }).is_err());
        assert!(composition(&CompositionInput { kind: Composition::TanArccos, x: 0.0 }).is_err());
        assert!(composition(&CompositionInput { kind: Composition::TanArccos, x: 1.0 }).is_ok());
    }

    #[test]
    fn test_solve_sin() {
        let result = solve_equation(&TrigEquationInput { function: TrigFunction::Sin, k: 0.5 }).unwrap();
        assert_eq!(result.families.len(), 2);
        assert_eq!(result.families[0].to_string(), "θ = 30° + 360°n");
        assert_eq!(result.families[1].to_string(), "θ = 150° + 360°n");
        assert_eq!(result.solutions_in_one_turn.len(), 2);
    }

    #[test]
    fn test_solve_cos() {
        let result = solve_equation(&TrigEquationInput { function: TrigFunction::Cos, k: 0.5 }).unwrap();
        assert_eq!(result.families[0].to_string(), "θ = ±60° + 360°n");
        let turn = &result.solutions_in_one_turn;
        assert!((turn[0] - 60.0).abs() < 1e-9);
        assert!((turn[1] - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_tan() {
        let result = solve_equation(&TrigEquationInput { function: TrigFunction::Tan, k: -1.0 }).unwrap();
        assert_eq!(result.families[0].to_string(), "θ = -45° + 180°n");
        let turn = &result.solutions_in_one_turn;
        assert!((turn[0] - 135.0).abs() < 1e-9);
        assert!((turn[1] - 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_no_solution() {
        let err = solve_equation(&TrigEquationInput { function: TrigFunction::Cos, k: 2.0 }).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(solve_equation(&TrigEquationInput { function: TrigFunction::Sec, k: 2.0 }).is_err());
    }

    #[test]
    fn test_solve_sin_one_has_single_solution() {
        let result = solve_equation(&TrigEquationInput { function: TrigFunction::Sin, k: 1.0 }).unwrap();
        assert_eq!(result.solutions_in_one_turn.len(), 1);
    }
}
