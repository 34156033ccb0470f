//! # Trigonometry Calculations
//!
//! This module contains every calculator panel. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results, including a step-by-step [`Derivation`]
//! - `fn(&*Input) -> TrigResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! Foundations:
//! - [`angles`] - Angle conversion, arc length & sector area, angular speed
//! - [`right_triangle`] - Right triangle solver
//! - [`applications`] - Elevation, depression and bearing problems
//! - [`evaluator`] - Trig functions, inverses, compositions, equations
//! - [`sinusoidal`] - Sinusoidal equations and models
//! - [`oblique`] - Law of sines / cosines, triangle area
//!
//! Advanced:
//! - [`vectors`] - 2D vector operations
//! - [`complex`] - Polar coordinates, complex numbers, De Moivre
//! - [`motion`] - Parametric curves, projectiles, harmonic motion
//!
//! ## Problem documents
//!
//! [`Problem`] wraps every input behind a `"type"` tag so a calculation can be
//! stored or sent as a single JSON document:
//!
//! ```rust
//! use trig_core::calculations::{Problem, Solution};
//!
//! let json = r#"{"type": "area_heron", "a": 3.0, "b": 4.0, "c": 5.0}"#;
//! let problem: Problem = serde_json::from_str(json).unwrap();
//! assert_eq!(problem.kind(), "Area (Heron's Formula)");
//!
//! match problem.solve().unwrap() {
//!     Solution::AreaHeron(result) => assert_eq!(result.area, 6.0),
//!     other => panic!("unexpected solution {:?}", other),
//! }
//! ```

pub mod angles;
pub mod applications;
pub mod complex;
pub mod evaluator;
pub mod motion;
pub mod oblique;
pub mod right_triangle;
pub mod sinusoidal;
pub mod vectors;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::derivation::Derivation;
use crate::errors::TrigResult;

// Re-export commonly used types
pub use angles::{AngleConversionInput, AngleConversionResult, AngularSpeedInput, ArcSectorInput};
pub use applications::{BearingInput, DepressionInput, ElevationInput};
pub use complex::{ComplexOp, ComplexOpInput, DeMoivreInput, PolarToRectInput, RectToPolarInput};
pub use evaluator::{Composition, CompositionInput, EvaluateInput, InverseInput, TrigEquationInput};
pub use motion::{HarmonicInput, ParametricCurve, ParametricInput, ProjectileInput};
pub use oblique::{AreaHeronInput, AreaSasInput, ObliqueCase};
pub use right_triangle::{RightTriangleInput, RightTriangleResult};
pub use sinusoidal::{BuildEquationInput, ParseEquationInput, RealWorldModelInput, WaveFunction};
pub use vectors::{Vector2, VectorAnalysisInput, VectorOp, VectorOpInput};

/// Enum wrapper for all calculation inputs.
///
/// This allows a calculation to be stored or transmitted as one document
/// while keeping each panel's input strongly typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Problem {
    AngleConversion(AngleConversionInput),
    ArcSector(ArcSectorInput),
    AngularSpeed(AngularSpeedInput),
    RightTriangle(RightTriangleInput),
    Elevation(ElevationInput),
    Depression(DepressionInput),
    Bearing(BearingInput),
    Evaluate(EvaluateInput),
    Inverse(InverseInput),
    Composition(CompositionInput),
    TrigEquation(TrigEquationInput),
    ParseSinusoid(ParseEquationInput),
    BuildSinusoid(BuildEquationInput),
    SinusoidModel(RealWorldModelInput),
    ObliqueTriangle(ObliqueCase),
    AreaSas(AreaSasInput),
    AreaHeron(AreaHeronInput),
    VectorOp(VectorOpInput),
    VectorAnalysis(VectorAnalysisInput),
    RectToPolar(RectToPolarInput),
    PolarToRect(PolarToRectInput),
    ComplexOp(ComplexOpInput),
    DeMoivre(DeMoivreInput),
    Parametric(ParametricInput),
    Projectile(ProjectileInput),
    Harmonic(HarmonicInput),
}

/// Result of solving a [`Problem`], tagged with the same `"type"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Solution {
    AngleConversion(AngleConversionResult),
    ArcSector(angles::ArcSectorResult),
    AngularSpeed(angles::AngularSpeedResult),
    RightTriangle(RightTriangleResult),
    Elevation(applications::ElevationResult),
    Depression(applications::DepressionResult),
    Bearing(applications::BearingResult),
    Evaluate(evaluator::EvaluateResult),
    Inverse(evaluator::InverseResult),
    Composition(evaluator::CompositionResult),
    TrigEquation(evaluator::TrigEquationResult),
    ParseSinusoid(sinusoidal::ParsedSinusoid),
    BuildSinusoid(sinusoidal::BuildEquationResult),
    SinusoidModel(sinusoidal::RealWorldModelResult),
    ObliqueTriangle(oblique::ObliqueResult),
    AreaSas(oblique::AreaSasResult),
    AreaHeron(oblique::AreaHeronResult),
    VectorOp(vectors::VectorOpResult),
    VectorAnalysis(vectors::VectorAnalysisResult),
    RectToPolar(complex::PolarResult),
    PolarToRect(complex::RectResult),
    ComplexOp(complex::ComplexOpResult),
    DeMoivre(complex::DeMoivreResult),
    Parametric(motion::ParametricResult),
    Projectile(motion::ProjectileResult),
    Harmonic(motion::HarmonicResult),
}

impl Problem {
    /// Run the calculation.
    pub fn solve(&self) -> TrigResult<Solution> {
        debug!("solving {} problem", self.kind());
        let solution = match self {
            Problem::AngleConversion(input) => Solution::AngleConversion(angles::convert_angle(input)?),
            Problem::ArcSector(input) => Solution::ArcSector(angles::arc_sector(input)?),
            Problem::AngularSpeed(input) => Solution::AngularSpeed(angles::angular_speed(input)?),
            Problem::RightTriangle(input) => Solution::RightTriangle(right_triangle::solve(input)?),
            Problem::Elevation(input) => Solution::Elevation(applications::elevation(input)?),
            Problem::Depression(input) => Solution::Depression(applications::depression(input)?),
            Problem::Bearing(input) => Solution::Bearing(applications::bearing(input)?),
            Problem::Evaluate(input) => Solution::Evaluate(evaluator::evaluate(input)?),
            Problem::Inverse(input) => Solution::Inverse(evaluator::inverse(input)?),
            Problem::Composition(input) => Solution::Composition(evaluator::composition(input)?),
            Problem::TrigEquation(input) => Solution::TrigEquation(evaluator::solve_equation(input)?),
            Problem::ParseSinusoid(input) => Solution::ParseSinusoid(sinusoidal::parse_equation(&input.equation)?),
            Problem::BuildSinusoid(input) => Solution::BuildSinusoid(sinusoidal::build_equation(input)?),
            Problem::SinusoidModel(input) => Solution::SinusoidModel(sinusoidal::real_world_model(input)?),
            Problem::ObliqueTriangle(case) => Solution::ObliqueTriangle(oblique::solve(case)?),
            Problem::AreaSas(input) => Solution::AreaSas(oblique::area_sas(input)?),
            Problem::AreaHeron(input) => Solution::AreaHeron(oblique::area_heron(input)?),
            Problem::VectorOp(input) => Solution::VectorOp(vectors::operate(input)?),
            Problem::VectorAnalysis(input) => Solution::VectorAnalysis(vectors::analyze(input)?),
            Problem::RectToPolar(input) => Solution::RectToPolar(complex::rect_to_polar(input)?),
            Problem::PolarToRect(input) => Solution::PolarToRect(complex::polar_to_rect(input)?),
            Problem::ComplexOp(input) => Solution::ComplexOp(complex::complex_op(input)?),
            Problem::DeMoivre(input) => Solution::DeMoivre(complex::de_moivre(input)?),
            Problem::Parametric(input) => Solution::Parametric(motion::parametric_point(input)?),
            Problem::Projectile(input) => Solution::Projectile(motion::projectile(input)?),
            Problem::Harmonic(input) => Solution::Harmonic(motion::harmonic(input)?),
        };
        info!("{} solved in {} steps", self.kind(), solution.steps().step_count());
        Ok(solution)
    }

    /// Panel name, e.g. "Right Triangle Solver"
    pub fn kind(&self) -> &'static str {
        match self {
            Problem::AngleConversion(_) => "Angle Conversion",
            Problem::ArcSector(_) => "Arc Length & Sector",
            Problem::AngularSpeed(_) => "Linear & Angular Speed",
            Problem::RightTriangle(_) => "Right Triangle Solver",
            Problem::Elevation(_) => "Angle of Elevation",
            Problem::Depression(_) => "Angle of Depression",
            Problem::Bearing(_) => "Bearing",
            Problem::Evaluate(_) => "Basic Functions",
            Problem::Inverse(_) => "Inverse Functions",
            Problem::Composition(_) => "Compositions",
            Problem::TrigEquation(_) => "Solve Trig Equation",
            Problem::ParseSinusoid(_) => "Parse Sinusoidal Equation",
            Problem::BuildSinusoid(_) => "Build Sinusoidal Equation",
            Problem::SinusoidModel(_) => "Real-World Sinusoidal Model",
            Problem::ObliqueTriangle(_) => "Oblique Triangle Solver",
            Problem::AreaSas(_) => "Area (SAS)",
            Problem::AreaHeron(_) => "Area (Heron's Formula)",
            Problem::VectorOp(_) => "Vector Operations",
            Problem::VectorAnalysis(_) => "Single Vector Properties",
            Problem::RectToPolar(_) => "Rectangular → Polar",
            Problem::PolarToRect(_) => "Polar → Rectangular",
            Problem::ComplexOp(_) => "Complex Number Operations",
            Problem::DeMoivre(_) => "De Moivre's Theorem",
            Problem::Parametric(_) => "Parametric Equations",
            Problem::Projectile(_) => "Projectile Motion",
            Problem::Harmonic(_) => "Simple Harmonic Motion",
        }
    }
}

impl Solution {
    /// Step-by-step working for the result.
    pub fn steps(&self) -> &Derivation {
        match self {
            Solution::AngleConversion(r) => &r.steps,
            Solution::ArcSector(r) => &r.steps,
            Solution::AngularSpeed(r) => &r.steps,
            Solution::RightTriangle(r) => &r.steps,
            Solution::Elevation(r) => &r.steps,
            Solution::Depression(r) => &r.steps,
            Solution::Bearing(r) => &r.steps,
            Solution::Evaluate(r) => &r.steps,
            Solution::Inverse(r) => &r.steps,
            Solution::Composition(r) => &r.steps,
            Solution::TrigEquation(r) => &r.steps,
            Solution::ParseSinusoid(r) => &r.steps,
            Solution::BuildSinusoid(r) => &r.steps,
            Solution::SinusoidModel(r) => &r.steps,
            Solution::ObliqueTriangle(r) => &r.steps,
            Solution::AreaSas(r) => &r.steps,
            Solution::AreaHeron(r) => &r.steps,
            Solution::VectorOp(r) => &r.steps,
            Solution::VectorAnalysis(r) => &r.steps,
            Solution::RectToPolar(r) => &r.steps,
            Solution::PolarToRect(r) => &r.steps,
            Solution::ComplexOp(r) => &r.steps,
            Solution::DeMoivre(r) => &r.steps,
            Solution::Parametric(r) => &r.steps,
            Solution::Projectile(r) => &r.steps,
            Solution::Harmonic(r) => &r.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleMode;

    #[test]
    fn test_problem_roundtrip() {
        let problem = Problem::Projectile(ProjectileInput {
            v0: 50.0,
            angle_deg: 45.0,
            h0: 0.0,
            g: 9.81,
        });
        let json = serde_json::to_string(&problem).unwrap();
        assert!(json.contains(r#""type":"projectile""#));

        let parsed: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind(), "Projectile Motion");
    }

    #[test]
    fn test_nested_tags() {
        let json = r#"{"type": "oblique_triangle", "case": "SSS", "a": 3.0, "b": 4.0, "c": 5.0}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        let solution = problem.solve().unwrap();
        match &solution {
            Solution::ObliqueTriangle(result) => assert!((result.triangle.angle_c - 90.0).abs() < 1e-9),
            other => panic!("unexpected solution {:?}", other),
        }
        assert!(!solution.steps().is_empty());
    }

    #[test]
    fn test_solution_serializes_with_tag() {
        let problem = Problem::Evaluate(EvaluateInput {
            function: crate::angle::TrigFunction::Sin,
            angle: 30.0,
            angle_mode: AngleMode::Degrees,
        });
        let solution = problem.solve().unwrap();
        let value = serde_json::to_value(&solution).unwrap();
        assert_eq!(value["type"], "evaluate");
        assert_eq!(value["exact"], "1/2");
    }

    #[test]
    fn test_errors_propagate() {
        let problem = Problem::Inverse(InverseInput {
            function: crate::angle::InverseFunction::Arcsin,
            x: 2.0,
        });
        assert_eq!(problem.solve().unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_parse_sinusoid_document() {
        let json = r#"{"type": "parse_sinusoid", "equation": "y = 3cos(2x) - 1"}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        match problem.solve().unwrap() {
            Solution::ParseSinusoid(parsed) => {
                assert_eq!(parsed.amplitude, 3.0);
                assert_eq!(parsed.minimum, -4.0);
            }
            other => panic!("unexpected solution {:?}", other),
        }
    }
}
