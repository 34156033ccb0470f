//! # Oblique Triangles
//!
//! Solves non-right triangles from three known parts using the law of sines
//! and the law of cosines, and computes triangle areas.
//!
//! Sides are named `a`, `b`, `c`, each opposite the angle of the same letter.
//! All angles are in degrees.
//!
//! ## Cases
//!
//! | Case | Known | Method |
//! |------|-------|--------|
//! | AAS | A, B, a | law of sines |
//! | ASA | A, c, B | law of sines |
//! | SSA | a, b, A | law of sines; may have two solutions |
//! | SAS | a, C, b | law of cosines |
//! | SSS | a, b, c | law of cosines |
//!
//! ## Example
//!
//! ```rust
//! use trig_core::calculations::oblique::{solve, ObliqueCase};
//!
//! let result = solve(&ObliqueCase::Sss { a: 3.0, b: 4.0, c: 5.0 }).unwrap();
//! assert!((result.triangle.angle_c - 90.0).abs() < 1e-9);
//! assert!((result.triangle.area - 6.0).abs() < 1e-9);
//! ```

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::angle::{to_degrees, to_radians};
use crate::derivation::Derivation;
use crate::errors::{require_finite, require_positive, TrigError, TrigResult};
use crate::expression::{format_degrees, format_number};

/// Known parts of an oblique triangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "case", rename_all = "UPPERCASE")]
pub enum ObliqueCase {
    Aas { angle_a: f64, angle_b: f64, a: f64 },
    Asa { angle_a: f64, c: f64, angle_b: f64 },
    Ssa { a: f64, b: f64, angle_a: f64 },
    Sas { a: f64, angle_c: f64, b: f64 },
    Sss { a: f64, b: f64, c: f64 },
}

impl ObliqueCase {
    /// Short case name, e.g. "SSA"
    pub fn name(&self) -> &'static str {
        match self {
            ObliqueCase::Aas { .. } => "AAS",
            ObliqueCase::Asa { .. } => "ASA",
            ObliqueCase::Ssa { .. } => "SSA",
            ObliqueCase::Sas { .. } => "SAS",
            ObliqueCase::Sss { .. } => "SSS",
        }
    }
}

impl fmt::Display for ObliqueCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let long = match self {
            ObliqueCase::Aas { .. } => "Angle-Angle-Side",
            ObliqueCase::Asa { .. } => "Angle-Side-Angle",
            ObliqueCase::Ssa { .. } => "Side-Side-Angle",
            ObliqueCase::Sas { .. } => "Side-Angle-Side",
            ObliqueCase::Sss { .. } => "Side-Side-Side",
        };
        write!(f, "{} ({})", self.name(), long)
    }
}

/// A fully solved triangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
    /// Heron's formula
    pub area: f64,
}

impl Triangle {
    fn new(a: f64, b: f64, c: f64, angle_a: f64, angle_b: f64, angle_c: f64) -> Self {
        Triangle {
            a,
            b,
            c,
            angle_a,
            angle_b,
            angle_c,
            area: heron(a, b, c).1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObliqueResult {
    pub triangle: Triangle,
    /// The other triangle in the ambiguous SSA case
    pub second_solution: Option<Triangle>,
    pub steps: Derivation,
}

fn require_angle(field: &str, degrees: f64) -> TrigResult<f64> {
    require_finite(field, degrees)?;
    if degrees <= 0.0 || degrees >= 180.0 {
        return Err(TrigError::invalid_input(
            field,
            format_number(degrees),
            "Angle must be between 0° and 180°",
        ));
    }
    Ok(degrees)
}

fn sin_deg(degrees: f64) -> f64 {
    to_radians(degrees).sin()
}

/// Angle opposite `opposite`, from the law of cosines, in degrees.
fn law_of_cosines_angle(opposite: f64, side1: f64, side2: f64) -> f64 {
    let cos = (side1 * side1 + side2 * side2 - opposite * opposite) / (2.0 * side1 * side2);
    to_degrees(cos.clamp(-1.0, 1.0).acos())
}

fn check_triangle_inequality(a: f64, b: f64, c: f64) -> TrigResult<()> {
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(TrigError::invalid_input(
            "sides",
            format!("{}, {}, {}", format_number(a), format_number(b), format_number(c)),
            "Invalid triangle: sum of any two sides must be greater than the third",
        ));
    }
    Ok(())
}

/// Semi-perimeter and area. Rounding noise below zero is treated as zero.
fn heron(a: f64, b: f64, c: f64) -> (f64, f64) {
    let s = (a + b + c) / 2.0;
    let product = s * (s - a) * (s - b) * (s - c);
    (s, product.max(0.0).sqrt())
}

/// Solve an oblique triangle.
pub fn solve(case: &ObliqueCase) -> TrigResult<ObliqueResult> {
    debug!("solving oblique triangle: {:?}", case);
    let mut steps = Derivation::new(format!("Solving Triangle: {}", case));
    let mut second_solution = None;

    let triangle = match *case {
        ObliqueCase::Aas { angle_a, angle_b, a } => {
            let angle_a = require_angle("angle_a", angle_a)?;
            let angle_b = require_angle("angle_b", angle_b)?;
            let a = require_positive("a", a)?;
            let angle_c = third_angle(angle_a, angle_b)?;

            let ratio = a / sin_deg(angle_a);
            let b = ratio * sin_deg(angle_b);
            let c = ratio * sin_deg(angle_c);

            steps.given(format!("A = {}, B = {}, a = {}", format_degrees(angle_a), format_degrees(angle_b), format_number(a)));
            steps.step("Find the third angle", [format!("C = 180° - A - B = {}", format_degrees(angle_c))]);
            steps.step(
                "Apply the law of sines",
                [
                    format!("a/sin(A) = {}", format_number(ratio)),
                    format!("b = {} × sin(B) = {}", format_number(ratio), format_number(b)),
                    format!("c = {} × sin(C) = {}", format_number(ratio), format_number(c)),
                ],
            );
            Triangle::new(a, b, c, angle_a, angle_b, angle_c)
        }
        ObliqueCase::Asa { angle_a, c, angle_b } => {
            let angle_a = require_angle("angle_a", angle_a)?;
            let angle_b = require_angle("angle_b", angle_b)?;
            let c = require_positive("c", c)?;
            let angle_c = third_angle(angle_a, angle_b)?;

            let ratio = c / sin_deg(angle_c);
            let a = ratio * sin_deg(angle_a);
            let b = ratio * sin_deg(angle_b);

            steps.given(format!("A = {}, c = {}, B = {}", format_degrees(angle_a), format_number(c), format_degrees(angle_b)));
            steps.step("Find the third angle", [format!("C = 180° - A - B = {}", format_degrees(angle_c))]);
            steps.step(
                "Apply the law of sines",
                [
                    format!("c/sin(C) = {}", format_number(ratio)),
                    format!("a = {} × sin(A) = {}", format_number(ratio), format_number(a)),
                    format!("b = {} × sin(B) = {}", format_number(ratio), format_number(b)),
                ],
            );
            Triangle::new(a, b, c, angle_a, angle_b, angle_c)
        }
        ObliqueCase::Ssa { a, b, angle_a } => {
            let a = require_positive("a", a)?;
            let b = require_positive("b", b)?;
            let angle_a = require_angle("angle_a", angle_a)?;

            let sin_b = b * sin_deg(angle_a) / a;
            steps.given(format!("a = {}, b = {}, A = {}", format_number(a), format_number(b), format_degrees(angle_a)));
            steps.step(
                "Apply the law of sines",
                [
                    "sin(B) = b × sin(A) / a".to_string(),
                    format!("sin(B) = {}", format_number(sin_b)),
                ],
            );
            if sin_b > 1.0 {
                return Err(TrigError::domain_error("SSA", "No solution exists (sin B > 1)"));
            }

            let angle_b = to_degrees(sin_b.min(1.0).asin());
            let angle_c = 180.0 - angle_a - angle_b;
            if angle_c <= 0.0 {
                return Err(TrigError::domain_error(
                    "SSA",
                    "No valid triangle (angles sum exceeds 180°)",
                ));
            }
            let c = a * sin_deg(angle_c) / sin_deg(angle_a);
            steps.step(
                "Solve the remaining parts",
                [
                    format!("B = arcsin({}) = {}", format_number(sin_b), format_degrees(angle_b)),
                    format!("C = 180° - A - B = {}", format_degrees(angle_c)),
                    format!("c = a × sin(C) / sin(A) = {}", format_number(c)),
                ],
            );

            let angle_b2 = 180.0 - angle_b;
            let angle_c2 = 180.0 - angle_a - angle_b2;
            if angle_c2 > 0.0 && (angle_b2 - angle_b).abs() > 1e-9 {
                let c2 = a * sin_deg(angle_c2) / sin_deg(angle_a);
                warn!("ambiguous SSA case: second solution with B = {}°", format_number(angle_b2));
                steps.note(format!(
                    "⚠️ Ambiguous case: Second solution exists with B = {}°, C = {}°",
                    format_number(angle_b2),
                    format_number(angle_c2)
                ));
                second_solution = Some(Triangle::new(a, b, c2, angle_a, angle_b2, angle_c2));
            }
            Triangle::new(a, b, c, angle_a, angle_b, angle_c)
        }
        ObliqueCase::Sas { a, angle_c, b } => {
            let a = require_positive("a", a)?;
            let b = require_positive("b", b)?;
            let angle_c = require_angle("angle_c", angle_c)?;

            let c = (a * a + b * b - 2.0 * a * b * to_radians(angle_c).cos()).sqrt();
            if c < 1e-10 {
                return Err(TrigError::calculation_failed("SAS", "Invalid triangle configuration"));
            }
            let angle_a = law_of_cosines_angle(a, b, c);
            let angle_b = 180.0 - angle_a - angle_c;

            steps.given(format!("a = {}, C = {}, b = {}", format_number(a), format_degrees(angle_c), format_number(b)));
            steps.step(
                "Apply the law of cosines",
                [
                    "c² = a² + b² - 2ab·cos(C)".to_string(),
                    format!("c = {}", format_number(c)),
                ],
            );
            steps.step(
                "Solve the remaining angles",
                [
                    format!("A = arccos((b² + c² - a²)/(2bc)) = {}", format_degrees(angle_a)),
                    format!("B = 180° - A - C = {}", format_degrees(angle_b)),
                ],
            );
            Triangle::new(a, b, c, angle_a, angle_b, angle_c)
        }
        ObliqueCase::Sss { a, b, c } => {
            let a = require_positive("a", a)?;
            let b = require_positive("b", b)?;
            let c = require_positive("c", c)?;
            check_triangle_inequality(a, b, c)?;

            let angle_a = law_of_cosines_angle(a, b, c);
            let angle_b = law_of_cosines_angle(b, a, c);
            let angle_c = 180.0 - angle_a - angle_b;

            steps.given(format!("a = {}, b = {}, c = {}", format_number(a), format_number(b), format_number(c)));
            steps.step(
                "Apply the law of cosines",
                [
                    format!("A = arccos((b² + c² - a²)/(2bc)) = {}", format_degrees(angle_a)),
                    format!("B = arccos((a² + c² - b²)/(2ac)) = {}", format_degrees(angle_b)),
                    format!("C = 180° - A - B = {}", format_degrees(angle_c)),
                ],
            );
            Triangle::new(a, b, c, angle_a, angle_b, angle_c)
        }
    };

    steps.step(
        "Area (Heron's formula)",
        [format!("Area = {} square units", format_number(triangle.area))],
    );

    Ok(ObliqueResult {
        triangle,
        second_solution,
        steps,
    })
}

fn third_angle(angle_a: f64, angle_b: f64) -> TrigResult<f64> {
    if angle_a + angle_b >= 180.0 {
        return Err(TrigError::invalid_input(
            "angle_b",
            format_number(angle_b),
            "Angles A + B must be less than 180°",
        ));
    }
    Ok(180.0 - angle_a - angle_b)
}

// ============================================================================
// Area
// ============================================================================

/// Two sides and the included angle (degrees).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaSasInput {
    pub a: f64,
    pub b: f64,
    pub angle_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaSasResult {
    pub area: f64,
    pub steps: Derivation,
}

/// Area = ½ab·sin(C)
pub fn area_sas(input: &AreaSasInput) -> TrigResult<AreaSasResult> {
    let a = require_finite("a", input.a)?;
    let b = require_finite("b", input.b)?;
    let angle_c = require_finite("angle_c", input.angle_c)?;

    let sin_c = sin_deg(angle_c);
    let area = 0.5 * a * b * sin_c;

    let (fa, fb, fc) = (format_number(a), format_number(b), format_number(angle_c));
    let mut steps = Derivation::new("Area using SAS Formula");
    steps.given(format!("Side a = {}", fa));
    steps.given(format!("Side b = {}", fb));
    steps.given(format!("Angle C = {}°", fc));
    steps.step("Apply formula", ["Area = ½ × a × b × sin(C)"]);
    steps.step(
        "Calculate",
        [
            format!("Area = ½ × {} × {} × sin({}°)", fa, fb, fc),
            format!("Area = ½ × {} × {} × {}", fa, fb, format_number(sin_c)),
            format!("Area = {} square units", format_number(area)),
        ],
    );

    Ok(AreaSasResult { area, steps })
}

/// Three sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaHeronInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaHeronResult {
    pub area: f64,
    pub semi_perimeter: f64,
    pub steps: Derivation,
}

/// Area = √(s(s-a)(s-b)(s-c))
pub fn area_heron(input: &AreaHeronInput) -> TrigResult<AreaHeronResult> {
    let a = require_finite("a", input.a)?;
    let b = require_finite("b", input.b)?;
    let c = require_finite("c", input.c)?;
    check_triangle_inequality(a, b, c)?;

    let (s, area) = heron(a, b, c);
    let (fa, fb, fc, fs) = (format_number(a), format_number(b), format_number(c), format_number(s));

    let mut steps = Derivation::new("Area using Heron's Formula");
    steps.given(format!("Side a = {}", fa));
    steps.given(format!("Side b = {}", fb));
    steps.given(format!("Side c = {}", fc));
    steps.step(
        "Calculate semi-perimeter",
        [
            "s = (a + b + c) / 2".to_string(),
            format!("s = ({} + {} + {}) / 2", fa, fb, fc),
            format!("s = {}", fs),
        ],
    );
    steps.step(
        "Apply Heron's formula",
        [
            "Area = √(s(s-a)(s-b)(s-c))".to_string(),
            format!(
                "Area = √({} × {} × {} × {})",
                fs,
                format_number(s - a),
                format_number(s - b),
                format_number(s - c)
            ),
            format!("Area = √{}", format_number(s * (s - a) * (s - b) * (s - c))),
            format!("Area = {} square units", format_number(area)),
        ],
    );

    Ok(AreaHeronResult {
        area,
        semi_perimeter: s,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_aas() {
        let result = solve(&ObliqueCase::Aas { angle_a: 30.0, angle_b: 60.0, a: 5.0 }).unwrap();
        let t = result.triangle;
        assert!(close(t.angle_c, 90.0));
        assert!(close(t.c, 10.0));
        assert!(close(t.b, 5.0 * 3f64.sqrt()));
        assert!(result.second_solution.is_none());
    }

    #[test]
    fn test_asa() {
        let result = solve(&ObliqueCase::Asa { angle_a: 45.0, c: 10.0, angle_b: 45.0 }).unwrap();
        let t = result.triangle;
        assert!(close(t.a, t.b));
        assert!(close(t.a, 10.0 / 2f64.sqrt()));
        assert!(close(t.area, 25.0));
    }

    #[test]
    fn test_angle_sum_rejected() {
        let err = solve(&ObliqueCase::Aas { angle_a: 100.0, angle_b: 80.0, a: 5.0 }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_ssa_ambiguous() {
        let result = solve(&ObliqueCase::Ssa { a: 6.0, b: 8.0, angle_a: 35.0 }).unwrap();
        let second = result.second_solution.expect("two triangles");
        assert!(close(result.triangle.angle_b + second.angle_b, 180.0));
        assert!(second.c < result.triangle.c);
        assert_eq!(result.steps.notes.len(), 1);
        assert!(result.steps.to_string().contains("Ambiguous case"));
    }

    #[test]
    fn test_ssa_single_solution() {
        let result = solve(&ObliqueCase::Ssa { a: 10.0, b: 5.0, angle_a: 30.0 }).unwrap();
        assert!(result.second_solution.is_none());
        assert!(close(result.triangle.angle_b, 14.477512));
    }

    #[test]
    fn test_ssa_no_solution() {
        let err = solve(&ObliqueCase::Ssa { a: 2.0, b: 10.0, angle_a: 60.0 }).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(err.to_string().contains("sin B > 1"));
    }

    #[test]
    fn test_sas() {
        let result = solve(&ObliqueCase::Sas { a: 3.0, angle_c: 90.0, b: 4.0 }).unwrap();
        let t = result.triangle;
        assert!(close(t.c, 5.0));
        assert!(close(t.angle_a + t.angle_b, 90.0));
    }

    #[test]
    fn test_sss() {
        let result = solve(&ObliqueCase::Sss { a: 7.0, b: 7.0, c: 7.0 }).unwrap();
        let t = result.triangle;
        assert!(close(t.angle_a, 60.0));
        assert!(close(t.angle_b, 60.0));
        assert!(close(t.angle_c, 60.0));
    }

    #[test]
    fn test_sss_triangle_inequality() {
        assert!(solve(&ObliqueCase::Sss { a: 1.0, b: 2.0, c: 3.0 }).is_err());
        assert!(solve(&ObliqueCase::Sss { a: -1.0, b: 2.0, c: 2.0 }).is_err());
    }

    #[test]
    fn test_case_serialization() {
        let case: ObliqueCase = serde_json::from_str(r#"{"case":"SAS","a":3.0,"angle_c":90.0,"b":4.0}"#).unwrap();
        assert_eq!(case.name(), "SAS");
        assert_eq!(case.to_string(), "SAS (Side-Angle-Side)");
    }

    #[test]
    fn test_area_sas() {
        let result = area_sas(&AreaSasInput { a: 8.0, b: 5.0, angle_c: 30.0 }).unwrap();
        assert!(close(result.area, 10.0));
        assert!(result.steps.to_string().contains("Area = 10 square units"));
    }

    #[test]
    fn test_area_heron() {
        let result = area_heron(&AreaHeronInput { a: 3.0, b: 4.0, c: 5.0 }).unwrap();
        assert!(close(result.area, 6.0));
        assert_eq!(result.semi_perimeter, 6.0);
        assert!(area_heron(&AreaHeronInput { a: 1.0, b: 1.0, c: 5.0 }).is_err());
    }
}
