//! # Right Triangle Solver
//!
//! Solves a right triangle from two sides, or from one side and one acute
//! angle. Side `c` is the hypotenuse, angle C is the right angle, and side
//! `a` is opposite angle A.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::angle::AngleMode;
//! use trig_core::calculations::right_triangle::{solve, RightTriangleInput};
//!
//! let input = RightTriangleInput {
//!     a: Some(3.0),
//!     b: Some(4.0),
//!     angle_mode: AngleMode::Degrees,
//!     ..Default::default()
//! };
//! let result = solve(&input).unwrap();
//! assert!((result.c - 5.0).abs() < 1e-12);
//! assert!((result.area - 6.0).abs() < 1e-12);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angle::{exact_value, to_degrees, to_radians, AngleMode, TrigFunction};
use crate::derivation::Derivation;
use crate::errors::{require_finite, require_positive, TrigError, TrigResult};
use crate::expression::{format_number, ZERO_EPSILON};

/// Known parts of a right triangle. Angles are in `angle_mode` units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RightTriangleInput {
    /// Leg opposite angle A
    pub a: Option<f64>,
    /// Leg adjacent to angle A
    pub b: Option<f64>,
    /// Hypotenuse
    pub c: Option<f64>,
    pub angle_a: Option<f64>,
    pub angle_b: Option<f64>,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

impl RightTriangleInput {
    pub fn validate(&self) -> TrigResult<()> {
        for (field, side) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if let Some(value) = side {
                require_positive(field, value)?;
            }
        }
        for (field, angle) in [("angle_a", self.angle_a), ("angle_b", self.angle_b)] {
            if let Some(value) = angle {
                let degrees = self.angle_mode.to_degrees(require_finite(field, value)?);
                if degrees <= 0.0 || degrees >= 90.0 {
                    return Err(TrigError::invalid_input(
                        field,
                        format_number(value),
                        "Acute angle must be between 0° and 90°",
                    ));
                }
            }
        }

        if self.side_count() == 0 {
            return Err(TrigError::calculation_failed("Right Triangle", "At least one side is required"));
        }
        if self.side_count() + self.angle_count() < 2 {
            return Err(TrigError::calculation_failed("Right Triangle", "Please provide at least two values"));
        }
        Ok(())
    }

    pub fn side_count(&self) -> usize {
        [self.a, self.b, self.c].iter().filter(|s| s.is_some()).count()
    }

    pub fn angle_count(&self) -> usize {
        [self.angle_a, self.angle_b].iter().filter(|s| s.is_some()).count()
    }
}

/// A trigonometric ratio, exact where the angle is a special angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioValue {
    pub function: TrigFunction,
    /// Symbolic value such as "√3/2"
    pub exact: Option<String>,
    pub value: f64,
}

impl RatioValue {
    /// Evaluate `function` at an angle in degrees.
    pub fn at_degrees(function: TrigFunction, degrees: f64) -> Self {
        let radians = to_radians(degrees);
        let value = match function {
            TrigFunction::Sin => radians.sin(),
            TrigFunction::Cos => radians.cos(),
            TrigFunction::Tan if radians.cos().abs() < ZERO_EPSILON => f64::INFINITY,
            TrigFunction::Tan => radians.tan(),
            TrigFunction::Csc => 1.0 / radians.sin(),
            TrigFunction::Sec => 1.0 / radians.cos(),
            TrigFunction::Cot => 1.0 / radians.tan(),
        };
        RatioValue {
            function,
            exact: exact_value(degrees, function).map(str::to_string),
            value,
        }
    }

    /// Exact form when known, otherwise the decimal.
    pub fn display(&self) -> String {
        match &self.exact {
            Some(exact) => exact.clone(),
            None if self.value.is_infinite() => "undefined".to_string(),
            None => format_number(self.value),
        }
    }
}

/// Fully solved right triangle. Angles are in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RightTriangleResult {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub angle_a_deg: f64,
    pub angle_b_deg: f64,
    pub area: f64,
    /// sin, cos and tan at angle A
    pub ratios: Vec<RatioValue>,
    pub steps: Derivation,
}

/// Solve a right triangle.
pub fn solve(input: &RightTriangleInput) -> TrigResult<RightTriangleResult> {
    input.validate()?;

    let mode = input.angle_mode;
    let mut steps = Derivation::new("Right Triangle Solution");

    let (a, b, c, angle_a) = if input.side_count() >= 2 {
        let (a, b, c) = solve_two_sides(input, &mut steps)?;
        let ratio = (a / c).clamp(-1.0, 1.0);
        let angle_a = to_degrees(ratio.asin());
        steps.step(
            "Find angle A",
            [
                format!(
                    "sin(A) = a/c = {}/{} = {}",
                    format_number(a),
                    format_number(c),
                    format_number(a / c)
                ),
                format!("A = arcsin({}) = {}°", format_number(a / c), format_number(angle_a)),
            ],
        );
        steps.step(
            "Find angle B",
            [format!(
                "B = 90° - A = 90° - {}° = {}°",
                format_number(angle_a),
                format_number(90.0 - angle_a)
            )],
        );
        (a, b, c, angle_a)
    } else {
        solve_side_angle(input, &mut steps)?
    };
    let angle_b = 90.0 - angle_a;

    let area = 0.5 * a * b;
    steps.step(
        "Calculate Area",
        [format!(
            "Area = ½ × a × b = ½ × {} × {} = {} sq units",
            format_number(a),
            format_number(b),
            format_number(area)
        )],
    );
    debug!("right triangle solved in {} mode: a={} b={} c={}", mode.label(), a, b, c);

    let ratios = [TrigFunction::Sin, TrigFunction::Cos, TrigFunction::Tan]
        .into_iter()
        .map(|function| RatioValue::at_degrees(function, angle_a))
        .collect();

    Ok(RightTriangleResult {
        a,
        b,
        c,
        angle_a_deg: angle_a,
        angle_b_deg: angle_b,
        area,
        ratios,
        steps,
    })
}

fn solve_two_sides(input: &RightTriangleInput, steps: &mut Derivation) -> TrigResult<(f64, f64, f64)> {
    match (input.a, input.b, input.c) {
        (Some(a), Some(b), given_c) => {
            let c = (a * a + b * b).sqrt();
            if let Some(given) = given_c {
                if (given - c).abs() > 1e-6 * c {
                    return Err(TrigError::calculation_failed(
                        "Right Triangle",
                        format!(
                            "Sides do not satisfy a² + b² = c² ({}² + {}² ≠ {}²)",
                            format_number(a),
                            format_number(b),
                            format_number(given)
                        ),
                    ));
                }
            }
            steps.given(format!("a = {}, b = {}", format_number(a), format_number(b)));
            steps.step(
                "Find hypotenuse c using Pythagorean theorem",
                [
                    format!(
                        "c² = a² + b² = {}² + {}² = {}",
                        format_number(a),
                        format_number(b),
                        format_number(a * a + b * b)
                    ),
                    format!("c = √{} = {}", format_number(a * a + b * b), format_number(c)),
                ],
            );
            Ok((a, b, c))
        }
        (Some(a), None, Some(c)) => {
            if a >= c {
                return Err(TrigError::calculation_failed(
                    "Right Triangle",
                    "Side a must be less than hypotenuse c",
                ));
            }
            let b = (c * c - a * a).sqrt();
            steps.given(format!("a = {}, c = {}", format_number(a), format_number(c)));
            steps.step(
                "Find side b",
                [
                    format!(
                        "b² = c² - a² = {}² - {}² = {}",
                        format_number(c),
                        format_number(a),
                        format_number(c * c - a * a)
                    ),
                    format!("b = √{} = {}", format_number(c * c - a * a), format_number(b)),
                ],
            );
            Ok((a, b, c))
        }
        (None, Some(b), Some(c)) => {
            if b >= c {
                return Err(TrigError::calculation_failed(
                    "Right Triangle",
                    "Side b must be less than hypotenuse c",
                ));
            }
            let a = (c * c - b * b).sqrt();
            steps.given(format!("b = {}, c = {}", format_number(b), format_number(c)));
            steps.step(
                "Find side a",
                [
                    format!(
                        "a² = c² - b² = {}² - {}² = {}",
                        format_number(c),
                        format_number(b),
                        format_number(c * c - b * b)
                    ),
                    format!("a = √{} = {}", format_number(c * c - b * b), format_number(a)),
                ],
            );
            Ok((a, b, c))
        }
        _ => Err(TrigError::calculation_failed("Right Triangle", "Two sides are required")),
    }
}

/// One side plus angle A (or B, from which A = 90° - B).
fn solve_side_angle(input: &RightTriangleInput, steps: &mut Derivation) -> TrigResult<(f64, f64, f64, f64)> {
    let mode = input.angle_mode;
    let angle_a = match (input.angle_a, input.angle_b) {
        (Some(a_angle), _) => mode.to_degrees(a_angle),
        (None, Some(b_angle)) => 90.0 - mode.to_degrees(b_angle),
        (None, None) => {
            return Err(TrigError::calculation_failed("Right Triangle", "An acute angle is required"));
        }
    };
    let angle_b = 90.0 - angle_a;
    let rad = to_radians(angle_a);
    let a_fmt = format_number(angle_a);

    let (a, b, c) = match (input.a, input.b, input.c) {
        (Some(a), _, _) => {
            let c = a / rad.sin();
            let b = a / rad.tan();
            steps.given(format!("a = {}, A = {}°", format_number(a), a_fmt));
            steps.step("Find B", [format!("B = 90° - A = {}°", format_number(angle_b))]);
            steps.step(
                "Find c",
                [format!("c = a/sin(A) = {}/sin({}°) = {}", format_number(a), a_fmt, format_number(c))],
            );
            steps.step(
                "Find b",
                [format!("b = a/tan(A) = {}/tan({}°) = {}", format_number(a), a_fmt, format_number(b))],
            );
            (a, b, c)
        }
        (None, Some(b), _) => {
            let c = b / rad.cos();
            let a = b * rad.tan();
            steps.given(format!("b = {}, A = {}°", format_number(b), a_fmt));
            steps.step("Find B", [format!("B = 90° - A = {}°", format_number(angle_b))]);
            steps.step(
                "Find c",
                [format!("c = b/cos(A) = {}/cos({}°) = {}", format_number(b), a_fmt, format_number(c))],
            );
            steps.step(
                "Find a",
                [format!("a = b×tan(A) = {}×tan({}°) = {}", format_number(b), a_fmt, format_number(a))],
            );
            (a, b, c)
        }
        (None, None, Some(c)) => {
            let a = c * rad.sin();
            let b = c * rad.cos();
            steps.given(format!("c = {}, A = {}°", format_number(c), a_fmt));
            steps.step("Find B", [format!("B = 90° - A = {}°", format_number(angle_b))]);
            steps.step(
                "Find a",
                [format!("a = c×sin(A) = {}×sin({}°) = {}", format_number(c), a_fmt, format_number(a))],
            );
            steps.step(
                "Find b",
                [format!("b = c×cos(A) = {}×cos({}°) = {}", format_number(c), a_fmt, format_number(b))],
            );
            (a, b, c)
        }
        (None, None, None) => {
            return Err(TrigError::calculation_failed("Right Triangle", "At least one side is required"));
        }
    };

    Ok((a, b, c, angle_a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RightTriangleInput {
        RightTriangleInput::default()
    }

    #[test]
    fn test_two_legs() {
        let result = solve(&RightTriangleInput {
            a: Some(3.0),
            b: Some(4.0),
            ..input()
        })
        .unwrap();
        assert!((result.c - 5.0).abs() < 1e-12);
        assert!((result.angle_a_deg - 36.8698976).abs() < 1e-6);
        assert!((result.angle_a_deg + result.angle_b_deg - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_leg_and_hypotenuse() {
        let result = solve(&RightTriangleInput {
            b: Some(4.0),
            c: Some(5.0),
            ..input()
        })
        .unwrap();
        assert!((result.a - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_leg_longer_than_hypotenuse() {
        let err = solve(&RightTriangleInput {
            a: Some(6.0),
            c: Some(5.0),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_three_inconsistent_sides() {
        let err = solve(&RightTriangleInput {
            a: Some(3.0),
            b: Some(4.0),
            c: Some(6.0),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_hypotenuse_and_angle() {
        let result = solve(&RightTriangleInput {
            c: Some(10.0),
            angle_a: Some(30.0),
            ..input()
        })
        .unwrap();
        assert!((result.a - 5.0).abs() < 1e-9);
        assert!((result.b - 8.660254038).abs() < 1e-8);
        assert_eq!(result.ratios[0].display(), "1/2");
        assert_eq!(result.ratios[1].display(), "√3/2");
        assert_eq!(result.ratios[2].display(), "√3/3");
    }

    #[test]
    fn test_side_and_angle_b_in_radians() {
        let result = solve(&RightTriangleInput {
            a: Some(1.0),
            angle_b: Some(std::f64::consts::PI / 4.0),
            angle_mode: AngleMode::Radians,
            ..input()
        })
        .unwrap();
        assert!((result.angle_a_deg - 45.0).abs() < 1e-9);
        assert!((result.b - 1.0).abs() < 1e-9);
        assert!((result.c - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_needs_a_side() {
        let err = solve(&RightTriangleInput {
            angle_a: Some(30.0),
            angle_b: Some(60.0),
            ..input()
        })
        .unwrap_err();
        assert!(err.to_string().contains("At least one side"));
    }

    #[test]
    fn test_needs_two_values() {
        assert!(solve(&RightTriangleInput { a: Some(3.0), ..input() }).is_err());
    }

    #[test]
    fn test_rejects_right_angle_input() {
        let err = solve(&RightTriangleInput {
            a: Some(3.0),
            angle_a: Some(90.0),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_ratio_display_decimal() {
        let ratio = RatioValue::at_degrees(TrigFunction::Sin, 20.0);
        assert_eq!(ratio.exact, None);
        assert_eq!(ratio.display(), "0.34202");
    }
}
