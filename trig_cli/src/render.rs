//! Terminal output for solved problems.

use trig_core::calculations::complex::ComplexValue;
use trig_core::calculations::oblique::Triangle;
use trig_core::calculations::vectors::VectorValue;
use trig_core::expression::{format_angle, format_degrees, format_number_to, DEFAULT_DECIMALS};
use trig_core::settings::{CalculatorLevel, Settings};
use trig_core::{format_complex, format_number, Problem, Solution};

const RULE: &str = "═══════════════════════════════════════";

/// Print a labelled result block, then the derivation when steps are enabled.
pub fn print_solution(problem: &Problem, solution: &Solution, settings: &Settings) {
    println!();
    println!("{}", RULE);
    println!("  {}", problem.kind().to_uppercase());
    println!("{}", RULE);

    for (label, value) in lines(problem, solution, settings) {
        println!("  {:<22} {}", format!("{}:", label), value);
    }

    if settings.show_steps {
        println!();
        println!("{}", solution.steps());
    }
    println!("{}", RULE);
}

fn lines(problem: &Problem, solution: &Solution, settings: &Settings) -> Vec<(&'static str, String)> {
    let mode = settings.angle_mode;
    match solution {
        Solution::AngleConversion(r) => vec![
            ("Degrees", format_degrees(r.degrees)),
            ("Radians", r.radians_display.clone()),
            ("DMS", r.dms.to_string()),
            ("Normalized", format_degrees(r.normalized_degrees)),
            ("Quadrant", r.quadrant.to_string()),
            ("Reference angle", format_degrees(r.reference_angle)),
            ("Coterminal", format_degrees(r.coterminal_degrees)),
        ],
        Solution::ArcSector(r) => vec![
            ("Angle", format!("{} rad", format_number(r.angle_radians))),
            ("Arc length", format_number(r.arc_length)),
            ("Sector area", format_number(r.sector_area)),
            ("Circumference", format_number(r.circumference)),
            ("Circle area", format_number(r.circle_area)),
            ("Arc share", format!("{}%", format_number_to(r.arc_percent, 2))),
            ("Sector share", format!("{}%", format_number_to(r.sector_percent, 2))),
        ],
        Solution::AngularSpeed(r) => {
            let (length, angular, linear) = match problem {
                Problem::AngularSpeed(input) => (
                    input.length_unit.label(),
                    input.angular_unit.label(),
                    input.linear_unit.label(),
                ),
                _ => ("", "", ""),
            };
            vec![
                ("Radius", format!("{} {}", format_number(r.radius), length)),
                ("Angular speed ω", format!("{} {}", format_number(r.angular_speed), angular)),
                ("Linear speed v", format!("{} {}", format_number(r.linear_speed), linear)),
                ("Solved for", r.solved.to_string()),
            ]
        }
        Solution::RightTriangle(r) => {
            let mut out = vec![
                ("Side a", format_number(r.a)),
                ("Side b", format_number(r.b)),
                ("Hypotenuse c", format_number(r.c)),
                ("Angle A", format_degrees(r.angle_a_deg)),
                ("Angle B", format_degrees(r.angle_b_deg)),
                ("Area", format_number(r.area)),
            ];
            out.extend(r.ratios.iter().map(|ratio| (ratio.function.name(), ratio.display())));
            out
        }
        Solution::Elevation(r) => vec![
            ("Height", format_number(r.height)),
            ("tan θ", format_number(r.tangent)),
        ],
        Solution::Depression(r) => vec![
            ("Horizontal distance", format_number(r.distance)),
            ("tan θ", format_number(r.tangent)),
        ],
        Solution::Bearing(r) => vec![
            ("Azimuth", format_degrees(r.azimuth_deg)),
            ("North/South", r.north_south_display()),
            ("East/West", r.east_west_display()),
        ],
        Solution::Evaluate(r) => {
            let decimals = match settings.level {
                CalculatorLevel::Foundations => DEFAULT_DECIMALS,
                CalculatorLevel::Advanced => 10,
            };
            let mut out = vec![("Value", format_number_to(r.value, decimals))];
            if let Some(exact) = &r.exact {
                out.push(("Exact", exact.clone()));
            }
            out.push(("Angle", format_degrees(r.degrees)));
            out.push(("Quadrant", r.quadrant.to_string()));
            out.push(("Reference angle", format_degrees(r.reference_angle)));
            out
        }
        Solution::Inverse(r) => vec![
            ("Result", format_angle(r.radians, mode)),
            ("Radians", r.radians_display.clone()),
            ("Degrees", format_degrees(r.degrees)),
        ],
        Solution::Composition(r) => vec![
            ("Expression", r.expression.clone()),
            ("Value", format_number(r.value)),
        ],
        Solution::TrigEquation(r) => {
            let mut out: Vec<(&'static str, String)> =
                r.families.iter().map(|family| ("General solution", family.to_string())).collect();
            let one_turn: Vec<String> = r.solutions_in_one_turn.iter().map(|d| format_degrees(*d)).collect();
            out.push(("In [0°, 360°)", one_turn.join(", ")));
            out
        }
        Solution::ParseSinusoid(r) => vec![
            ("Function", r.function.to_string()),
            ("Amplitude", format_number(r.amplitude)),
            ("B", format_number(r.b)),
            ("Period", r.period_display.clone()),
            ("Phase shift", format_number(r.phase_shift)),
            ("Vertical shift", format_number(r.vertical_shift)),
            ("Maximum", format_number(r.maximum)),
            ("Minimum", format_number(r.minimum)),
        ],
        Solution::BuildSinusoid(r) => vec![
            ("Equation", r.equation.clone()),
            ("B", format_number(r.b)),
            ("Period", format_number(r.period)),
        ],
        Solution::SinusoidModel(r) => vec![
            ("Equation", r.equation.clone()),
            ("Amplitude", format_number(r.amplitude)),
            ("Midline", format_number(r.midline)),
            ("B", format_number(r.b)),
            ("Phase shift", format_number(r.phase_shift)),
        ],
        Solution::ObliqueTriangle(r) => {
            let mut out = triangle_lines(&r.triangle);
            if let Some(second) = &r.second_solution {
                out.push(("Second solution", String::new()));
                out.extend(triangle_lines(second));
            }
            out
        }
        Solution::AreaSas(r) => vec![("Area", format_number(r.area))],
        Solution::AreaHeron(r) => vec![
            ("Semi-perimeter s", format_number(r.semi_perimeter)),
            ("Area", format_number(r.area)),
        ],
        Solution::VectorOp(r) => {
            let mut out = vec![("Result", r.display.clone())];
            match &r.value {
                VectorValue::Vector { magnitude, .. } => out.push(("Magnitude", format_number(*magnitude))),
                VectorValue::Angle { radians } => out.push(("Angle", format_angle(*radians, mode))),
                VectorValue::Scalar { .. } => {}
            }
            out
        }
        Solution::VectorAnalysis(r) => vec![
            ("Magnitude", format_number(r.magnitude)),
            ("Direction", r.direction_display.clone()),
            ("Unit vector", r.unit.to_string()),
        ],
        Solution::RectToPolar(r) => vec![
            ("r", format_number(r.r)),
            ("θ", r.theta_display.clone()),
        ],
        Solution::PolarToRect(r) => vec![
            ("x", format_number(r.x)),
            ("y", format_number(r.y)),
        ],
        Solution::ComplexOp(r) => {
            let mut out = vec![("Result", r.display.clone())];
            if let ComplexValue::Number { z } = &r.value {
                out.push(("Rectangular", format_complex(z.re, z.im)));
            }
            out
        }
        Solution::DeMoivre(r) => vec![("Result", r.display.clone())],
        Solution::Parametric(r) => vec![
            ("Equations", r.equations.clone()),
            ("x", format_number(r.x)),
            ("y", format_number(r.y)),
        ],
        Solution::Projectile(r) => vec![
            ("v₀ₓ", format!("{} m/s", format_number(r.v0x))),
            ("v₀ᵧ", format!("{} m/s", format_number(r.v0y))),
            ("Time to max height", format!("{} s", format_number(r.time_to_max))),
            ("Max height", format!("{} m", format_number(r.max_height))),
            ("Time of flight", format!("{} s", format_number(r.time_of_flight))),
            ("Range", format!("{} m", format_number(r.range))),
        ],
        Solution::Harmonic(r) => vec![
            ("Position", format_number(r.position)),
            ("Velocity", format_number(r.velocity)),
            ("Acceleration", format_number(r.acceleration)),
            ("Period", format!("{} s", format_number(r.period))),
            ("Frequency", format!("{} Hz", format_number(r.frequency))),
            ("Max velocity", format_number(r.max_velocity)),
        ],
    }
}

fn triangle_lines(t: &Triangle) -> Vec<(&'static str, String)> {
    vec![
        ("Side a", format_number(t.a)),
        ("Side b", format_number(t.b)),
        ("Side c", format_number(t.c)),
        ("Angle A", format_degrees(t.angle_a)),
        ("Angle B", format_degrees(t.angle_b)),
        ("Angle C", format_degrees(t.angle_c)),
        ("Area", format_number(t.area)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use trig_core::calculations::AreaHeronInput;

    #[test]
    fn test_heron_lines() {
        let problem = Problem::AreaHeron(AreaHeronInput { a: 3.0, b: 4.0, c: 5.0 });
        let solution = problem.solve().unwrap();
        let out = lines(&problem, &solution, &Settings::default());
        assert_eq!(out[0], ("Semi-perimeter s", "6".to_string()));
        assert_eq!(out[1], ("Area", "6".to_string()));
    }

    #[test]
    fn test_advanced_evaluate_uses_ten_decimals() {
        let problem: Problem =
            serde_json::from_str(r#"{"type": "evaluate", "function": "sin", "angle": 1.0, "angle_mode": "radians"}"#)
                .unwrap();
        let solution = problem.solve().unwrap();
        let settings = Settings {
            level: CalculatorLevel::Advanced,
            ..Settings::default()
        };
        let out = lines(&problem, &solution, &settings);
        assert_eq!(out[0].1, "0.8414709848");
    }
}
