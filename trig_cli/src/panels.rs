//! Calculator panels: each one asks for its fields and assembles a [`Problem`].

use trig_core::angle::{InverseFunction, TrigFunction};
use trig_core::calculations::angles::{AngularSpeedUnit, LengthUnit, LinearSpeedUnit};
use trig_core::calculations::*;
use trig_core::settings::{CalculatorLevel, Settings};
use trig_core::{AngleMode, TrigResult};

use crate::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    AngleConversion,
    ArcSector,
    AngularSpeed,
    RightTriangle,
    Elevation,
    Depression,
    Bearing,
    Evaluate,
    Inverse,
    Composition,
    TrigEquation,
    ParseSinusoid,
    BuildSinusoid,
    SinusoidModel,
    ObliqueTriangle,
    AreaSas,
    AreaHeron,
    VectorOp,
    VectorAnalysis,
    RectToPolar,
    PolarToRect,
    ComplexOp,
    DeMoivre,
    Parametric,
    Projectile,
    Harmonic,
}

const FOUNDATIONS: &[Panel] = &[
    Panel::AngleConversion,
    Panel::ArcSector,
    Panel::AngularSpeed,
    Panel::RightTriangle,
    Panel::Elevation,
    Panel::Depression,
    Panel::Bearing,
    Panel::Evaluate,
    Panel::Inverse,
    Panel::Composition,
    Panel::ParseSinusoid,
    Panel::BuildSinusoid,
    Panel::SinusoidModel,
    Panel::ObliqueTriangle,
    Panel::AreaSas,
    Panel::AreaHeron,
];

const ADVANCED: &[Panel] = &[
    Panel::Evaluate,
    Panel::Inverse,
    Panel::TrigEquation,
    Panel::VectorOp,
    Panel::VectorAnalysis,
    Panel::RectToPolar,
    Panel::PolarToRect,
    Panel::ComplexOp,
    Panel::DeMoivre,
    Panel::Parametric,
    Panel::Projectile,
    Panel::Harmonic,
];

/// Panels offered at a calculator level, in menu order.
pub fn for_level(level: CalculatorLevel) -> &'static [Panel] {
    match level {
        CalculatorLevel::Foundations => FOUNDATIONS,
        CalculatorLevel::Advanced => ADVANCED,
    }
}

impl Panel {
    pub fn label(&self) -> &'static str {
        match self {
            Panel::AngleConversion => "Angle Conversion",
            Panel::ArcSector => "Arc Length & Sector",
            Panel::AngularSpeed => "Linear & Angular Speed",
            Panel::RightTriangle => "Right Triangle Solver",
            Panel::Elevation => "Angle of Elevation",
            Panel::Depression => "Angle of Depression",
            Panel::Bearing => "Bearing",
            Panel::Evaluate => "Basic Functions",
            Panel::Inverse => "Inverse Functions",
            Panel::Composition => "Compositions",
            Panel::TrigEquation => "Solve Trig Equation",
            Panel::ParseSinusoid => "Parse Sinusoidal Equation",
            Panel::BuildSinusoid => "Build Sinusoidal Equation",
            Panel::SinusoidModel => "Real-World Sinusoidal Model",
            Panel::ObliqueTriangle => "Oblique Triangle Solver",
            Panel::AreaSas => "Area (SAS)",
            Panel::AreaHeron => "Area (Heron's Formula)",
            Panel::VectorOp => "Vector Operations",
            Panel::VectorAnalysis => "Single Vector Properties",
            Panel::RectToPolar => "Rectangular → Polar",
            Panel::PolarToRect => "Polar → Rectangular",
            Panel::ComplexOp => "Complex Number Operations",
            Panel::DeMoivre => "De Moivre's Theorem",
            Panel::Parametric => "Parametric Equations",
            Panel::Projectile => "Projectile Motion",
            Panel::Harmonic => "Simple Harmonic Motion",
        }
    }

    /// Prompt for this panel's fields.
    pub fn read(&self, settings: &Settings) -> TrigResult<Problem> {
        let mode = settings.angle_mode;
        let angle_prompt = |name: &str| format!("{} ({}): ", name, mode.label());

        let problem = match self {
            Panel::AngleConversion => Problem::AngleConversion(AngleConversionInput {
                value: prompt::number("value", &angle_prompt("Angle"))?,
                unit: mode,
            }),
            Panel::ArcSector => Problem::ArcSector(ArcSectorInput {
                radius: prompt::number("radius", "Radius: ")?,
                angle: prompt::number("angle", &angle_prompt("Central angle"))?,
                unit: mode,
            }),
            Panel::AngularSpeed => {
                println!("Enter any two values; leave the unknown blank.");
                let length_unit = prompt::choice(
                    "length_unit",
                    "Radius unit",
                    &[("meters", LengthUnit::Meters), ("cm", LengthUnit::Centimeters), ("feet", LengthUnit::Feet)],
                )?;
                let radius = prompt::optional_number("radius", "Radius: ")?;
                let angular_unit = prompt::choice(
                    "angular_unit",
                    "Angular speed unit",
                    &[
                        ("rad/s", AngularSpeedUnit::RadPerSec),
                        ("rpm", AngularSpeedUnit::Rpm),
                        ("deg/s", AngularSpeedUnit::DegPerSec),
                    ],
                )?;
                let angular_speed = prompt::optional_number("angular_speed", "Angular speed ω: ")?;
                let linear_unit = prompt::choice(
                    "linear_unit",
                    "Linear speed unit",
                    &[
                        ("m/s", LinearSpeedUnit::MetersPerSec),
                        ("km/h", LinearSpeedUnit::KmPerHour),
                        ("mph", LinearSpeedUnit::Mph),
                    ],
                )?;
                let linear_speed = prompt::optional_number("linear_speed", "Linear speed v: ")?;
                Problem::AngularSpeed(AngularSpeedInput {
                    radius,
                    angular_speed,
                    linear_speed,
                    length_unit,
                    angular_unit,
                    linear_unit,
                })
            }
            Panel::RightTriangle => {
                println!("Enter at least two values including one side; leave unknowns blank.");
                Problem::RightTriangle(RightTriangleInput {
                    a: prompt::optional_number("a", "Side a (opposite A): ")?,
                    b: prompt::optional_number("b", "Side b (adjacent to A): ")?,
                    c: prompt::optional_number("c", "Hypotenuse c: ")?,
                    angle_a: prompt::optional_number("angle_a", &angle_prompt("Angle A"))?,
                    angle_b: prompt::optional_number("angle_b", &angle_prompt("Angle B"))?,
                    angle_mode: mode,
                })
            }
            Panel::Elevation => Problem::Elevation(ElevationInput {
                distance: prompt::number("distance", "Horizontal distance: ")?,
                angle_deg: prompt::number("angle_deg", "Angle of elevation (degrees): ")?,
            }),
            Panel::Depression => Problem::Depression(DepressionInput {
                height: prompt::number("height", "Observer height: ")?,
                angle_deg: prompt::number("angle_deg", "Angle of depression (degrees): ")?,
            }),
            Panel::Bearing => Problem::Bearing(BearingInput {
                distance: prompt::number("distance", "Distance: ")?,
                bearing: prompt::text("bearing", "Bearing (e.g. N30°E or 120): ")?,
            }),
            Panel::Evaluate => {
                let function = prompt::choice(
                    "function",
                    "Function",
                    &TrigFunction::ALL.map(|f| (f.name(), f)),
                )?;
                Problem::Evaluate(EvaluateInput {
                    function,
                    angle: prompt::number("angle", &angle_prompt("Angle θ"))?,
                    angle_mode: mode,
                })
            }
            Panel::Inverse => {
                let function = prompt::choice(
                    "function",
                    "Function",
                    &InverseFunction::ALL.map(|f| (f.name(), f)),
                )?;
                Problem::Inverse(InverseInput {
                    function,
                    x: prompt::number("x", "Value x: ")?,
                })
            }
            Panel::Composition => {
                let labels = Composition::ALL.map(|c| c.to_string());
                let options: Vec<(&str, Composition)> = labels
                    .iter()
                    .map(String::as_str)
                    .zip(Composition::ALL)
                    .collect();
                let kind = prompt::choice("kind", "Composition", &options)?;
                Problem::Composition(CompositionInput {
                    kind,
                    x: prompt::number("x", "Value x: ")?,
                })
            }
            Panel::TrigEquation => {
                let function = prompt::choice(
                    "function",
                    "Equation",
                    &[
                        ("sin(θ) = k", TrigFunction::Sin),
                        ("cos(θ) = k", TrigFunction::Cos),
                        ("tan(θ) = k", TrigFunction::Tan),
                    ],
                )?;
                Problem::TrigEquation(TrigEquationInput {
                    function,
                    k: prompt::number("k", "Value of k: ")?,
                })
            }
            Panel::ParseSinusoid => Problem::ParseSinusoid(ParseEquationInput {
                equation: prompt::text("equation", "Equation (e.g. y = 2sin(3x - π/2) + 1): ")?,
            }),
            Panel::BuildSinusoid => Problem::BuildSinusoid(BuildEquationInput {
                function: wave_function()?,
                amplitude: prompt::number_or("amplitude", "Amplitude A [1]: ", 1.0)?,
                period: prompt::number("period", "Period (e.g. 2π or 360): ")?,
                phase_shift: prompt::number_or("phase_shift", "Phase shift C [0]: ", 0.0)?,
                vertical_shift: prompt::number_or("vertical_shift", "Vertical shift D [0]: ", 0.0)?,
            }),
            Panel::SinusoidModel => Problem::SinusoidModel(RealWorldModelInput {
                maximum: prompt::number("maximum", "Maximum value: ")?,
                minimum: prompt::number("minimum", "Minimum value: ")?,
                period: prompt::number("period", "Period: ")?,
                time_of_max: prompt::number("time_of_max", "Time of maximum: ")?,
            }),
            Panel::ObliqueTriangle => Problem::ObliqueTriangle(oblique_case()?),
            Panel::AreaSas => Problem::AreaSas(AreaSasInput {
                a: prompt::number("a", "Side a: ")?,
                b: prompt::number("b", "Side b: ")?,
                angle_c: prompt::number("angle_c", "Included angle C (degrees): ")?,
            }),
            Panel::AreaHeron => Problem::AreaHeron(AreaHeronInput {
                a: prompt::number("a", "Side a: ")?,
                b: prompt::number("b", "Side b: ")?,
                c: prompt::number("c", "Side c: ")?,
            }),
            Panel::VectorOp => {
                let u = Vector2::new(prompt::number("u.x", "Uₓ: ")?, prompt::number("u.y", "Uᵧ: ")?);
                let v = Vector2::new(prompt::number("v.x", "Vₓ: ")?, prompt::number("v.y", "Vᵧ: ")?);
                let op = prompt::choice(
                    "op",
                    "Operation",
                    &[
                        ("Add (U + V)", VectorOp::Add),
                        ("Subtract (U - V)", VectorOp::Subtract),
                        ("Dot Product (U · V)", VectorOp::Dot),
                        ("Cross Product (U × V)", VectorOp::Cross),
                        ("Angle Between", VectorOp::AngleBetween),
                    ],
                )?;
                Problem::VectorOp(VectorOpInput { u, v, op, angle_mode: mode })
            }
            Panel::VectorAnalysis => Problem::VectorAnalysis(VectorAnalysisInput {
                x: prompt::number("x", "x-component: ")?,
                y: prompt::number("y", "y-component: ")?,
                angle_mode: mode,
            }),
            Panel::RectToPolar => Problem::RectToPolar(RectToPolarInput {
                x: prompt::number("x", "x: ")?,
                y: prompt::number("y", "y: ")?,
                angle_mode: mode,
            }),
            Panel::PolarToRect => Problem::PolarToRect(PolarToRectInput {
                r: prompt::number("r", "r: ")?,
                theta: prompt::number("theta", &angle_prompt("θ"))?,
                angle_mode: mode,
            }),
            Panel::ComplexOp => complex_problem(mode)?,
            Panel::DeMoivre => Problem::DeMoivre(DeMoivreInput {
                theta: prompt::number("theta", &angle_prompt("Angle θ"))?,
                n: prompt::number("n", "Power n: ")?,
                angle_mode: mode,
            }),
            Panel::Parametric => parametric_problem()?,
            Panel::Projectile => Problem::Projectile(ProjectileInput {
                v0: prompt::number("v0", "Initial velocity (m/s): ")?,
                angle_deg: prompt::number("angle_deg", "Launch angle (degrees): ")?,
                h0: prompt::number_or("h0", "Initial height (m) [0]: ", 0.0)?,
                g: prompt::number_or("g", "Gravity (m/s²) [9.81]: ", motion::STANDARD_GRAVITY)?,
            }),
            Panel::Harmonic => Problem::Harmonic(HarmonicInput {
                amplitude: prompt::number("amplitude", "Amplitude A: ")?,
                omega: prompt::number("omega", "Angular frequency ω (rad/s): ")?,
                phase: prompt::number_or("phase", "Initial phase φ (rad) [0]: ", 0.0)?,
                t: prompt::number("t", "Time t (s): ")?,
            }),
        };
        Ok(problem)
    }
}

fn wave_function() -> TrigResult<WaveFunction> {
    prompt::choice("function", "Function", &[("sin", WaveFunction::Sin), ("cos", WaveFunction::Cos)])
}

fn oblique_case() -> TrigResult<ObliqueCase> {
    #[derive(Clone, Copy)]
    enum Case {
        Aas,
        Asa,
        Ssa,
        Sas,
        Sss,
    }

    let case = prompt::choice(
        "case",
        "Case",
        &[
            ("AAS (Angle-Angle-Side)", Case::Aas),
            ("ASA (Angle-Side-Angle)", Case::Asa),
            ("SSA (Side-Side-Angle)", Case::Ssa),
            ("SAS (Side-Angle-Side)", Case::Sas),
            ("SSS (Side-Side-Side)", Case::Sss),
        ],
    )?;

    Ok(match case {
        Case::Aas => ObliqueCase::Aas {
            angle_a: prompt::number("angle_a", "Angle A (degrees): ")?,
            angle_b: prompt::number("angle_b", "Angle B (degrees): ")?,
            a: prompt::number("a", "Side a (opposite A): ")?,
        },
        Case::Asa => ObliqueCase::Asa {
            angle_a: prompt::number("angle_a", "Angle A (degrees): ")?,
            c: prompt::number("c", "Side c (between A and B): ")?,
            angle_b: prompt::number("angle_b", "Angle B (degrees): ")?,
        },
        Case::Ssa => ObliqueCase::Ssa {
            a: prompt::number("a", "Side a: ")?,
            b: prompt::number("b", "Side b: ")?,
            angle_a: prompt::number("angle_a", "Angle A (opposite a, degrees): ")?,
        },
        Case::Sas => ObliqueCase::Sas {
            a: prompt::number("a", "Side a: ")?,
            angle_c: prompt::number("angle_c", "Angle C (between a and b, degrees): ")?,
            b: prompt::number("b", "Side b: ")?,
        },
        Case::Sss => ObliqueCase::Sss {
            a: prompt::number("a", "Side a: ")?,
            b: prompt::number("b", "Side b: ")?,
            c: prompt::number("c", "Side c: ")?,
        },
    })
}

fn complex_problem(mode: AngleMode) -> TrigResult<Problem> {
    let z1 = complex::Complex64::new(
        prompt::number("z1.re", "Z₁ real part a: ")?,
        prompt::number("z1.im", "Z₁ imaginary part b: ")?,
    );
    let op = prompt::choice(
        "op",
        "Operation",
        &[
            ("Add (Z₁ + Z₂)", ComplexOp::Add),
            ("Subtract (Z₁ - Z₂)", ComplexOp::Subtract),
            ("Multiply (Z₁ × Z₂)", ComplexOp::Multiply),
            ("Divide (Z₁ ÷ Z₂)", ComplexOp::Divide),
            ("Modulus |Z₁|", ComplexOp::Modulus),
            ("Conjugate Z̄₁", ComplexOp::Conjugate),
            ("To Polar Form", ComplexOp::ToPolar),
        ],
    )?;
    let z2 = if op.is_binary() {
        Some(complex::Complex64::new(
            prompt::number("z2.re", "Z₂ real part c: ")?,
            prompt::number("z2.im", "Z₂ imaginary part d: ")?,
        ))
    } else {
        None
    };
    Ok(Problem::ComplexOp(ComplexOpInput {
        z1,
        z2,
        op,
        angle_mode: mode,
    }))
}

fn parametric_problem() -> TrigResult<Problem> {
    let template = prompt::choice(
        "curve",
        "Curve type",
        &[
            ParametricCurve::circle(),
            ParametricCurve::ellipse(),
            ParametricCurve::cycloid(),
            ParametricCurve::lissajous(),
        ]
        .map(|c| (c.name(), c)),
    )?;
    let t = prompt::number("t", "Parameter t (e.g. π/4): ")?;

    let curve = match template {
        ParametricCurve::Circle { radius } => ParametricCurve::Circle {
            radius: prompt::number_or("radius", "Radius r [5]: ", radius)?,
        },
        ParametricCurve::Ellipse { a, b } => ParametricCurve::Ellipse {
            a: prompt::number_or("a", "Semi-major axis a [5]: ", a)?,
            b: prompt::number_or("b", "Semi-minor axis b [3]: ", b)?,
        },
        ParametricCurve::Cycloid { radius } => ParametricCurve::Cycloid {
            radius: prompt::number_or("radius", "Rolling radius r [5]: ", radius)?,
        },
        ParametricCurve::Lissajous {
            amp_x,
            amp_y,
            freq_x,
            freq_y,
            phase,
        } => ParametricCurve::Lissajous {
            amp_x: prompt::number_or("amp_x", "Amplitude A [1]: ", amp_x)?,
            amp_y: prompt::number_or("amp_y", "Amplitude B [1]: ", amp_y)?,
            freq_x: prompt::number_or("freq_x", "Frequency a [3]: ", freq_x)?,
            freq_y: prompt::number_or("freq_y", "Frequency b [2]: ", freq_y)?,
            phase: prompt::number_or("phase", "Phase δ [π/2]: ", phase)?,
        },
    };

    Ok(Problem::Parametric(ParametricInput { curve, t }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_is_offered() {
        let all = [
            Panel::AngleConversion,
            Panel::ArcSector,
            Panel::AngularSpeed,
            Panel::RightTriangle,
            Panel::Elevation,
            Panel::Depression,
            Panel::Bearing,
            Panel::Evaluate,
            Panel::Inverse,
            Panel::Composition,
            Panel::TrigEquation,
            Panel::ParseSinusoid,
            Panel::BuildSinusoid,
            Panel::SinusoidModel,
            Panel::ObliqueTriangle,
            Panel::AreaSas,
            Panel::AreaHeron,
            Panel::VectorOp,
            Panel::VectorAnalysis,
            Panel::RectToPolar,
            Panel::PolarToRect,
            Panel::ComplexOp,
            Panel::DeMoivre,
            Panel::Parametric,
            Panel::Projectile,
            Panel::Harmonic,
        ];
        for panel in all {
            assert!(
                FOUNDATIONS.contains(&panel) || ADVANCED.contains(&panel),
                "{} missing from menus",
                panel.label()
            );
        }
    }
}
