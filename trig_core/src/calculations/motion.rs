//! # Parametric Curves & Motion
//!
//! Points on parametric curves, projectile kinematics and simple harmonic
//! motion.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::calculations::motion::{projectile, ProjectileInput};
//!
//! let input = ProjectileInput { v0: 20.0, angle_deg: 30.0, h0: 0.0, g: 10.0 };
//! let result = projectile(&input).unwrap();
//! assert!((result.max_height - 5.0).abs() < 1e-9);
//! assert!((result.time_of_flight - 2.0).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::angle::to_radians;
use crate::derivation::Derivation;
use crate::errors::{require_finite, TrigError, TrigResult};
use crate::expression::{format_number, format_radians};

/// Standard gravity, m/s²
pub const STANDARD_GRAVITY: f64 = 9.81;

// ============================================================================
// Parametric Curves
// ============================================================================

fn default_radius() -> f64 {
    5.0
}

fn default_semi_major() -> f64 {
    5.0
}

fn default_semi_minor() -> f64 {
    3.0
}

fn one() -> f64 {
    1.0
}

fn default_freq_x() -> f64 {
    3.0
}

fn default_freq_y() -> f64 {
    2.0
}

fn default_lissajous_phase() -> f64 {
    PI / 2.0
}

/// A curve traced by a parameter `t` (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParametricCurve {
    /// x = r·cos(t), y = r·sin(t)
    Circle {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// x = a·cos(t), y = b·sin(t)
    Ellipse {
        #[serde(default = "default_semi_major")]
        a: f64,
        #[serde(default = "default_semi_minor")]
        b: f64,
    },
    /// x = r(t - sin(t)), y = r(1 - cos(t))
    Cycloid {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// x = A·sin(a·t + δ), y = B·sin(b·t)
    Lissajous {
        #[serde(default = "one")]
        amp_x: f64,
        #[serde(default = "one")]
        amp_y: f64,
        #[serde(default = "default_freq_x")]
        freq_x: f64,
        #[serde(default = "default_freq_y")]
        freq_y: f64,
        #[serde(default = "default_lissajous_phase")]
        phase: f64,
    },
}

impl ParametricCurve {
    pub fn circle() -> Self {
        ParametricCurve::Circle { radius: default_radius() }
    }

    pub fn ellipse() -> Self {
        ParametricCurve::Ellipse {
            a: default_semi_major(),
            b: default_semi_minor(),
        }
    }

    pub fn cycloid() -> Self {
        ParametricCurve::Cycloid { radius: default_radius() }
    }

    pub fn lissajous() -> Self {
        ParametricCurve::Lissajous {
            amp_x: one(),
            amp_y: one(),
            freq_x: default_freq_x(),
            freq_y: default_freq_y(),
            phase: default_lissajous_phase(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParametricCurve::Circle { .. } => "Circle",
            ParametricCurve::Ellipse { .. } => "Ellipse",
            ParametricCurve::Cycloid { .. } => "Cycloid",
            ParametricCurve::Lissajous { .. } => "Lissajous",
        }
    }

    /// The curve's defining equations
    pub fn equations(&self) -> &'static str {
        match self {
            ParametricCurve::Circle { .. } => "x(t) = r·cos(t), y(t) = r·sin(t)",
            ParametricCurve::Ellipse { .. } => "x(t) = a·cos(t), y(t) = b·sin(t)",
            ParametricCurve::Cycloid { .. } => "x(t) = r(t - sin(t)), y(t) = r(1 - cos(t))",
            ParametricCurve::Lissajous { .. } => "x(t) = A·sin(a·t + δ), y(t) = B·sin(b·t)",
        }
    }

    /// Point on the curve at `t`.
    pub fn point(&self, t: f64) -> (f64, f64) {
        match *self {
            ParametricCurve::Circle { radius } => (radius * t.cos(), radius * t.sin()),
            ParametricCurve::Ellipse { a, b } => (a * t.cos(), b * t.sin()),
            ParametricCurve::Cycloid { radius } => (radius * (t - t.sin()), radius * (1.0 - t.cos())),
            ParametricCurve::Lissajous {
                amp_x,
                amp_y,
                freq_x,
                freq_y,
                phase,
            } => (amp_x * (freq_x * t + phase).sin(), amp_y * (freq_y * t).sin()),
        }
    }

    fn parameters(&self) -> Vec<String> {
        match *self {
            ParametricCurve::Circle { radius } | ParametricCurve::Cycloid { radius } => {
                vec![format!("r = {}", format_number(radius))]
            }
            ParametricCurve::Ellipse { a, b } => {
                vec![format!("a = {}", format_number(a)), format!("b = {}", format_number(b))]
            }
            ParametricCurve::Lissajous {
                amp_x,
                amp_y,
                freq_x,
                freq_y,
                phase,
            } => vec![
                format!("A = {}, B = {}", format_number(amp_x), format_number(amp_y)),
                format!("a = {}, b = {}", format_number(freq_x), format_number(freq_y)),
                format!("δ = {}", format_radians(phase)),
            ],
        }
    }

    fn check_finite(&self) -> TrigResult<()> {
        match *self {
            ParametricCurve::Circle { radius } | ParametricCurve::Cycloid { radius } => {
                require_finite("radius", radius)?;
            }
            ParametricCurve::Ellipse { a, b } => {
                require_finite("a", a)?;
                require_finite("b", b)?;
            }
            ParametricCurve::Lissajous {
                amp_x,
                amp_y,
                freq_x,
                freq_y,
                phase,
            } => {
                require_finite("amp_x", amp_x)?;
                require_finite("amp_y", amp_y)?;
                require_finite("freq_x", freq_x)?;
                require_finite("freq_y", freq_y)?;
                require_finite("phase", phase)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametricInput {
    pub curve: ParametricCurve,
    /// Parameter value, radians
    pub t: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametricResult {
    pub x: f64,
    pub y: f64,
    pub equations: String,
    pub steps: Derivation,
}

/// Evaluate a parametric curve at `t`.
pub fn parametric_point(input: &ParametricInput) -> TrigResult<ParametricResult> {
    let t = require_finite("t", input.t)?;
    input.curve.check_finite()?;

    let (x, y) = input.curve.point(t);
    let equations = input.curve.equations().to_string();

    let mut steps = Derivation::new(format!("{} at t = {}", input.curve.name(), format_number(t)));
    for parameter in input.curve.parameters() {
        steps.given(parameter);
    }
    steps.step("Equations", [equations.clone()]);
    steps.step(
        "Substitute t",
        [format!("x(t) = {}", format_number(x)), format!("y(t) = {}", format_number(y))],
    );

    Ok(ParametricResult { x, y, equations, steps })
}

// ============================================================================
// Projectile Motion
// ============================================================================

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileInput {
    /// Launch speed, m/s
    pub v0: f64,
    /// Launch angle above horizontal, degrees
    pub angle_deg: f64,
    /// Launch height, m
    #[serde(default)]
    pub h0: f64,
    /// Gravitational acceleration, m/s²
    #[serde(default = "default_gravity")]
    pub g: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileResult {
    pub v0x: f64,
    pub v0y: f64,
    pub time_to_max: f64,
    pub max_height: f64,
    pub time_of_flight: f64,
    pub range: f64,
    pub steps: Derivation,
}

/// Flight of a projectile launched over level ground.
pub fn projectile(input: &ProjectileInput) -> TrigResult<ProjectileResult> {
    let v0 = require_finite("v0", input.v0)?;
    let angle = require_finite("angle_deg", input.angle_deg)?;
    let h0 = require_finite("h0", input.h0)?;
    let g = require_finite("g", input.g)?;

    if g <= 0.0 {
        return Err(TrigError::invalid_input("g", format_number(g), "Gravity must be positive"));
    }
    if v0 < 0.0 {
        return Err(TrigError::invalid_input("v0", format_number(v0), "Initial velocity cannot be negative"));
    }

    let rad = to_radians(angle);
    let v0x = v0 * rad.cos();
    let v0y = v0 * rad.sin();

    let time_to_max = v0y / g;
    let rise = v0y * v0y / (2.0 * g);
    let max_height = h0 + rise;

    let discriminant = v0y * v0y + 2.0 * g * h0;
    if discriminant < 0.0 {
        return Err(TrigError::domain_error(
            "time of flight",
            "Projectile never reaches ground level",
        ));
    }
    let time_of_flight = (v0y + discriminant.sqrt()) / g;
    let range = v0x * time_of_flight;

    let (fv0, fang, fh0, fg) = (format_number(v0), format_number(angle), format_number(h0), format_number(g));
    let mut steps = Derivation::new("Projectile Motion Analysis");
    steps.given(format!("Initial velocity v₀ = {} m/s", fv0));
    steps.given(format!("Launch angle θ = {}°", fang));
    steps.given(format!("Initial height h₀ = {} m", fh0));
    steps.given(format!("Gravity g = {} m/s²", fg));
    steps.step(
        "Calculate velocity components",
        [
            format!("v₀ₓ = v₀ × cos(θ) = {} × cos({}°) = {} m/s", fv0, fang, format_number(v0x)),
            format!("v₀ᵧ = v₀ × sin(θ) = {} × sin({}°) = {} m/s", fv0, fang, format_number(v0y)),
        ],
    );
    steps.step(
        "Calculate time to maximum height",
        [format!(
            "t_max = v₀ᵧ/g = {}/{} = {} s",
            format_number(v0y),
            fg,
            format_number(time_to_max)
        )],
    );
    steps.step(
        "Calculate maximum height",
        [format!(
            "H_max = h₀ + v₀ᵧ²/(2g) = {} + {} = {} m",
            fh0,
            format_number(rise),
            format_number(max_height)
        )],
    );
    steps.step(
        "Calculate total time of flight",
        [format!("t = (v₀ᵧ + √(v₀ᵧ² + 2gh₀))/g = {} s", format_number(time_of_flight))],
    );
    steps.step(
        "Calculate range",
        [format!(
            "R = v₀ₓ × t = {} × {} = {} m",
            format_number(v0x),
            format_number(time_of_flight),
            format_number(range)
        )],
    );

    Ok(ProjectileResult {
        v0x,
        v0y,
        time_to_max,
        max_height,
        time_of_flight,
        range,
        steps,
    })
}

// ============================================================================
// Simple Harmonic Motion
// ============================================================================

/// x(t) = A·cos(ωt + φ)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonicInput {
    pub amplitude: f64,
    /// Angular frequency, rad/s
    pub omega: f64,
    /// Initial phase, radians
    #[serde(default)]
    pub phase: f64,
    /// Time, s
    pub t: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonicResult {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub period: f64,
    pub frequency: f64,
    pub max_velocity: f64,
    pub steps: Derivation,
}

/// State of a simple harmonic oscillator at time `t`.
pub fn harmonic(input: &HarmonicInput) -> TrigResult<HarmonicResult> {
    let a = require_finite("amplitude", input.amplitude)?;
    let omega = require_finite("omega", input.omega)?;
    let phi = require_finite("phase", input.phase)?;
    let t = require_finite("t", input.t)?;
    if omega == 0.0 {
        return Err(TrigError::invalid_input("omega", "0", "Angular frequency cannot be zero"));
    }

    let arg = omega * t + phi;
    let (sin, cos) = arg.sin_cos();
    let position = a * cos;
    let velocity = -a * omega * sin;
    let acceleration = -a * omega * omega * cos;
    let period = 2.0 * PI / omega;
    let frequency = omega / (2.0 * PI);
    let max_velocity = (a * omega).abs();

    let mut steps = Derivation::new("Simple Harmonic Motion");
    steps.given(format!("A = {}", format_number(a)));
    steps.given(format!("ω = {} rad/s", format_number(omega)));
    steps.given(format!("φ = {} rad", format_number(phi)));
    steps.given(format!("t = {} s", format_number(t)));
    steps.step(
        "Position, velocity and acceleration",
        [
            format!("x(t) = A·cos(ωt + φ) = {}", format_number(position)),
            format!("v(t) = -Aω·sin(ωt + φ) = {}", format_number(velocity)),
            format!("a(t) = -Aω²·cos(ωt + φ) = {}", format_number(acceleration)),
        ],
    );
    steps.step(
        "Period and frequency",
        [
            format!("T = 2π/ω = {} s", format_number(period)),
            format!("f = ω/2π = {} Hz", format_number(frequency)),
            format!("v_max = |Aω| = {}", format_number(max_velocity)),
        ],
    );

    Ok(HarmonicResult {
        position,
        velocity,
        acceleration,
        period,
        frequency,
        max_velocity,
        steps,
    })
}
