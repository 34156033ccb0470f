//! # Sinusoidal Functions
//!
//! Works with equations of the form `y = A sin(B(x - C)) + D` (or cos).
//!
//! - [`parse_equation`]: read A, B and D back out of equation text
//! - [`build_equation`]: assemble equation text from amplitude, period and shifts
//! - [`real_world_model`]: fit a cosine model to a maximum, minimum and period
//!
//! ```rust
//! use trig_core::calculations::sinusoidal::parse_equation;
//!
//! let parsed = parse_equation("y = 2sin(3x - π/2) + 1").unwrap();
//! assert_eq!(parsed.amplitude, 2.0);
//! assert_eq!(parsed.b, 3.0);
//! assert_eq!(parsed.maximum, 3.0);
//! assert_eq!(parsed.minimum, -1.0);
//! ```

use std::f64::consts::PI;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::derivation::Derivation;
use crate::errors::{require_finite, TrigError, TrigResult};
use crate::expression::{format_number, format_number_to, format_radians};

static AMPLITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"=(-?\d*\.?\d*)(sin|cos)").expect("amplitude pattern is valid"));

static FREQUENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(sin|cos)\((-?\d*\.?\d*)x").expect("frequency pattern is valid"));

static VERTICAL_SHIFT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\)([+-])(\d+\.?\d*)$").expect("vertical shift pattern is valid"));

/// sin or cos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveFunction {
    #[default]
    Sin,
    Cos,
}

impl fmt::Display for WaveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveFunction::Sin => write!(f, "sin"),
            WaveFunction::Cos => write!(f, "cos"),
        }
    }
}

/// Read a coefficient captured in front of a function or variable.
///
/// An empty capture means 1 and a bare minus sign means -1.
fn coefficient(field: &str, text: &str) -> TrigResult<f64> {
    match text {
        "" => Ok(1.0),
        "-" => Ok(-1.0),
        other => other
            .parse::<f64>()
            .map_err(|_| TrigError::invalid_input(field, other, "Not a valid coefficient")),
    }
}

// ============================================================================
// Parse
// ============================================================================

/// Equation text to parse, e.g. `y = 2sin(3x) + 1`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseEquationInput {
    pub equation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSinusoid {
    pub function: WaveFunction,
    /// |A|
    pub amplitude: f64,
    pub b: f64,
    pub period: f64,
    /// Period as a multiple of π when possible
    pub period_display: String,
    /// Phase shift; always 0 since the parser does not read it
    pub phase_shift: f64,
    pub vertical_shift: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub steps: Derivation,
}

/// Extract amplitude, B and vertical shift from an equation such as
/// `y = 2sin(3x - π/2) + 1`.
///
/// Missing coefficients default to 1 and a missing vertical shift to 0. The
/// phase shift is not parsed and is reported as 0.
pub fn parse_equation(text: &str) -> TrigResult<ParsedSinusoid> {
    let eq: String = text.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
    if eq.is_empty() {
        return Err(TrigError::missing_field("equation"));
    }
    debug!("parsing sinusoid '{}'", eq);

    let function = if eq.contains("cos") { WaveFunction::Cos } else { WaveFunction::Sin };

    let a = match AMPLITUDE.captures(&eq) {
        Some(caps) => coefficient("amplitude", &caps[1])?,
        None => 1.0,
    };
    let b = match FREQUENCY.captures(&eq) {
        Some(caps) => coefficient("b", &caps[2])?,
        None => 1.0,
    };
    let vertical_shift = match VERTICAL_SHIFT.captures(&eq) {
        Some(caps) => {
            let magnitude: f64 = caps[2]
                .parse()
                .map_err(|_| TrigError::invalid_input("vertical_shift", &caps[2], "Not a valid number"))?;
            if &caps[1] == "-" { -magnitude } else { magnitude }
        }
        None => 0.0,
    };

    if b == 0.0 {
        return Err(TrigError::domain_error("period = 2π/|B|", "B cannot be zero"));
    }

    let amplitude = a.abs();
    let period = 2.0 * PI / b.abs();
    let period_display = format_radians(period);
    let maximum = vertical_shift + amplitude;
    let minimum = vertical_shift - amplitude;

    let mut steps = Derivation::new("Parsing Sinusoidal Equation");
    steps.given(text.trim());
    steps.step(
        "Identify parameters",
        [
            format!("Function: {}", function),
            format!("A = {}", format_number(a)),
            format!("B = {}", format_number(b)),
            format!("D = {}", format_number(vertical_shift)),
        ],
    );
    steps.step(
        "Compute characteristics",
        [
            format!("Amplitude = |A| = {}", format_number(amplitude)),
            format!("Period = 2π/|B| = {}", period_display),
            format!("Maximum = D + |A| = {}", format_number(maximum)),
            format!("Minimum = D - |A| = {}", format_number(minimum)),
        ],
    );

    Ok(ParsedSinusoid {
        function,
        amplitude,
        b,
        period,
        period_display,
        phase_shift: 0.0,
        vertical_shift,
        maximum,
        minimum,
        steps,
    })
}

// ============================================================================
// Build
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildEquationInput {
    #[serde(default)]
    pub function: WaveFunction,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    pub period: f64,
    #[serde(default)]
    pub phase_shift: f64,
    #[serde(default)]
    pub vertical_shift: f64,
}

fn default_amplitude() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildEquationResult {
    pub equation: String,
    pub b: f64,
    pub amplitude: f64,
    pub period: f64,
    pub phase_shift: f64,
    pub vertical_shift: f64,
    pub steps: Derivation,
}

/// Assemble `y = A f(B(x - C)) + D` from its parameters.
///
/// A is omitted when it is 1 and B when it is 1. B is shown to 4 decimals.
pub fn build_equation(input: &BuildEquationInput) -> TrigResult<BuildEquationResult> {
    let a = require_finite("amplitude", input.amplitude)?;
    let period = require_finite("period", input.period)?;
    let c = require_finite("phase_shift", input.phase_shift)?;
    let d = require_finite("vertical_shift", input.vertical_shift)?;
    if period == 0.0 {
        return Err(TrigError::invalid_input("period", "0", "Please enter a valid period."));
    }

    let b = 2.0 * PI / period;

    let argument = if c != 0.0 {
        let sign = if c > 0.0 { '-' } else { '+' };
        format!("x {} {}", sign, format_number(c.abs()))
    } else {
        "x".to_string()
    };

    let mut equation = String::from("y = ");
    if a != 1.0 {
        equation.push_str(&format_number(a));
    }
    equation.push_str(&input.function.to_string());
    equation.push('(');
    if b != 1.0 {
        equation.push_str(&format_number_to(b, 4));
        if c != 0.0 {
            equation.push_str(&format!("({})", argument));
        } else {
            equation.push_str(&argument);
        }
    } else {
        equation.push_str(&argument);
    }
    equation.push(')');
    if d != 0.0 {
        let sign = if d > 0.0 { '+' } else { '-' };
        equation.push_str(&format!(" {} {}", sign, format_number(d.abs())));
    }

    let mut steps = Derivation::new("Building Sinusoidal Equation");
    steps.given(format!("Amplitude A = {}", format_number(a)));
    steps.given(format!("Period = {}", format_number(period)));
    steps.given(format!("Phase shift C = {}", format_number(c)));
    steps.given(format!("Vertical shift D = {}", format_number(d)));
    steps.step(
        "Find B from the period",
        [
            "B = 2π / period".to_string(),
            format!("B = 2π / {} = {}", format_number(period), format_number_to(b, 4)),
        ],
    );
    steps.step("Write the equation", [equation.clone()]);

    Ok(BuildEquationResult {
        equation,
        b,
        amplitude: a.abs(),
        period,
        phase_shift: c,
        vertical_shift: d,
        steps,
    })
}

// ============================================================================
// Real-World Model
// ============================================================================

/// A quantity oscillating between known extremes, e.g. tides or daylight hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealWorldModelInput {
    pub maximum: f64,
    pub minimum: f64,
    pub period: f64,
    /// Time at which the maximum occurs
    pub time_of_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealWorldModelResult {
    pub equation: String,
    pub amplitude: f64,
    pub b: f64,
    pub midline: f64,
    pub period: f64,
    pub phase_shift: f64,
    pub steps: Derivation,
}

impl RealWorldModelResult {
    /// Model value at time `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.amplitude * (self.b * (x - self.phase_shift)).cos() + self.midline
    }
}

/// Fit `y = A cos(B(x - t)) + D` so the maximum lands at `time_of_max`.
pub fn real_world_model(input: &RealWorldModelInput) -> TrigResult<RealWorldModelResult> {
    let max = require_finite("maximum", input.maximum)?;
    let min = require_finite("minimum", input.minimum)?;
    let period = require_finite("period", input.period)?;
    let t = require_finite("time_of_max", input.time_of_max)?;

    if max <= min {
        return Err(TrigError::invalid_input(
            "maximum",
            format_number(max),
            "Maximum must be greater than minimum.",
        ));
    }
    if period == 0.0 {
        return Err(TrigError::invalid_input("period", "0", "Please enter a valid period."));
    }

    let amplitude = (max - min) / 2.0;
    let midline = (max + min) / 2.0;
    let b = 2.0 * PI / period;

    let equation = format!(
        "y = {}cos({}(x - {})) + {}",
        format_number(amplitude),
        format_number_to(b, 4),
        format_number(t),
        format_number(midline)
    );

    let mut steps = Derivation::new("Real-World Sinusoidal Model");
    steps.given(format!("Maximum = {}", format_number(max)));
    steps.given(format!("Minimum = {}", format_number(min)));
    steps.given(format!("Period = {}", format_number(period)));
    steps.given(format!("Maximum occurs at x = {}", format_number(t)));
    steps.step(
        "Amplitude and midline",
        [
            format!("A = (max - min)/2 = {}", format_number(amplitude)),
            format!("D = (max + min)/2 = {}", format_number(midline)),
        ],
    );
    steps.step("Frequency", [format!("B = 2π/period = {}", format_number_to(b, 4))]);
    steps.step(
        "Phase shift",
        ["Cosine peaks at its argument's zero".to_string(), format!("C = {}", format_number(t))],
    );
    steps.step("Model", [equation.clone()]);

    Ok(RealWorldModelResult {
        equation,
        amplitude,
        b,
        midline,
        period,
        phase_shift: t,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_equation() {
        let parsed = parse_equation("y = 2sin(3x - π/2) + 1").unwrap();
        assert_eq!(parsed.function, WaveFunction::Sin);
        assert_eq!(parsed.amplitude, 2.0);
        assert_eq!(parsed.b, 3.0);
        assert_eq!(parsed.vertical_shift, 1.0);
        assert_eq!(parsed.phase_shift, 0.0);
        assert_eq!(parsed.period_display, "2π/3");
    }

    #[test]
    fn test_parse_defaults_and_signs() {
        let parsed = parse_equation("y = -cos(x) - 4").unwrap();
        assert_eq!(parsed.function, WaveFunction::Cos);
        assert_eq!(parsed.amplitude, 1.0);
        assert_eq!(parsed.b, 1.0);
        assert_eq!(parsed.vertical_shift, -4.0);
        assert_eq!(parsed.maximum, -3.0);
        assert_eq!(parsed.minimum, -5.0);
        assert_eq!(parsed.period_display, "2π");
    }

    #[test]
    fn test_parse_decimal_coefficients() {
        let parsed = parse_equation("Y = 0.5 SIN(0.5x)").unwrap();
        assert_eq!(parsed.amplitude, 0.5);
        assert_eq!(parsed.b, 0.5);
        assert_eq!(parsed.period_display, "12.566371 rad");
    }

    #[test]
    fn test_parse_rejects_zero_b() {
        let err = parse_equation("y = sin(0x)").unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert_eq!(parse_equation("  ").unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_build_equation() {
        let result = build_equation(&BuildEquationInput {
            function: WaveFunction::Sin,
            amplitude: 2.0,
            period: PI,
            phase_shift: 1.0,
            vertical_shift: -3.0,
        })
        .unwrap();
        assert_eq!(result.equation, "y = 2sin(2(x - 1)) - 3");
    }

    #[test]
    fn test_build_equation_minimal() {
        let result = build_equation(&BuildEquationInput {
            function: WaveFunction::Cos,
            amplitude: 1.0,
            period: 2.0 * PI,
            phase_shift: 0.0,
            vertical_shift: 0.0,
        })
        .unwrap();
        assert_eq!(result.equation, "y = cos(x)");

        let shifted = build_equation(&BuildEquationInput {
            function: WaveFunction::Sin,
            amplitude: 1.0,
            period: 2.0 * PI,
            phase_shift: -2.0,
            vertical_shift: 0.0,
        })
        .unwrap();
        assert_eq!(shifted.equation, "y = sin(x + 2)");
    }

    #[test]
    fn test_build_equation_period_in_degrees() {
        let result = build_equation(&BuildEquationInput {
            function: WaveFunction::Sin,
            amplitude: 3.0,
            period: 360.0,
            phase_shift: 0.0,
            vertical_shift: 0.0,
        })
        .unwrap();
        assert_eq!(result.equation, "y = 3sin(0.0175x)");
    }

    #[test]
    fn test_build_equation_zero_period() {
        let input: BuildEquationInput = serde_json::from_str(r#"{"period": 0.0}"#).unwrap();
        assert_eq!(input.amplitude, 1.0);
        assert!(build_equation(&input).is_err());
    }

    #[test]
    fn test_real_world_model() {
        let result = real_world_model(&RealWorldModelInput {
            maximum: 100.0,
            minimum: 20.0,
            period: 12.0,
            time_of_max: 3.0,
        })
        .unwrap();
        assert_eq!(result.amplitude, 40.0);
        assert_eq!(result.midline, 60.0);
        assert_eq!(result.equation, "y = 40cos(0.5236(x - 3)) + 60");
        assert!((result.value_at(3.0) - 100.0).abs() < 1e-9);
        assert!((result.value_at(9.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_real_world_model_validation() {
        let input = RealWorldModelInput {
            maximum: 10.0,
            minimum: 10.0,
            period: 12.0,
            time_of_max: 0.0,
        };
        assert_eq!(real_world_model(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }
}
