//! # Calculator Settings
//!
//! The handful of switches a front end exposes. The core never reads these
//! on its own; they are passed into calculations as plain parameters.
//!
//! ```rust
//! use trig_core::settings::{CalculatorLevel, Settings};
//! use trig_core::angle::AngleMode;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.angle_mode, AngleMode::Degrees);
//! assert!(settings.show_steps);
//! assert_eq!(settings.level, CalculatorLevel::Foundations);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::AngleMode;

/// Environment variable consulted for the default angle mode.
pub const ANGLE_MODE_ENV: &str = "TRIG_ANGLE_MODE";

/// Front-end settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Unit used for angle inputs and outputs
    pub angle_mode: AngleMode,

    /// Whether to print derivation steps with results
    pub show_steps: bool,

    /// Which set of panels to offer
    pub level: CalculatorLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            angle_mode: AngleMode::Degrees,
            show_steps: true,
            level: CalculatorLevel::Foundations,
        }
    }
}

impl Settings {
    /// Apply an angle mode read from the environment, if it names one.
    ///
    /// Unrecognised values are ignored and reported to the caller as `false`.
    pub fn with_env_angle_mode(mut self, value: Option<&str>) -> (Self, bool) {
        match value.map(str::parse::<AngleMode>) {
            Some(Ok(mode)) => {
                self.angle_mode = mode;
                (self, true)
            }
            Some(Err(_)) => (self, false),
            None => (self, true),
        }
    }

    /// Header line shown by front ends, e.g. "Foundations Level • Degrees Mode".
    pub fn banner(&self) -> String {
        let mode = match self.angle_mode {
            AngleMode::Degrees => "Degrees",
            AngleMode::Radians => "Radians",
        };
        format!("{} Level • {} Mode", self.level, mode)
    }
}

/// Panel groups, mirroring the two calculator levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorLevel {
    #[default]
    Foundations,
    Advanced,
}

impl fmt::Display for CalculatorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorLevel::Foundations => write!(f, "Foundations"),
            CalculatorLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_angle_mode() {
        let (settings, ok) = Settings::default().with_env_angle_mode(Some("rad"));
        assert!(ok);
        assert_eq!(settings.angle_mode, AngleMode::Radians);

        let (settings, ok) = Settings::default().with_env_angle_mode(Some("grad"));
        assert!(!ok);
        assert_eq!(settings.angle_mode, AngleMode::Degrees);

        let (settings, ok) = Settings::default().with_env_angle_mode(None);
        assert!(ok);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_banner() {
        let settings = Settings {
            angle_mode: AngleMode::Radians,
            show_steps: false,
            level: CalculatorLevel::Advanced,
        };
        assert_eq!(settings.banner(), "Advanced Level • Radians Mode");
    }

    #[test]
    fn test_settings_serialization() {
        let json = r#"{"angle_mode":"radians"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.angle_mode, AngleMode::Radians);
        assert!(settings.show_steps);
    }
}
