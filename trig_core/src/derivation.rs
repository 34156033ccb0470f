//! # Derivation Narrative
//!
//! Human-readable, step-by-step working attached to every calculation
//! result. Calculations record steps as they go; the display layer decides
//! whether to show them.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::derivation::Derivation;
//!
//! let mut steps = Derivation::new("Area using SAS Formula");
//! steps.given("Side a = 3");
//! steps.step("Apply formula", ["Area = ½ × a × b × sin(C)"]);
//!
//! let text = steps.to_string();
//! assert!(text.contains("Step 1: Apply formula"));
//! assert!(text.contains("  Area = ½ × a × b × sin(C)"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One numbered step: a heading followed by indented working lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub lines: Vec<String>,
}

/// Ordered collection of steps for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Derivation {
    /// Headline, e.g. "Projectile Motion Analysis"
    pub title: String,
    /// Inputs restated at the top of the working
    pub given: Vec<String>,
    pub steps: Vec<Step>,
    /// Closing remarks (ambiguous-case warnings and the like)
    pub notes: Vec<String>,
}

impl Derivation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Record one given value.
    pub fn given(&mut self, line: impl Into<String>) -> &mut Self {
        self.given.push(line.into());
        self
    }

    /// Append a numbered step.
    pub fn step<I, S>(&mut self, title: impl Into<String>, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.push(Step {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Append a line to the most recent step, or start an untitled one.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        match self.steps.last_mut() {
            Some(step) => step.lines.push(line.into()),
            None => self.steps.push(Step {
                title: String::new(),
                lines: vec![line.into()],
            }),
        }
        self
    }

    /// Append a closing note.
    pub fn note(&mut self, note: impl Into<String>) -> &mut Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.given.is_empty() && self.steps.is_empty() && self.notes.is_empty()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut blocks: Vec<String> = Vec::new();

        if !self.title.is_empty() {
            blocks.push(self.title.clone());
        }
        if !self.given.is_empty() {
            let mut block = String::from("Given:");
            for line in &self.given {
                block.push_str("\n  ");
                block.push_str(line);
            }
            blocks.push(block);
        }
        for (i, step) in self.steps.iter().enumerate() {
            let mut block = format!("Step {}: {}", i + 1, step.title);
            for line in &step.lines {
                block.push_str("\n  ");
                block.push_str(line);
            }
            blocks.push(block);
        }
        if !self.notes.is_empty() {
            blocks.push(self.notes.join("\n"));
        }

        write!(f, "{}", blocks.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        let mut d = Derivation::new("Angle of Elevation Problem");
        d.given("Horizontal distance = 100 units")
            .given("Angle of elevation = 30°");
        d.step("Use tangent ratio", ["tan(θ) = opposite/adjacent"]);
        d.step("Solve for height", ["height = 100 × tan(30°)"])
            .line("height = 57.735027 units");

        let expected = "Angle of Elevation Problem\n\n\
                        Given:\n  Horizontal distance = 100 units\n  Angle of elevation = 30°\n\n\
                        Step 1: Use tangent ratio\n  tan(θ) = opposite/adjacent\n\n\
                        Step 2: Solve for height\n  height = 100 × tan(30°)\n  height = 57.735027 units";
        assert_eq!(d.to_string(), expected);
        assert_eq!(d.step_count(), 2);
    }

    #[test]
    fn test_empty() {
        let d = Derivation::default();
        assert!(d.is_empty());
        assert_eq!(d.to_string(), "");
    }

    #[test]
    fn test_line_without_step() {
        let mut d = Derivation::new("");
        d.line("orphan");
        assert_eq!(d.steps.len(), 1);
        assert_eq!(d.to_string(), "Step 1: \n  orphan");
    }

    #[test]
    fn test_notes() {
        let mut d = Derivation::new("SSA");
        d.note("Ambiguous case");
        assert_eq!(d.to_string(), "SSA\n\nAmbiguous case");
    }

    #[test]
    fn test_serialization() {
        let mut d = Derivation::new("T");
        d.step("S", ["x = 1"]);
        let json = serde_json::to_string(&d).unwrap();
        let roundtrip: Derivation = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
