//! # trig_core - Trigonometry Problem Solver
//!
//! `trig_core` is the computational heart of Trigon. It reads numbers written
//! the way students write them (`√3/2`, `2π/3`, `pi/4`), solves trigonometry
//! problems with closed-form formulas, and renders results the same way
//! (`5π/6`, `√3/2`, `45° 30' 0.00"`) alongside a step-by-step derivation.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Show the Work**: Every result carries its [`Derivation`]
//!
//! ## Quick Start
//!
//! ```rust
//! use trig_core::{format_radians, parse_number};
//! use trig_core::calculations::right_triangle::{solve, RightTriangleInput};
//!
//! let a = parse_number("3").unwrap();
//! let c = parse_number("√25").unwrap();
//!
//! let input = RightTriangleInput { a: Some(a), c: Some(c), ..Default::default() };
//! let result = solve(&input).unwrap();
//! assert!((result.b - 4.0).abs() < 1e-9);
//!
//! assert_eq!(format_radians(std::f64::consts::PI / 3.0), "π/3");
//! ```
//!
//! ## Modules
//!
//! - [`expression`] - Parsing numeric text and formatting results
//! - [`angle`] - Unit conversion, quadrants, exact values, DMS
//! - [`calculations`] - All calculator panels and the [`Problem`] document
//! - [`derivation`] - Step-by-step working attached to results
//! - [`settings`] - Angle mode, step display and calculator level
//! - [`errors`] - Structured error types

pub mod angle;
pub mod calculations;
pub mod derivation;
pub mod errors;
pub mod expression;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use angle::{AngleMode, Quadrant, TrigFunction, InverseFunction};
pub use calculations::{Problem, Solution};
pub use derivation::Derivation;
pub use errors::{TrigError, TrigResult};
pub use expression::{format_complex, format_number, format_radians, parse_number};
pub use settings::{CalculatorLevel, Settings};
