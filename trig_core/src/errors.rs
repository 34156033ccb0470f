//! # Error Types
//!
//! Structured error types for trig_core. Parsing never fails loudly (it
//! returns `None`), so these errors are raised by the formula catalogue
//! when a field is missing or a value falls outside a function's domain.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::errors::{TrigError, TrigResult};
//!
//! fn check_arcsin(x: f64) -> TrigResult<f64> {
//!     if !(-1.0..=1.0).contains(&x) {
//!         return Err(TrigError::domain_error("arcsin", "Value must be in [-1, 1]"));
//!     }
//!     Ok(x.asin())
//! }
//!
//! assert!(check_arcsin(2.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trig_core operations
pub type TrigResult<T> = Result<T, TrigError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TrigError {
    /// An input value is invalid (unparseable, non-positive side, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A value lies outside the domain of the function being applied
    #[error("Domain error in {operation}: {reason}")]
    DomainError { operation: String, reason: String },

    /// The inputs do not describe a solvable problem (e.g. no triangle exists)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl TrigError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        TrigError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        TrigError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DomainError
    pub fn domain_error(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        TrigError::DomainError {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        TrigError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TrigError::InvalidInput { .. } => "INVALID_INPUT",
            TrigError::MissingField { .. } => "MISSING_FIELD",
            TrigError::DomainError { .. } => "DOMAIN_ERROR",
            TrigError::CalculationFailed { .. } => "CALCULATION_FAILED",
            TrigError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for TrigError {
    fn from(err: serde_json::Error) -> Self {
        TrigError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject NaN or infinite values in a required field.
pub(crate) fn require_finite(field: &str, value: f64) -> TrigResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrigError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

/// Reject values that are not strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> TrigResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(TrigError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TrigError::invalid_input("radius", "-5", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: TrigError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TrigError::missing_field("a").error_code(), "MISSING_FIELD");
        assert_eq!(TrigError::domain_error("arcsin", "x > 1").error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("r", 2.0).is_ok());
        assert!(require_positive("r", 0.0).is_err());
        assert!(require_positive("r", f64::NAN).is_err());
    }

    #[test]
    fn test_display_message() {
        let error = TrigError::domain_error("arcsin", "Value must be in [-1, 1]");
        assert_eq!(error.to_string(), "Domain error in arcsin: Value must be in [-1, 1]");
    }
}
