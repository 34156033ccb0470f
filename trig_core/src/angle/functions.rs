//! Names of the six trigonometric functions and their inverses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrigError;

/// One of the six trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
}

impl TrigFunction {
    pub const ALL: [TrigFunction; 6] = [
        TrigFunction::Sin,
        TrigFunction::Cos,
        TrigFunction::Tan,
        TrigFunction::Csc,
        TrigFunction::Sec,
        TrigFunction::Cot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
            TrigFunction::Csc => "csc",
            TrigFunction::Sec => "sec",
            TrigFunction::Cot => "cot",
        }
    }

    /// Long name used in error messages ("Tangent", ...)
    pub fn long_name(&self) -> &'static str {
        match self {
            TrigFunction::Sin => "Sine",
            TrigFunction::Cos => "Cosine",
            TrigFunction::Tan => "Tangent",
            TrigFunction::Csc => "Cosecant",
            TrigFunction::Sec => "Secant",
            TrigFunction::Cot => "Cotangent",
        }
    }

    /// sin, cos and tan have exact-value table entries; the reciprocals do not.
    pub fn is_primary(&self) -> bool {
        matches!(self, TrigFunction::Sin | TrigFunction::Cos | TrigFunction::Tan)
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrigFunction {
    type Err = TrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        TrigFunction::ALL
            .iter()
            .copied()
            .find(|func| func.name() == name)
            .ok_or_else(|| TrigError::invalid_input("function", s.trim(), "Expected sin, cos, tan, csc, sec or cot"))
    }
}

/// One of the six inverse trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InverseFunction {
    Arcsin,
    Arccos,
    Arctan,
    Arccsc,
    Arcsec,
    Arccot,
}

impl InverseFunction {
    pub const ALL: [InverseFunction; 6] = [
        InverseFunction::Arcsin,
        InverseFunction::Arccos,
        InverseFunction::Arctan,
        InverseFunction::Arccsc,
        InverseFunction::Arcsec,
        InverseFunction::Arccot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InverseFunction::Arcsin => "arcsin",
            InverseFunction::Arccos => "arccos",
            InverseFunction::Arctan => "arctan",
            InverseFunction::Arccsc => "arccsc",
            InverseFunction::Arcsec => "arcsec",
            InverseFunction::Arccot => "arccot",
        }
    }
}

impl fmt::Display for InverseFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InverseFunction {
    type Err = TrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        InverseFunction::ALL
            .iter()
            .copied()
            .find(|func| func.name() == name)
            .ok_or_else(|| {
                TrigError::invalid_input(
                    "function",
                    s.trim(),
                    "Expected arcsin, arccos, arctan, arccsc, arcsec or arccot",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("SIN".parse::<TrigFunction>().unwrap(), TrigFunction::Sin);
        assert_eq!(" cot ".parse::<TrigFunction>().unwrap(), TrigFunction::Cot);
        assert_eq!("arcsec".parse::<InverseFunction>().unwrap(), InverseFunction::Arcsec);
        assert!("sinh".parse::<TrigFunction>().is_err());
        assert!("asin".parse::<InverseFunction>().is_err());
    }

    #[test]
    fn test_primary() {
        assert!(TrigFunction::Tan.is_primary());
        assert!(!TrigFunction::Sec.is_primary());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&TrigFunction::Csc).unwrap(), "\"csc\"");
        assert_eq!(serde_json::to_string(&InverseFunction::Arccot).unwrap(), "\"arccot\"");
    }
}
