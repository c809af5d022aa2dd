use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four arithmetic operators understood by the calculator.
/// Serialized as their symbol so exported history reads `2,+,3,5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operator with plain IEEE-754 double semantics.
    /// Returns `None` only for a division whose divisor is zero (of either sign).
    pub fn apply(&self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(lhs + rhs),
            Operator::Subtract => Some(lhs - rhs),
            Operator::Multiply => Some(lhs * rhs),
            Operator::Divide if rhs == 0.0 => None,
            Operator::Divide => Some(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperatorError(pub String);

impl fmt::Display for ParseOperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator '{}'", self.0)
    }
}

impl std::error::Error for ParseOperatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        for op in Operator::ALL {
            assert_eq!(op.as_str().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            "^".parse::<Operator>(),
            Err(ParseOperatorError("^".to_string()))
        );
        assert!("add".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Some(5.0));
        assert_eq!(Operator::Subtract.apply(4.0, 1.0), Some(3.0));
        assert_eq!(Operator::Multiply.apply(2.0, 5.0), Some(10.0));
        assert_eq!(Operator::Divide.apply(6.0, 2.0), Some(3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operator::Divide.apply(10.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(10.0, -0.0), None);
        assert_eq!(Operator::Divide.apply(0.0, 0.0), None);
    }

    #[test]
    fn test_apply_keeps_ieee_semantics() {
        // No rounding: 0.1 + 0.2 is not 0.3 in binary floating point
        assert_eq!(Operator::Add.apply(0.1, 0.2), Some(0.1 + 0.2));
        assert_eq!(Operator::Multiply.apply(1e308, 10.0), Some(f64::INFINITY));
    }
}
