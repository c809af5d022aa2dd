use serde::{Deserialize, Serialize};

use super::{Expression, Operator};

/// One accepted computation. Records are immutable once created;
/// corrections are simply new calculations.
///
/// Field names double as the exported CSV header:
/// `operand1,operation,operand2,result`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub operand1: f64,
    pub operation: Operator,
    pub operand2: f64,
    pub result: f64,
}

impl CalculationRecord {
    pub fn new(operand1: f64, operation: Operator, operand2: f64, result: f64) -> Self {
        Self {
            operand1,
            operation,
            operand2,
            result,
        }
    }

    pub fn from_expression(expression: &Expression, result: f64) -> Self {
        Self::new(
            expression.operand1,
            expression.operator,
            expression.operand2,
            result,
        )
    }
}
