use std::fmt;

use thiserror::Error;

use super::Operator;

/// Why a single input line could not be turned into a result.
/// Every variant is local to that line: the ledger is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(
        "Invalid expression format: expected '<number> <operator> <number>', got {tokens} token(s)"
    )]
    InvalidFormat { tokens: usize },

    #[error("Invalid number format: {}. Please enter valid numbers", .tokens.join(", "))]
    InvalidNumber { tokens: Vec<String> },

    #[error("Invalid operation '{0}'. Use one of +, -, *, /")]
    InvalidOperator(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Single-word inputs that bypass arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    History,
    Exit,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::History => "history",
            Keyword::Exit => "exit",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "history" => Some(Keyword::History),
            "exit" => Some(Keyword::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `<number> <operator> <number>` line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub operand1: f64,
    pub operator: Operator,
    pub operand2: f64,
}

impl Expression {
    pub fn new(operand1: f64, operator: Operator, operand2: f64) -> Self {
        Self {
            operand1,
            operator,
            operand2,
        }
    }

    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.operator
            .apply(self.operand1, self.operand2)
            .ok_or(EvalError::DivisionByZero)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand1, self.operator, self.operand2)
    }
}

/// What a line of input turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    Keyword(Keyword),
    Expression(Expression),
}

/// Tokenize and validate one line of input. Pure; nothing is computed here.
///
/// Operands are checked before the operator, so `a ^ b` reports the bad
/// numbers rather than the bad operator.
pub fn parse_input(input: &str) -> Result<ParsedInput, EvalError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    if let [single] = tokens.as_slice() {
        if let Some(keyword) = Keyword::from_token(single) {
            return Ok(ParsedInput::Keyword(keyword));
        }
    }

    let [lhs, op, rhs] = tokens.as_slice() else {
        return Err(EvalError::InvalidFormat {
            tokens: tokens.len(),
        });
    };

    let operand1 = parse_operand(lhs);
    let operand2 = parse_operand(rhs);
    let (operand1, operand2) = match (operand1, operand2) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            let tokens = [(a, lhs), (b, rhs)]
                .into_iter()
                .filter(|(parsed, _)| parsed.is_none())
                .map(|(_, token)| token.to_string())
                .collect();
            return Err(EvalError::InvalidNumber { tokens });
        }
    };

    let operator = op
        .parse::<Operator>()
        .map_err(|e| EvalError::InvalidOperator(e.0))?;

    Ok(ParsedInput::Expression(Expression::new(
        operand1, operator, operand2,
    )))
}

/// Operands must be finite; `inf` and `nan` parse as f64 but are rejected.
fn parse_operand(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
