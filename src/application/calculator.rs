use tracing::{debug, error};

use crate::domain::{CalculationRecord, EvalError, Keyword, Ledger, ParsedInput, parse_input};

/// What a successful call to [`Calculator::evaluate`] produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalOutcome {
    /// An arithmetic result; the ledger gained one record.
    Value(f64),
    /// A bare keyword; nothing was computed or recorded.
    Keyword(Keyword),
}

/// Evaluates single-line expressions and records each accepted one.
/// This is the primary interface for any client (REPL, tests, scripts).
#[derive(Debug, Default)]
pub struct Calculator {
    ledger: Ledger,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and compute one line of input.
    ///
    /// On success the record is appended before returning. On failure the
    /// ledger is unchanged.
    pub fn evaluate(&mut self, input: &str) -> Result<EvalOutcome, EvalError> {
        let expression = match parse_input(input) {
            Ok(ParsedInput::Keyword(keyword)) => return Ok(EvalOutcome::Keyword(keyword)),
            Ok(ParsedInput::Expression(expression)) => expression,
            Err(e) => {
                if matches!(e, EvalError::InvalidNumber { .. }) {
                    error!(input = input.trim(), "Invalid number format");
                }
                return Err(e);
            }
        };

        let result = expression.evaluate().inspect_err(|e| {
            error!(expression = %expression, "{e}");
        })?;

        self.ledger
            .append(CalculationRecord::from_expression(&expression, result));
        debug!(expression = %expression, result, "Calculation recorded");

        Ok(EvalOutcome::Value(result))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }
}
