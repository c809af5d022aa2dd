use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, error};

use super::Command;
use crate::application::{Calculator, CommandName, EvalOutcome};
use crate::config::Config;
use crate::domain::{Keyword, Ledger};
use crate::io::Exporter;

pub const PROMPT: &str = "Enter operation (+, -, *, /, history, or exit): ";

/// Format a result for display: `5.0`, `0.5`, `1e300`, `inf`.
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// Interactive calculator session. Each execution starts a fresh ledger and
/// saves it when the user types `exit` or input ends.
pub struct CalculatorCommand {
    config: Config,
}

impl CalculatorCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn save_history(&self, ledger: &Ledger) -> Result<PathBuf> {
        let dir = self.config.history_dir();
        let now = Local::now().naive_local();
        Exporter::new(ledger)
            .save_to_dir(&dir, &now)
            .context("Failed to save calculator history")
    }
}

impl Command for CalculatorCommand {
    fn name(&self) -> CommandName {
        CommandName::Calculator
    }

    fn describe(&self) -> &'static str {
        "Interactive calculator (+, -, *, /) with history export"
    }

    fn execute(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let mut calculator = Calculator::new();
        let mut buf = Vec::new();

        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    writeln!(output)?;
                    debug!("End of input, closing session");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Failed to read input: {e}");
                    writeln!(output)?;
                    break;
                }
            }

            // Invalid UTF-8 becomes U+FFFD and fails as a bad number or format
            let line = String::from_utf8_lossy(&buf);
            match calculator.evaluate(&line) {
                Ok(EvalOutcome::Value(result)) => {
                    writeln!(output, "Result: {}", format_value(result))?;
                }
                Ok(EvalOutcome::Keyword(Keyword::History)) => {
                    print_history(calculator.ledger(), output)?;
                }
                Ok(EvalOutcome::Keyword(Keyword::Exit)) => break,
                Err(e) => {
                    error!("Error: {e}");
                    writeln!(output, "Error: {e}")?;
                }
            }
        }

        let path = self.save_history(calculator.ledger())?;
        writeln!(output, "History saved to {}", path.display())?;
        Ok(())
    }
}

fn print_history(ledger: &Ledger, output: &mut dyn Write) -> Result<()> {
    if ledger.is_empty() {
        writeln!(output, "No calculations yet.")?;
        return Ok(());
    }

    for (i, record) in ledger.into_iter().enumerate() {
        writeln!(
            output,
            "{:>3}. {} {} {} = {}",
            i + 1,
            format_value(record.operand1),
            record.operation,
            format_value(record.operand2),
            format_value(record.result)
        )?;
    }
    Ok(())
}
