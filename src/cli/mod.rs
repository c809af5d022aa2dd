mod calculator;
mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{Config, LogLevel};

pub use calculator::*;
pub use commands::*;

/// calcledger - two-operand calculator with a CSV history ledger
#[derive(Parser)]
#[command(name = "calcledger")]
#[command(about = "An interactive calculator that saves its history to CSV on exit")]
#[command(version)]
pub struct Cli {
    /// Base directory for exported history (files go to <BASE_PATH>/csv_history)
    #[arg(short, long, env = "CALCULATOR_BASE_PATH", default_value = ".")]
    pub base_path: PathBuf,

    /// Minimum log level: trace, debug, info, warn, error
    #[arg(
        short,
        long,
        env = "CALCULATOR_LOG_LEVEL",
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    pub log_level: LogLevel,

    /// Command to run: calculator, menu
    #[arg(default_value = "calculator")]
    pub command: String,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.base_path.clone(), self.log_level)
    }

    pub fn run(&self, config: &Config) -> Result<()> {
        let mut registry = CommandRegistry::with_defaults(config);

        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        registry.execute(&self.command, &mut input, &mut output)?;
        Ok(())
    }
}
