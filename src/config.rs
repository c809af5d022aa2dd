use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Sub-directory of the base path that receives exported history files.
pub const HISTORY_DIR_NAME: &str = "csv_history";

/// Minimum severity recorded by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    #[value(alias = "warning")]
    Warn,
    #[value(alias = "critical")]
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Startup configuration handed to the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base directory; history files go to `<base_path>/csv_history`
    pub base_path: PathBuf,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    pub fn new(base_path: impl Into<PathBuf>, log_level: LogLevel) -> Self {
        Self {
            base_path: base_path.into(),
            log_level,
        }
    }

    pub fn history_dir(&self) -> PathBuf {
        self.base_path.join(HISTORY_DIR_NAME)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
