// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use calcledger::cli::CommandRegistry;
use calcledger::config::{Config, LogLevel};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a config whose base path is a temporary directory
pub fn test_config() -> Result<(Config, TempDir)> {
    let temp_dir = TempDir::new()?;
    let config = Config::new(temp_dir.path(), LogLevel::Debug);
    Ok((config, temp_dir))
}

/// Run a scripted session of `command` and return everything it printed
pub fn run_session(config: &Config, command: &str, script: &str) -> Result<String> {
    run_session_bytes(config, command, script.as_bytes())
}

/// Same as `run_session`, for scripts that are not valid UTF-8
pub fn run_session_bytes(config: &Config, command: &str, script: &[u8]) -> Result<String> {
    let mut registry = CommandRegistry::with_defaults(config);
    let mut input = Cursor::new(script.to_vec());
    let mut output = Vec::new();
    registry.execute(command, &mut input, &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// All history files saved under the config's history directory, sorted
pub fn saved_history_files(config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(config.history_dir())? {
        files.push(entry?.path());
    }
    files.sort();
    Ok(files)
}
