use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::{CalculationRecord, Ledger};

/// Column names of the exported history, in order.
pub const HISTORY_HEADER: [&str; 4] = ["operand1", "operation", "operand2", "result"];

/// Build the export file name for a session saved at `timestamp`.
/// Example: 2024-11-07 15:30:45 -> "calculator_history_071124153045.csv"
pub fn history_file_name(timestamp: &NaiveDateTime) -> String {
    format!("calculator_history_{}.csv", timestamp.format("%d%m%y%H%M%S"))
}

/// Exporter for writing a session ledger to CSV
pub struct Exporter<'a> {
    records: &'a [CalculationRecord],
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self::from_records(ledger.snapshot())
    }

    pub fn from_records(records: &'a [CalculationRecord]) -> Self {
        Self { records }
    }

    /// Export the history to CSV format, returning the number of rows written.
    /// The header row is always written, even for an empty ledger.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(HISTORY_HEADER)?;

        let mut count = 0;
        for record in self.records {
            csv_writer.serialize(record)?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Write the history into `dir`, creating it if needed.
    /// Returns the full path of the new file. An existing file with the same
    /// name is an error; earlier history is never overwritten.
    pub fn save_to_dir(&self, dir: &Path, timestamp: &NaiveDateTime) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create history directory: {}", dir.display()))?;

        let path = dir.join(history_file_name(timestamp));
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        let count = self
            .write_csv(file)
            .with_context(|| format!("Failed to write history to {}", path.display()))?;

        info!(path = %path.display(), records = count, "Calculator history saved");
        Ok(path)
    }
}
