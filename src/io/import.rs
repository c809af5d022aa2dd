use anyhow::{Context, Result};
use std::io::Read;

use crate::domain::CalculationRecord;

/// Read back a history file written by [`super::Exporter`].
/// Rows are returned in file order; any malformed row aborts the read.
pub fn read_history_csv<R: Read>(reader: R) -> Result<Vec<CalculationRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (line_num, result) in csv_reader.deserialize::<CalculationRecord>().enumerate() {
        let line = line_num + 2; // +2 for header and 0-indexing
        let record = result.with_context(|| format!("Invalid history row at line {}", line))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operator;

    #[test]
    fn test_read_history_csv() {
        let data = "operand1,operation,operand2,result\n2.0,+,3.0,5.0\n4,-,1,3\n";

        let records = read_history_csv(data.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                CalculationRecord::new(2.0, Operator::Add, 3.0, 5.0),
                CalculationRecord::new(4.0, Operator::Subtract, 1.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_read_history_header_only() {
        let records = read_history_csv("operand1,operation,operand2,result\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_history_rejects_bad_operator() {
        let data = "operand1,operation,operand2,result\n2,^,3,8\n";
        let err = read_history_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
