//! Activity-log file ingestion.
//!
//! Log files are newline-delimited JSON: one event object per line. Blank
//! lines are skipped; any other unparsable line fails the whole file, with
//! the 1-based line number in the error.

use std::fs;
use std::path::Path;

use crate::error::{EtlError, EtlResult};
use crate::types::LogRecord;

/// Read and parse every event in a newline-delimited log file.
pub fn read_log_file(path: impl AsRef<Path>) -> EtlResult<Vec<LogRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log_records_from_str(&text).map_err(|err| match err {
        EtlError::MalformedRecord { message } => EtlError::MalformedRecord {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })
}

/// Parse newline-delimited log events from an in-memory string.
pub fn log_records_from_str(input: &str) -> EtlResult<Vec<LogRecord>> {
    let mut records = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| EtlError::MalformedRecord {
            message: format!("line {}: {}", i + 1, e),
        })?;
        records.push(record);
    }
    Ok(records)
}
