use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a sensor log from becoming a figure.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot open '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column '{column}': '{value}' is not a number")]
    NonNumeric {
        line: u64,
        column: String,
        value: String,
    },
    #[error("log is empty: no header line")]
    EmptyLog,
    #[error("log has a header but no data rows")]
    NoRows,
    #[error("log has {found} columns, at least {required} are required")]
    MissingColumns { found: usize, required: usize },
    #[error("axis selection flag must be 0 or 1, got {0}")]
    InvalidAxisFlag(u8),
}
