use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::ChartError;

/// Columns the chart layout indexes into: sample, time and six channels.
pub const REQUIRED_COLUMNS: usize = 8;

/// A fully parsed datalogger CSV: header names plus a row-major numeric body.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorLog {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl SensorLog {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Extract one column top to bottom, or `None` when `index` is past the
    /// last column.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.column_count() {
            return None;
        }
        self.rows.iter().map(|row| row.get(index).copied()).collect()
    }
}

/// Open and parse a sensor log from disk.
pub fn load_sensor_log(path: &Path) -> Result<SensorLog, ChartError> {
    let file = File::open(path).map_err(|source| ChartError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let log = read_sensor_log(BufReader::new(file))?;
    tracing::info!(
        "Loaded {} rows x {} columns from {:?}",
        log.row_count(),
        log.column_count(),
        path
    );
    Ok(log)
}

/// Parse a sensor log from any reader. The first line is the header; every
/// following line must have the same field count and hold only numbers.
pub fn read_sensor_log<R: Read>(reader: R) -> Result<SensorLog, ChartError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header = reader
        .headers()
        .map_err(|source| csv_error(1, source))?
        .clone();
    if header.is_empty() {
        return Err(ChartError::EmptyLog);
    }
    let columns: Vec<String> = header.iter().map(|name| name.to_string()).collect();
    tracing::debug!("Header columns: {:?}", columns);

    if columns.len() < REQUIRED_COLUMNS {
        return Err(ChartError::MissingColumns {
            found: columns.len(),
            required: REQUIRED_COLUMNS,
        });
    }

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| {
            let line = source.position().map(|p| p.line()).unwrap_or(0);
            csv_error(line, source)
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let mut row = Vec::with_capacity(columns.len());
        for (col_idx, cell) in record.iter().enumerate() {
            match cell.parse::<f64>() {
                Ok(value) => row.push(value),
                Err(_) => {
                    return Err(ChartError::NonNumeric {
                        line,
                        column: columns[col_idx].clone(),
                        value: cell.to_string(),
                    })
                }
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ChartError::NoRows);
    }

    Ok(SensorLog { columns, rows })
}

/// Ragged rows surface from the csv reader as `UnequalLengths`.
fn csv_error(line: u64, source: csv::Error) -> ChartError {
    if let csv::ErrorKind::UnequalLengths { expected_len, len, .. } = source.kind() {
        return ChartError::RaggedRow {
            line,
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    ChartError::Csv { line, source }
}
