//! CSV export of the report table.
//!
//! Columns: `customer,project,total_hours,last_logged`. Timestamps are
//! written as `YYYY-MM-DD HH:MM:SS`; a project without hours gets an empty
//! `last_logged` cell.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::entities::ReportRow;
use crate::errors::CoreError;

/// Timestamp layout for exported `last_logged` values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct ReportRecord<'a> {
    customer: &'a str,
    project: &'a str,
    total_hours: f64,
    last_logged: Option<String>,
}

impl<'a> From<&'a ReportRow> for ReportRecord<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            customer: &row.customer_name,
            project: &row.project_name,
            total_hours: row.total_hours,
            last_logged: row
                .last_logged
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// Write report rows as CSV into any writer. Returns the number of rows written.
///
/// The header row is always written, even for an empty report.
///
/// # Errors
///
/// Returns `CoreError::Csv` if serialization or the underlying writer fails.
pub fn write_reports_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<usize, CoreError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(["customer", "project", "total_hours", "last_logged"])?;
    for row in rows {
        wtr.serialize(ReportRecord::from(row))?;
    }
    wtr.flush()?;
    Ok(rows.len())
}

/// Render report rows to a CSV string.
///
/// # Errors
///
/// Returns `CoreError` if serialization fails.
pub fn reports_to_csv_string(rows: &[ReportRow]) -> Result<String, CoreError> {
    let mut buf = Vec::new();
    write_reports_csv(rows, &mut buf)?;
    buffer_to_string(buf)
}

fn buffer_to_string(buf: Vec<u8>) -> Result<String, CoreError> {
    String::from_utf8(buf).map_err(|e| CoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Export report rows to a CSV file, creating or truncating it.
///
/// # Errors
///
/// Returns `CoreError::Io` if the file cannot be created, or `CoreError::Csv`
/// if writing fails.
pub fn export_reports_csv(rows: &[ReportRow], path: &Path) -> Result<usize, CoreError> {
    let file = std::fs::File::create(path)?;
    write_reports_csv(rows, file)
}
