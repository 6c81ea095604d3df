//! Row-to-entity parsing helpers.
//!
//! `CURRENT_TIMESTAMP` writes `"YYYY-MM-DD HH:MM:SS"` (UTC) while values bound
//! from Rust may be RFC 3339. Both are accepted when reading back.

use chrono::{DateTime, NaiveDate, Utc};
use tracy_core::validate::DEADLINE_FORMAT;

use crate::error::DatabaseError;

/// Parse a TEXT timestamp column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a nullable timestamp column. SQL NULL and `""` both map to `None`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a `DATE` column (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored text is not a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DEADLINE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column is an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Collect every row of a query through `map`.
///
/// # Errors
///
/// Returns the first error from stepping the cursor or from `map`.
pub async fn collect_rows<T, F>(mut rows: libsql::Rows, map: F) -> Result<Vec<T>, DatabaseError>
where
    F: Fn(&libsql::Row) -> Result<T, DatabaseError>,
{
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        results.push(map(&row)?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_sqlite_timestamp() {
        let dt = parse_datetime("2025-01-02 09:30:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 1, 2));
        assert_eq!((dt.hour(), dt.minute()), (9, 30));
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_datetime("2025-01-02T11:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn optional_timestamp_treats_empty_as_none() {
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
        assert!(parse_optional_datetime(Some("2025-01-02 09:30:00"))
            .unwrap()
            .is_some());
    }

    #[test]
    fn parses_deadline_column() {
        let date = parse_date("2025-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(parse_date("01/01/2025").is_err());
    }
}
