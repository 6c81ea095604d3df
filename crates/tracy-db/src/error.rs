//! Database error types for tracy-db.

use thiserror::Error;
use tracy_core::CoreError;

/// `SQLITE_BUSY` primary result code.
const SQLITE_BUSY: i32 = 5;
/// `SQLITE_LOCKED` primary result code.
const SQLITE_LOCKED: i32 = 6;
/// `SQLITE_CANTOPEN` primary result code.
const SQLITE_CANTOPEN: i32 = 14;
/// `SQLITE_NOTADB` primary result code.
const SQLITE_NOTADB: i32 = 26;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A uniquely-keyed value is already present.
    #[error("{entity} '{value}' already exists")]
    DuplicateKey { entity: &'static str, value: String },

    /// A foreign key points at a row that does not exist.
    #[error("{entity} {id} does not exist")]
    Referential { entity: &'static str, id: i64 },

    /// Input rejected before or by the storage layer.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The database file cannot be opened or used, e.g. it is locked elsewhere.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema initialization failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[source] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the caller can fix the input and retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey { .. } | Self::Referential { .. } | Self::Validation(_)
        )
    }
}

impl From<libsql::Error> for DatabaseError {
    fn from(err: libsql::Error) -> Self {
        if is_busy(&err) {
            Self::StorageUnavailable(err.to_string())
        } else {
            Self::LibSql(err)
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            other => Self::Other(other.into()),
        }
    }
}

/// Kind of constraint a failed statement tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintKind {
    Unique,
    ForeignKey,
}

/// Classify a constraint failure from its SQLite message.
pub(crate) fn constraint_kind(err: &libsql::Error) -> Option<ConstraintKind> {
    let msg = err.to_string();
    if msg.contains("UNIQUE constraint failed") {
        Some(ConstraintKind::Unique)
    } else if msg.contains("FOREIGN KEY constraint failed") {
        Some(ConstraintKind::ForeignKey)
    } else {
        None
    }
}

/// Busy, locked, unopenable or not a database at all.
pub(crate) fn is_storage_unusable(err: &libsql::Error) -> bool {
    if is_busy(err) {
        return true;
    }
    if let libsql::Error::SqliteFailure(code, _) = err {
        let primary = code & 0xff;
        if primary == SQLITE_CANTOPEN || primary == SQLITE_NOTADB {
            return true;
        }
    }
    let msg = err.to_string();
    msg.contains("file is not a database") || msg.contains("unable to open database file")
}

fn is_busy(err: &libsql::Error) -> bool {
    if let libsql::Error::SqliteFailure(code, _) = err {
        let primary = code & 0xff;
        if primary == SQLITE_BUSY || primary == SQLITE_LOCKED {
            return true;
        }
    }
    let msg = err.to_string();
    msg.contains("database is locked") || msg.contains("database table is locked")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_failures_become_storage_unavailable() {
        let err = libsql::Error::SqliteFailure(SQLITE_BUSY, "database is locked".into());
        assert!(matches!(
            DatabaseError::from(err),
            DatabaseError::StorageUnavailable(_)
        ));
    }

    #[test]
    fn other_failures_stay_libsql() {
        let err = libsql::Error::SqliteFailure(1, "no such table: nope".into());
        let converted = DatabaseError::from(err);
        assert!(matches!(converted, DatabaseError::LibSql(_)));
        assert!(!converted.is_recoverable());
    }

    #[test]
    fn unusable_storage_is_recognized() {
        let not_a_db =
            libsql::Error::SqliteFailure(SQLITE_NOTADB, "file is not a database".into());
        let locked =
            libsql::Error::SqliteFailure(SQLITE_LOCKED, "database table is locked".into());
        let syntax = libsql::Error::SqliteFailure(1, "near \"CREAT\": syntax error".into());
        assert!(is_storage_unusable(&not_a_db));
        assert!(is_storage_unusable(&locked));
        assert!(!is_storage_unusable(&syntax));
    }

    #[test]
    fn constraint_messages_are_classified() {
        let unique = libsql::Error::SqliteFailure(
            2067,
            "UNIQUE constraint failed: customers.name".into(),
        );
        let fk = libsql::Error::SqliteFailure(787, "FOREIGN KEY constraint failed".into());
        let other = libsql::Error::SqliteFailure(1, "syntax error".into());
        assert_eq!(constraint_kind(&unique), Some(ConstraintKind::Unique));
        assert_eq!(constraint_kind(&fk), Some(ConstraintKind::ForeignKey));
        assert_eq!(constraint_kind(&other), None);
    }

    #[test]
    fn validation_errors_carry_over_from_core() {
        let err = DatabaseError::from(CoreError::Validation("hours must not be negative".into()));
        assert!(matches!(err, DatabaseError::Validation(ref m) if m.contains("negative")));
        assert!(err.is_recoverable());
    }
}
