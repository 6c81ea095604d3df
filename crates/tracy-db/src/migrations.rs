//! Schema initializer.
//!
//! Embeds the SQL migration file at compile time and executes it on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::TracyDb;
use crate::error::{DatabaseError, is_storage_unusable};

/// Initial schema: customers, projects, hours.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl TracyDb {
    /// Create the three tables if absent. Safe to call any number of times.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StorageUnavailable` if the file is locked or is
    /// not a database, `DatabaseError::Migration` if the batch fails otherwise.
    pub async fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| {
                if is_storage_unusable(&e) {
                    DatabaseError::StorageUnavailable(format!("{}: {e}", self.path))
                } else {
                    DatabaseError::Migration(format!("001_initial: {e}"))
                }
            })?;
        tracing::debug!(path = %self.path, "schema initialized");
        Ok(())
    }
}
