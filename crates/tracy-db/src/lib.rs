//! # tracy-db
//!
//! libSQL storage for the tracy ledger: customers, their projects and the
//! append-only log of hours worked against each project.
//!
//! [`TracyDb`] owns one database and one connection for the lifetime of a
//! session. [`service::TracyService`] wraps it together with the ledger policy
//! and hosts the repository methods in [`repos`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Path that opens a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Scoped database handle: opened at session start, released by [`TracyDb::close`]
/// or on drop.
pub struct TracyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    path: String,
}

impl TracyDb {
    /// Open (or create) a local database file and make sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StorageUnavailable` if the file cannot be opened,
    /// is locked or is not a database, or `DatabaseError::Migration` if the
    /// schema cannot be created.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::StorageUnavailable(format!("open {path}: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::StorageUnavailable(format!("connect {path}: {e}")))?;

        // Foreign keys are off by default and must be enabled per connection.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::StorageUnavailable(format!("PRAGMA foreign_keys: {e}")))?;

        let tracy_db = Self {
            db,
            conn,
            path: path.to_string(),
        };
        tracy_db.initialize().await?;
        tracing::debug!(path, "database opened");
        Ok(tracy_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// The path this handle was opened with.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// End the session, releasing the connection and database.
    pub fn close(self) {
        tracing::debug!(path = %self.path, "database closed");
        drop(self);
    }
}
