//! Service layer: the database handle plus the ledger policy.
//!
//! `TracyService` wraps `TracyDb`. All repository methods are implemented as
//! `impl TracyService` blocks in [`crate::repos`].

use tracy_core::validate::LedgerPolicy;

use crate::TracyDb;
use crate::error::DatabaseError;

/// One session against the ledger database.
pub struct TracyService {
    db: TracyDb,
    policy: LedgerPolicy,
}

impl TracyService {
    /// Open a local database file (or `":memory:"`) and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or initialized.
    pub async fn new_local(db_path: &str, policy: LedgerPolicy) -> Result<Self, DatabaseError> {
        let db = TracyDb::open_local(db_path).await?;
        Ok(Self { db, policy })
    }

    /// Wrap an already-open database.
    #[must_use]
    pub const fn from_db(db: TracyDb, policy: LedgerPolicy) -> Self {
        Self { db, policy }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TracyDb {
        &self.db
    }

    /// Policy applied to hour entries.
    #[must_use]
    pub const fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    /// End the session.
    pub fn close(self) {
        self.db.close();
    }
}
