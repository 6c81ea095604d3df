//! Hour ledger repository. Entries are append-only.

use tracy_core::entities::HourEntry;
use tracy_core::validate::validate_hours;

use crate::error::{ConstraintKind, DatabaseError, constraint_kind};
use crate::helpers::{collect_rows, parse_datetime};
use crate::service::TracyService;

const SELECT_COLS: &str = "id, project_id, hours, date";

fn row_to_entry(row: &libsql::Row) -> Result<HourEntry, DatabaseError> {
    Ok(HourEntry {
        id: row.get::<i64>(0)?,
        project_id: row.get::<i64>(1)?,
        hours: row.get::<f64>(2)?,
        logged_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl TracyService {
    /// Append an entry of `hours` worked against a project, stamped with the
    /// storage's current time.
    ///
    /// # Errors
    ///
    /// `Validation` for negative or non-finite hours (or zero when the ledger
    /// policy disallows it), `Referential` if `project_id` does not exist.
    pub async fn log_hours(&self, project_id: i64, hours: f64) -> Result<HourEntry, DatabaseError> {
        let hours = validate_hours(hours, self.policy())?;
        let conn = self.db().conn();

        if let Err(e) = conn
            .execute(
                "INSERT INTO hours (project_id, hours) VALUES (?1, ?2)",
                libsql::params![project_id, hours],
            )
            .await
        {
            if constraint_kind(&e) == Some(ConstraintKind::ForeignKey) {
                tracing::warn!(project_id, "hours for unknown project rejected");
                return Err(DatabaseError::Referential {
                    entity: "project",
                    id: project_id,
                });
            }
            return Err(e.into());
        }

        let id = conn.last_insert_rowid();
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM hours WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let entry = row_to_entry(&row)?;
        tracing::info!(id, project_id, hours, "hours logged");
        Ok(entry)
    }

    /// The raw ledger, oldest entry first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_hours(&self) -> Result<Vec<HourEntry>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM hours ORDER BY id"),
                (),
            )
            .await?;
        collect_rows(rows, row_to_entry).await
    }
}
