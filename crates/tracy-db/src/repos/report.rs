//! Aggregate reports over the hour ledger. Recomputed on every read.

use tracy_core::entities::{CustomerHours, ReportRow, hours_by_customer};
use tracy_core::enums::ListScope;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_opt_string, parse_optional_datetime};
use crate::service::TracyService;

fn row_to_report(row: &libsql::Row) -> Result<ReportRow, DatabaseError> {
    let last_logged = get_opt_string(row, 3)?;
    Ok(ReportRow {
        customer_name: row.get::<String>(0)?,
        project_name: row.get::<String>(1)?,
        total_hours: row.get::<f64>(2)?,
        last_logged: parse_optional_datetime(last_logged.as_deref())?,
    })
}

impl TracyService {
    /// One row per project that has logged hours: total and most recent entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn fetch_reports(&self) -> Result<Vec<ReportRow>, DatabaseError> {
        self.fetch_reports_in(ListScope::ActiveOnly).await
    }

    /// Per-project totals. `IncludeEmpty` also reports projects with no hours
    /// (`total_hours = 0.0`, no `last_logged`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn fetch_reports_in(
        &self,
        scope: ListScope,
    ) -> Result<Vec<ReportRow>, DatabaseError> {
        let sql = format!(
            "SELECT c.name, p.name, COALESCE(SUM(h.hours), 0.0), MAX(h.date)
             FROM projects p
             JOIN customers c ON p.customer_id = c.id
             {join} hours h ON h.project_id = p.id
             GROUP BY p.id
             ORDER BY p.id",
            join = scope.join_keyword()
        );
        let rows = self.db().conn().query(&sql, ()).await?;
        let reports = collect_rows(rows, row_to_report).await?;
        tracing::debug!(%scope, rows = reports.len(), "reports fetched");
        Ok(reports)
    }

    /// Total hours per customer, in the order customers first appear in the report.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the underlying report query fails.
    pub async fn customer_hours(
        &self,
        scope: ListScope,
    ) -> Result<Vec<CustomerHours>, DatabaseError> {
        let reports = self.fetch_reports_in(scope).await?;
        Ok(hours_by_customer(&reports))
    }
}
