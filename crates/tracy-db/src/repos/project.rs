//! Project repository.

use chrono::NaiveDate;
use tracy_core::entities::{Project, ProjectListing};
use tracy_core::enums::ListScope;
use tracy_core::validate::{DEADLINE_FORMAT, validate_budget, validate_name};

use crate::error::{ConstraintKind, DatabaseError, constraint_kind};
use crate::helpers::{collect_rows, get_opt_string, parse_date};
use crate::service::TracyService;

fn row_to_listing(row: &libsql::Row) -> Result<ProjectListing, DatabaseError> {
    Ok(ProjectListing {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        deadline: parse_date(&row.get::<String>(2)?)?,
        budget: row.get::<f64>(3)?,
        customer_name: get_opt_string(row, 4)?,
    })
}

impl TracyService {
    /// Insert a project for an existing customer.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name or a negative / non-finite budget,
    /// `Referential` if `customer_id` does not exist.
    pub async fn add_project(
        &self,
        customer_id: i64,
        name: &str,
        deadline: NaiveDate,
        budget: f64,
    ) -> Result<Project, DatabaseError> {
        let name = validate_name("project name", name)?;
        let budget = validate_budget(budget)?;
        let conn = self.db().conn();

        if let Err(e) = conn
            .execute(
                "INSERT INTO projects (customer_id, name, deadline, budget)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    customer_id,
                    name.as_str(),
                    deadline.format(DEADLINE_FORMAT).to_string(),
                    budget
                ],
            )
            .await
        {
            if constraint_kind(&e) == Some(ConstraintKind::ForeignKey) {
                tracing::warn!(customer_id, "project for unknown customer rejected");
                return Err(DatabaseError::Referential {
                    entity: "customer",
                    id: customer_id,
                });
            }
            return Err(e.into());
        }

        let project = Project {
            id: conn.last_insert_rowid(),
            customer_id,
            name,
            deadline,
            budget,
        };
        tracing::info!(id = project.id, customer_id, name = %project.name, "project added");
        Ok(project)
    }

    /// Projects joined with their customer's name, active scope.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_projects(&self) -> Result<Vec<ProjectListing>, DatabaseError> {
        self.list_projects_in(ListScope::ActiveOnly).await
    }

    /// Projects joined with their customer's name.
    ///
    /// `ActiveOnly` drops projects whose customer row is missing;
    /// `IncludeEmpty` keeps them with `customer_name = None`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_projects_in(
        &self,
        scope: ListScope,
    ) -> Result<Vec<ProjectListing>, DatabaseError> {
        let sql = format!(
            "SELECT p.id, p.name, p.deadline, p.budget, c.name
             FROM projects p
             {join} customers c ON p.customer_id = c.id
             ORDER BY p.id",
            join = scope.join_keyword()
        );
        let rows = self.db().conn().query(&sql, ()).await?;
        collect_rows(rows, row_to_listing).await
    }
}
