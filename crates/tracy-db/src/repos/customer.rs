//! Customer repository.

use tracy_core::entities::Customer;
use tracy_core::validate::validate_name;

use crate::error::{ConstraintKind, DatabaseError, constraint_kind};
use crate::helpers::collect_rows;
use crate::service::TracyService;

const SELECT_COLS: &str = "id, name";

fn row_to_customer(row: &libsql::Row) -> Result<Customer, DatabaseError> {
    Ok(Customer {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
    })
}

impl TracyService {
    /// Insert a customer. Names are trimmed and must be unique.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name, `DuplicateKey` if the name is taken.
    pub async fn add_customer(&self, name: &str) -> Result<Customer, DatabaseError> {
        let name = validate_name("customer name", name)?;
        let conn = self.db().conn();

        if let Err(e) = conn
            .execute("INSERT INTO customers (name) VALUES (?1)", [name.as_str()])
            .await
        {
            if constraint_kind(&e) == Some(ConstraintKind::Unique) {
                tracing::warn!(name = %name, "duplicate customer rejected");
                return Err(DatabaseError::DuplicateKey {
                    entity: "customer",
                    value: name,
                });
            }
            return Err(e.into());
        }

        let customer = Customer {
            id: conn.last_insert_rowid(),
            name,
        };
        tracing::info!(id = customer.id, name = %customer.name, "customer added");
        Ok(customer)
    }

    /// All customers, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM customers ORDER BY id"),
                (),
            )
            .await?;
        collect_rows(rows, row_to_customer).await
    }

    /// Look up a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_customer(&self, id: i64) -> Result<Option<Customer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM customers WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    /// Look up a customer by exact (trimmed) name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_customer_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Customer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM customers WHERE name = ?1"),
                [name.trim()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_customer(&row)?)),
            None => Ok(None),
        }
    }
}
