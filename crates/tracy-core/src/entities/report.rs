use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate of the hour ledger for a single project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub customer_name: String,
    pub project_name: String,
    pub total_hours: f64,
    /// Most recent `logged_at` for the project. `None` only for projects
    /// without any hours, which appear under `ListScope::IncludeEmpty`.
    pub last_logged: Option<DateTime<Utc>>,
}

/// Total hours per customer, feeding the dashboard chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerHours {
    pub customer_name: String,
    pub total_hours: f64,
}

/// Sum report rows per customer, keeping the order in which customers first appear.
#[must_use]
pub fn hours_by_customer(rows: &[ReportRow]) -> Vec<CustomerHours> {
    let mut totals: Vec<CustomerHours> = Vec::new();
    for row in rows {
        match totals
            .iter_mut()
            .find(|entry| entry.customer_name == row.customer_name)
        {
            Some(entry) => entry.total_hours += row.total_hours,
            None => totals.push(CustomerHours {
                customer_name: row.customer_name.clone(),
                total_hours: row.total_hours,
            }),
        }
    }
    totals
}
