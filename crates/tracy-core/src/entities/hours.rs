use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One append-only record of time worked against a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourEntry {
    pub id: i64,
    pub project_id: i64,
    pub hours: f64,
    /// Set by the storage layer at insert time.
    pub logged_at: DateTime<Utc>,
}
