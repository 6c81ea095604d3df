use serde::{Deserialize, Serialize};

/// A billable client. Names are unique across the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}
