use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work owned by exactly one customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub customer_id: i64,
    pub name: String,
    pub deadline: NaiveDate,
    pub budget: f64,
}

/// A project joined with the name of its customer, as shown in project listings.
///
/// `customer_name` is only `None` under [`ListScope::IncludeEmpty`](crate::enums::ListScope)
/// when the referenced customer row is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectListing {
    pub id: i64,
    pub name: String,
    pub deadline: NaiveDate,
    pub budget: f64,
    pub customer_name: Option<String>,
}
