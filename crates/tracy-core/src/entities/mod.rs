//! Entity structs for the customer / project / hour ledger.
//!
//! Each entity maps to a table (or a join over tables) in the tracy database.

mod customer;
mod hours;
mod project;
mod report;

pub use customer::Customer;
pub use hours::HourEntry;
pub use project::{Project, ProjectListing};
pub use report::{CustomerHours, ReportRow, hours_by_customer};
