//! Repository modules for the ledger tables.
//!
//! Each module adds methods to `TracyService` via `impl TracyService` blocks.

pub mod customer;
pub mod hours;
pub mod project;
pub mod report;
