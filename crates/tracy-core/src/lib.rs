//! # tracy-core
//!
//! Core types shared across the tracy crates:
//! - Entity structs for customers, projects, hour entries and report rows
//! - The `ListScope` join policy
//! - Input validation for the values typed into forms
//! - CSV export of the report table
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod validate;

pub use errors::CoreError;
