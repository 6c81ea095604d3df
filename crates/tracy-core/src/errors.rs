//! Error types for tracy-core.
//!
//! Storage errors (`DatabaseError`) live in tracy-db; configuration errors in
//! tracy-config. Everything converges into `anyhow` at the CLI.

use thiserror::Error;

/// Errors raised while validating input or exporting reports.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (empty name, negative hours, malformed date...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Writing CSV output failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure while exporting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
