//! Validation of raw form input before it reaches the data layer.
//!
//! The presentation layer hands over whatever the user typed. These helpers
//! turn it into typed values or a `CoreError::Validation` describing what is
//! wrong with it.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Date format used for project deadlines, both on input and in storage.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Rules applied to hour-ledger entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    /// Whether a zero-hour entry ("no work done yet") is accepted.
    pub allow_zero_hours: bool,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            allow_zero_hours: true,
        }
    }
}

/// Trim a name and reject it when nothing is left.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `raw` is empty or whitespace only.
pub fn validate_name(field: &str, raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Check an hour value against the ledger policy.
///
/// # Errors
///
/// Returns `CoreError::Validation` for NaN/infinite or negative values, and for
/// zero when the policy disallows it.
pub fn validate_hours(hours: f64, policy: LedgerPolicy) -> Result<f64, CoreError> {
    if !hours.is_finite() {
        return Err(CoreError::Validation(format!(
            "hours must be a finite number, got {hours}"
        )));
    }
    if hours < 0.0 {
        return Err(CoreError::Validation(format!(
            "hours must not be negative, got {hours}"
        )));
    }
    if hours == 0.0 && !policy.allow_zero_hours {
        return Err(CoreError::Validation(
            "hours must be greater than zero".to_string(),
        ));
    }
    Ok(hours)
}

/// Parse typed hours, e.g. `"3.5"`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the text is not a number or fails
/// [`validate_hours`].
pub fn parse_hours(raw: &str, policy: LedgerPolicy) -> Result<f64, CoreError> {
    let hours = parse_number("hours", raw)?;
    validate_hours(hours, policy)
}

/// Check a project budget: finite and non-negative.
///
/// # Errors
///
/// Returns `CoreError::Validation` for NaN/infinite or negative budgets.
pub fn validate_budget(budget: f64) -> Result<f64, CoreError> {
    if !budget.is_finite() {
        return Err(CoreError::Validation(format!(
            "budget must be a finite number, got {budget}"
        )));
    }
    if budget < 0.0 {
        return Err(CoreError::Validation(format!(
            "budget must not be negative, got {budget}"
        )));
    }
    Ok(budget)
}

/// Parse a typed budget, e.g. `"500"` or `"1250.50"`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the text is not a number or fails
/// [`validate_budget`].
pub fn parse_budget(raw: &str) -> Result<f64, CoreError> {
    let budget = parse_number("budget", raw)?;
    validate_budget(budget)
}

/// Parse a deadline in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the text is not a well-formed date.
pub fn parse_deadline(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT).map_err(|e| {
        CoreError::Validation(format!(
            "deadline '{trimmed}' is not a valid YYYY-MM-DD date: {e}"
        ))
    })
}

fn parse_number(field: &str, raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CoreError::Validation(format!("{field} '{trimmed}' is not a number")))
}
