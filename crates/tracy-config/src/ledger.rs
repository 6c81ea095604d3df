//! Hour-ledger and report policies.

use serde::{Deserialize, Serialize};
use tracy_core::enums::ListScope;
use tracy_core::validate::LedgerPolicy;

const fn default_allow_zero_hours() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// Accept zero-hour entries ("no work done yet").
    #[serde(default = "default_allow_zero_hours")]
    pub allow_zero_hours: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            allow_zero_hours: default_allow_zero_hours(),
        }
    }
}

impl LedgerConfig {
    #[must_use]
    pub const fn policy(&self) -> LedgerPolicy {
        LedgerPolicy {
            allow_zero_hours: self.allow_zero_hours,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportsConfig {
    /// Keep projects without hours in reports and projects with a missing
    /// customer in listings.
    #[serde(default)]
    pub include_empty: bool,
}

impl ReportsConfig {
    #[must_use]
    pub const fn scope(&self) -> ListScope {
        ListScope::from_include_empty(self.include_empty)
    }
}
