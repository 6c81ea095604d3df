//! Enums shared between the data layer and the presentation layer.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ListScope
// ---------------------------------------------------------------------------

/// Join policy for project listings and reports.
///
/// `ActiveOnly` uses inner joins throughout. `IncludeEmpty` turns the outer
/// join into a left join: reports keep projects without logged hours, and
/// project listings keep projects whose customer row is missing. Customers
/// without projects never appear in either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListScope {
    #[default]
    ActiveOnly,
    IncludeEmpty,
}

impl ListScope {
    /// Build a scope from an "include empty records" switch.
    #[must_use]
    pub const fn from_include_empty(include_empty: bool) -> Self {
        if include_empty {
            Self::IncludeEmpty
        } else {
            Self::ActiveOnly
        }
    }

    /// SQL join keyword for this scope.
    #[must_use]
    pub const fn join_keyword(self) -> &'static str {
        match self {
            Self::ActiveOnly => "JOIN",
            Self::IncludeEmpty => "LEFT JOIN",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActiveOnly => "active_only",
            Self::IncludeEmpty => "include_empty",
        }
    }
}

impl fmt::Display for ListScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
