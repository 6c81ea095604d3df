//! Shared helpers for command handler tests.

use tracy_config::TracyConfig;
use tracy_db::IN_MEMORY;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;

/// Context over a private in-memory database, with `config` tweaks applied.
pub async fn memory_context_with(mut config: TracyConfig) -> AppContext {
    config.database.path = IN_MEMORY.to_string();
    AppContext::init(config).await.unwrap()
}

pub async fn memory_context() -> AppContext {
    memory_context_with(TracyConfig::default()).await
}

/// Flags for handlers under test: JSON output, nothing extra.
pub fn json_flags() -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Json,
        quiet: true,
        db: None,
        include_empty: false,
    }
}
