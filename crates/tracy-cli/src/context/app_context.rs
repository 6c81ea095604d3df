use tracy_config::TracyConfig;
use tracy_core::enums::ListScope;
use tracy_db::service::TracyService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TracyService,
    pub config: TracyConfig,
}

impl AppContext {
    /// Open the configured database for the duration of one command.
    pub async fn init(config: TracyConfig) -> anyhow::Result<Self> {
        let service =
            TracyService::new_local(&config.database.path, config.ledger.policy()).await?;
        if config.database.is_in_memory() {
            tracing::warn!("in-memory database: nothing is kept after this command");
        }
        tracing::debug!(path = %config.database.path, "tracy session started");
        Ok(Self { service, config })
    }

    /// Join policy for listings and reports.
    #[must_use]
    pub const fn scope(&self) -> ListScope {
        self.config.reports.scope()
    }

    /// End the session and release the database.
    pub fn close(self) {
        self.service.close();
    }
}
