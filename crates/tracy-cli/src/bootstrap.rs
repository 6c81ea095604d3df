use anyhow::Context;
use tracy_config::TracyConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TracyConfig> {
    load_dotenv()?;
    let config = TracyConfig::load().context("failed to load tracy configuration")?;
    let config = apply_flag_overrides(config, flags);
    config.validate()?;
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_flag_overrides(mut config: TracyConfig, flags: &GlobalFlags) -> TracyConfig {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    if flags.include_empty {
        config.reports.include_empty = true;
    }
    config
}
