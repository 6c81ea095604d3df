use tracy_config::{DEFAULT_DATABASE_PATH, TracyConfig};

/// Env keys that look like config overrides but use a single underscore,
/// which figment does not split into sections.
const SINGLE_UNDERSCORE_KEYS: &[(&str, &str)] = &[
    ("TRACY_DATABASE_PATH", "TRACY_DATABASE__PATH"),
    ("TRACY_LEDGER_ALLOW_ZERO_HOURS", "TRACY_LEDGER__ALLOW_ZERO_HOURS"),
    ("TRACY_REPORTS_INCLUDE_EMPTY", "TRACY_REPORTS__INCLUDE_EMPTY"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TracyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TracyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();
    for (typo, expected) in SINGLE_UNDERSCORE_KEYS {
        if env_keys.iter().any(|key| key == typo) {
            warnings.push(format!(
                "{typo} is ignored. Use double underscores (example: {expected})."
            ));
        }
    }

    if config.database.path == DEFAULT_DATABASE_PATH
        && env_keys.iter().any(|key| key == "TRACY_DATABASE_PATH")
    {
        warnings.push(format!(
            "database path is still the default '{DEFAULT_DATABASE_PATH}'."
        ));
    }

    warnings
}
