//! Integration tests for TOML + environment configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use tracy_config::{ConfigError, TracyConfig};
use tracy_core::enums::ListScope;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/tracy/ledger.db"

[ledger]
allow_zero_hours = false

[reports]
include_empty = true
"#,
        )?;

        let config: TracyConfig = Figment::from(Serialized::defaults(TracyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/tracy/ledger.db");
        assert!(!config.ledger.policy().allow_zero_hours);
        assert_eq!(config.reports.scope(), ListScope::IncludeEmpty);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[reports]
include_empty = true
"#,
        )?;

        let config: TracyConfig = Figment::from(Serialized::defaults(TracyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "tracyos_data.db");
        assert!(config.ledger.allow_zero_hours);
        assert!(config.reports.include_empty);
        Ok(())
    });
}

#[test]
fn local_tracy_toml_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "tracy.toml",
            r#"
[database]
path = "local.db"
"#,
        )?;

        let config = TracyConfig::load().expect("config loads");
        assert_eq!(config.database.path, "local.db");
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "tracy.toml",
            r#"
[database]
path = "local.db"
"#,
        )?;
        jail.set_env("TRACY_DATABASE__PATH", "from-env.db");
        jail.set_env("TRACY_LEDGER__ALLOW_ZERO_HOURS", "false");

        let config = TracyConfig::load().expect("config loads");
        assert_eq!(config.database.path, "from-env.db");
        assert!(!config.ledger.allow_zero_hours);
        Ok(())
    });
}

#[test]
fn empty_database_path_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "tracy.toml",
            r#"
[database]
path = ""
"#,
        )?;

        let result = TracyConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_surfaces_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("tracy.toml", "[database\npath = ")?;

        let result = TracyConfig::load();
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
