use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tracy` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tracy",
    version,
    about = "tracy - customers, projects and hours worked"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path` from config)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Keep projects without hours in reports and projects without a customer in listings
    #[arg(long, global = true)]
    pub include_empty: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            db: self.db.clone(),
            include_empty: self.include_empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{CustomerCommands, HoursCommands, ProjectCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["tracy", "report"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Report(_)));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "tracy",
            "--format",
            "json",
            "--db",
            "/tmp/ledger.db",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.db.as_deref(), Some("/tmp/ledger.db"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tracy", "report", "--format", "raw", "--include-empty"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.include_empty);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tracy", "--format", "xml", "report"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn customer_add_takes_name() {
        let cli = Cli::try_parse_from(["tracy", "customer", "add", "--name", "Acme"])
            .expect("cli should parse");
        match cli.command {
            Commands::Customer {
                action: CustomerCommands::Add { name },
            } => assert_eq!(name, "Acme"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn project_add_keeps_raw_form_values() {
        let cli = Cli::try_parse_from([
            "tracy",
            "project",
            "add",
            "--customer",
            "Acme",
            "--name",
            "Website",
            "--deadline",
            "2025-01-01",
            "--budget",
            "500",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Project {
                action:
                    ProjectCommands::Add {
                        customer,
                        name,
                        deadline,
                        budget,
                    },
            } => {
                assert_eq!(customer, "Acme");
                assert_eq!(name, "Website");
                assert_eq!(deadline, "2025-01-01");
                assert_eq!(budget, "500");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hours_log_requires_project() {
        assert!(Cli::try_parse_from(["tracy", "hours", "log", "--hours", "2"]).is_err());
        let cli = Cli::try_parse_from(["tracy", "hours", "log", "--project", "3", "--hours", "2.5"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Hours {
                action: HoursCommands::Log { project: 3, .. }
            }
        ));
    }

    #[test]
    fn report_csv_accepts_dash_for_stdout() {
        let cli = Cli::try_parse_from(["tracy", "report", "--csv", "-"]).expect("cli should parse");
        match cli.command {
            Commands::Report(args) => assert_eq!(args.csv.as_deref(), Some("-")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["tracy", "--db", "/tmp/demo.db", "--quiet", "debug"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/demo.db"));
        assert!(flags.quiet);
        assert!(!flags.include_empty);
    }
}
