use clap::{Args, Subcommand};

use crate::cli::subcommands::{CustomerCommands, HoursCommands, ProjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the database tables if they do not exist yet.
    Init,
    /// Customers.
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Hour ledger.
    Hours {
        #[command(subcommand)]
        action: HoursCommands,
    },
    /// Hours per project: total and most recent entry.
    Report(ReportArgs),
    /// Bar chart of hours per customer.
    Dashboard,
    /// Dump customers, projects and the raw hour ledger.
    Debug,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Write the report as CSV to a file, or `-` for stdout.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<String>,
}
