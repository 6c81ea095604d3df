use clap::Subcommand;

/// Hour ledger commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HoursCommands {
    /// Log hours worked against a project.
    Log {
        /// Project id.
        #[arg(long)]
        project: i64,
        #[arg(long, allow_hyphen_values = true)]
        hours: String,
    },
    /// List every ledger entry.
    List,
}
