use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Add a project for an existing customer.
    Add {
        /// Customer id or exact name.
        #[arg(long)]
        customer: String,
        #[arg(long)]
        name: String,
        /// Deadline as YYYY-MM-DD.
        #[arg(long)]
        deadline: String,
        #[arg(long)]
        budget: String,
    },
    /// List projects with their customer.
    List,
}
