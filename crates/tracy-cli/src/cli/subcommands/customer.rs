use clap::Subcommand;

/// Customer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CustomerCommands {
    /// Add a customer. Names are unique.
    Add {
        #[arg(long)]
        name: String,
    },
    /// List customers.
    List,
}
