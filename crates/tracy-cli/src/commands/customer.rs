use crate::cli::GlobalFlags;
use crate::cli::subcommands::CustomerCommands;
use crate::context::AppContext;
use crate::output::{output, output_columns};

const LIST_COLUMNS: &[&str] = &["id", "name"];

/// Handle `tracy customer`.
pub async fn handle(
    action: &CustomerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CustomerCommands::Add { name } => {
            let customer = ctx.service.add_customer(name).await?;
            output(&customer, flags.format)
        }
        CustomerCommands::List => {
            let customers = ctx.service.list_customers().await?;
            output_columns(&customers, LIST_COLUMNS, flags.format)
        }
    }
}
