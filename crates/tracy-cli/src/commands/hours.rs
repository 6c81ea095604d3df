use tracy_core::validate::parse_hours;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HoursCommands;
use crate::context::AppContext;
use crate::output::{output, output_columns};

const LIST_COLUMNS: &[&str] = &["id", "project_id", "hours", "logged_at"];

/// Handle `tracy hours`.
pub async fn handle(
    action: &HoursCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HoursCommands::Log { project, hours } => {
            let hours = parse_hours(hours, ctx.service.policy())?;
            let entry = ctx.service.log_hours(*project, hours).await?;
            output(&entry, flags.format)
        }
        HoursCommands::List => {
            let entries = ctx.service.list_hours().await?;
            output_columns(&entries, LIST_COLUMNS, flags.format)
        }
    }
}
