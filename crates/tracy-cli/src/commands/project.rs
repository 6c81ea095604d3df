use anyhow::bail;
use tracy_core::entities::Customer;
use tracy_core::validate::{parse_budget, parse_deadline};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::{output, output_columns};

const LIST_COLUMNS: &[&str] = &["id", "customer_name", "name", "deadline", "budget"];

/// Handle `tracy project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Add {
            customer,
            name,
            deadline,
            budget,
        } => {
            let deadline = parse_deadline(deadline)?;
            let budget = parse_budget(budget)?;
            let customer_id = resolve_customer_id(ctx, customer).await?;
            let project = ctx
                .service
                .add_project(customer_id, name, deadline, budget)
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::List => {
            let projects = ctx.service.list_projects_in(ctx.scope()).await?;
            output_columns(&projects, LIST_COLUMNS, flags.format)
        }
    }
}

/// Accept an exact customer name or a numeric customer id.
///
/// Names win, so a customer literally named "2024" is found by name before
/// the text is tried as an id.
async fn resolve_customer_id(ctx: &AppContext, customer: &str) -> anyhow::Result<i64> {
    let customer = customer.trim();
    if let Some(Customer { id, .. }) = ctx.service.find_customer_by_name(customer).await? {
        return Ok(id);
    }
    if let Ok(id) = customer.parse::<i64>()
        && let Some(found) = ctx.service.get_customer(id).await?
    {
        return Ok(found.id);
    }
    bail!("customer '{customer}' not found")
}
