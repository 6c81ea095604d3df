use serde::Serialize;
use tracy_core::entities::{Customer, HourEntry, ProjectListing};
use tracy_core::enums::ListScope;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_columns};

#[derive(Debug, Serialize)]
struct DebugDump {
    customers: Vec<Customer>,
    projects: Vec<ProjectListing>,
    hours: Vec<HourEntry>,
}

/// Handle `tracy debug`: every table, with nothing filtered out by joins.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dump = DebugDump {
        customers: ctx.service.list_customers().await?,
        projects: ctx.service.list_projects_in(ListScope::IncludeEmpty).await?,
        hours: ctx.service.list_hours().await?,
    };

    if flags.format != OutputFormat::Table {
        return output(&dump, flags.format);
    }

    let sections = [
        ("customers", render_columns(&dump.customers, &["id", "name"], flags.format)?),
        (
            "projects",
            render_columns(
                &dump.projects,
                &["id", "customer_name", "name", "deadline", "budget"],
                flags.format,
            )?,
        ),
        (
            "hours",
            render_columns(
                &dump.hours,
                &["id", "project_id", "hours", "logged_at"],
                flags.format,
            )?,
        ),
    ];
    for (title, table) in sections {
        println!("== {title} ==\n{table}\n");
    }
    Ok(())
}
