use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse<'a> {
    database: &'a str,
    tables: [&'static str; 3],
    status: &'static str,
}

/// Handle `tracy init`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.db().initialize().await?;
    output(
        &InitResponse {
            database: ctx.service.db().path(),
            tables: ["customers", "projects", "hours"],
            status: "initialized",
        },
        flags.format,
    )
}
