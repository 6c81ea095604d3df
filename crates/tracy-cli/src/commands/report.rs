use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracy_core::export::{export_reports_csv, write_reports_csv};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::{output, output_columns};

const REPORT_COLUMNS: &[&str] = &["customer_name", "project_name", "total_hours", "last_logged"];

/// `--csv -` writes to stdout instead of a file.
const STDOUT_TARGET: &str = "-";

#[derive(Debug, Serialize)]
struct ExportResponse<'a> {
    path: &'a str,
    rows: usize,
}

/// Handle `tracy report`.
pub async fn handle(
    args: &ReportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reports = ctx.service.fetch_reports_in(ctx.scope()).await?;

    match args.csv.as_deref() {
        None => output_columns(&reports, REPORT_COLUMNS, flags.format),
        Some(STDOUT_TARGET) => {
            write_reports_csv(&reports, std::io::stdout().lock())
                .context("failed to write CSV to stdout")?;
            Ok(())
        }
        Some(path) => {
            let rows = export_reports_csv(&reports, Path::new(path))
                .with_context(|| format!("failed to export report to {path}"))?;
            tracing::info!(path, rows, "report exported");
            if flags.quiet {
                return Ok(());
            }
            output(&ExportResponse { path, rows }, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::root_commands::ReportArgs;
    use crate::test_support::{json_flags, memory_context};

    #[tokio::test]
    async fn csv_flag_writes_report_file() {
        let ctx = memory_context().await;
        let acme = ctx.service.add_customer("Acme").await.unwrap();
        let deadline = tracy_core::validate::parse_deadline("2025-01-01").unwrap();
        let site = ctx
            .service
            .add_project(acme.id, "Website", deadline, 500.0)
            .await
            .unwrap();
        ctx.service.log_hours(site.id, 3.5).await.unwrap();

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        let args = ReportArgs {
            csv: Some(path.to_string_lossy().into_owned()),
        };
        handle(&args, &ctx, &json_flags()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "customer,project,total_hours,last_logged");
        assert!(lines[1].starts_with("Acme,Website,3.5,"));
        assert_eq!(lines.len(), 2);
    }
}
