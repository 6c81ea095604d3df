use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::chart::render_bar_chart;
use crate::output::output;
use crate::ui;

const DEFAULT_BAR_WIDTH: usize = 40;

/// Handle `tracy dashboard`: total hours per customer.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let totals = ctx.service.customer_hours(ctx.scope()).await?;

    if flags.format != OutputFormat::Table {
        return output(&totals, flags.format);
    }

    println!("{}", render_bar_chart(&totals, bar_width(ui::prefs().term_width)));
    Ok(())
}

/// Leave room for the label column and the value after the bar.
fn bar_width(term_width: Option<usize>) -> usize {
    term_width.map_or(DEFAULT_BAR_WIDTH, |width| {
        (width / 2).clamp(10, DEFAULT_BAR_WIDTH)
    })
}
