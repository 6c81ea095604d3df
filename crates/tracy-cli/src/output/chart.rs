//! Horizontal bar chart for the dashboard.

use tracy_core::entities::CustomerHours;

const BAR: char = '█';

/// Render one bar per customer, scaled so the largest total spans `bar_width` cells.
#[must_use]
pub fn render_bar_chart(totals: &[CustomerHours], bar_width: usize) -> String {
    if totals.is_empty() {
        return String::from("(no hours logged)");
    }

    let label_width = totals
        .iter()
        .map(|entry| entry.customer_name.chars().count())
        .max()
        .unwrap_or(0);
    let max_hours = totals
        .iter()
        .map(|entry| entry.total_hours)
        .fold(0.0_f64, f64::max);

    totals
        .iter()
        .map(|entry| {
            let label = format!("{:<label_width$}", entry.customer_name);
            let len = bar_len(entry.total_hours, max_hours, bar_width);
            if len == 0 {
                format!("{label} | {:.2}", entry.total_hours)
            } else {
                let bar = BAR.to_string().repeat(len);
                format!("{label} | {bar} {:.2}", entry.total_hours)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_len(hours: f64, max_hours: f64, bar_width: usize) -> usize {
    if max_hours <= 0.0 || hours <= 0.0 {
        return 0;
    }
    let scaled = (hours / max_hours * bar_width as f64).round() as usize;
    scaled.clamp(1, bar_width)
}
