use std::fmt::Write as _;

use itertools::Itertools;

use crate::models::{IndicatorSummary, IndicatorSummaryRow, SkipReason};
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{format_optional, section_heading};

/// Summary table grouped under category headings. Unknown verdicts and absent history
/// slots are blank cells.
pub fn render_summary(summary: &IndicatorSummary) -> String {
    let mut out = String::new();
    if summary.rows.is_empty() {
        out.push_str("No tracked indicators had valid observations.\n");
    }

    for (category, rows) in &summary.rows.iter().chunk_by(|row| row.category) {
        out.push_str(&section_heading(&category.to_string()));
        out.push_str(&header_line(summary.rows[0].history.len()));
        for row in rows {
            out.push_str(&render_row(row));
        }
        out.push('\n');
    }

    if !summary.skipped.is_empty() {
        let _ = writeln!(
            out,
            "{} observations skipped ({} untracked indicator, {} unreadable date)",
            summary.skipped.len(),
            summary.skipped_count(SkipReason::UnknownIndicator),
            summary.skipped_count(SkipReason::UnparsableDate)
        );
    }
    out
}

fn header_line(history_depth: usize) -> String {
    let w = UI_CONFIG.value_column_width;
    let mut line = format!(
        "{:<name$} {:<14} {:<8} {:<8} {:>w$}",
        "Indicator",
        "Date",
        "Period",
        "Verdict",
        "Forecast",
        name = UI_CONFIG.indicator_column_width,
    );
    for slot in 0..history_depth {
        let label = if slot == 0 {
            "Actual".to_string()
        } else {
            format!("T-{}", slot)
        };
        let _ = write!(line, " {:>w$}", label);
    }
    line.push('\n');
    line
}

pub fn render_row(row: &IndicatorSummaryRow) -> String {
    let w = UI_CONFIG.value_column_width;
    let mut line = format!(
        "{:<name$} {:<14} {:<8} {:<8} {:>w$}",
        row.indicator,
        row.report_date_label,
        row.period_label.as_deref().unwrap_or_default(),
        row.verdict.to_string(),
        row.forecast_raw.as_deref().unwrap_or_default(),
        name = UI_CONFIG.indicator_column_width,
    );
    for slot in &row.history {
        let _ = write!(line, " {:>w$}", format_optional(*slot));
    }
    line.trim_end().to_string() + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::indicator_summary::build_summary;
    use crate::config::IndicatorTable;
    use crate::domain::IndicatorObservation;

    fn observations() -> Vec<IndicatorObservation> {
        vec![
            IndicatorObservation::new(
                "Unemployment Rate",
                "Mar 08, 2024 (Feb)",
                Some("3.9%"),
                Some("3.7%"),
                Some("3.7%"),
            ),
            IndicatorObservation::new("CPI (YoY)", "Mar 12, 2024 (Feb)", Some("3.2%"), None, None),
            IndicatorObservation::new("Nonfarm Payrolls", "garbage", Some("1"), None, None),
            IndicatorObservation::new("Shipping Index", "Mar 12, 2024", Some("1"), None, None),
        ]
    }

    #[test]
    fn test_rows_render_with_blank_unknown_cells() {
        let summary = build_summary(&observations(), &IndicatorTable::us_macro());
        let cpi = render_row(summary.row("CPI (YoY)").unwrap());
        assert!(cpi.starts_with("CPI (YoY)"));
        assert!(cpi.contains("Mar 12, 2024"));
        assert!(!cpi.contains("Better") && !cpi.contains("Worse") && !cpi.contains("Same"));
        // Only the latest actual is present, the rest of the history is blank
        assert!(cpi.trim_end().ends_with("3.20"));

        let unemployment = render_row(summary.row("Unemployment Rate").unwrap());
        assert!(unemployment.contains("Worse"));
        assert!(unemployment.contains("3.7%"));
        assert!(unemployment.contains("Feb"));
    }

    #[test]
    fn test_summary_lists_categories_and_skips() {
        let summary = build_summary(&observations(), &IndicatorTable::us_macro());
        let text = render_summary(&summary);
        assert!(text.contains("EMPLOYMENT:"));
        assert!(text.contains("INFLATION:"));
        assert!(!text.contains("Shipping Index"));
        assert!(!text.contains("Nonfarm Payrolls"));
        assert!(text.contains("2 observations skipped (1 untracked indicator, 1 unreadable date)"));
    }

    #[test]
    fn test_empty_summary() {
        let text = render_summary(&IndicatorSummary::default());
        assert!(text.starts_with("No tracked indicators"));
    }
}
