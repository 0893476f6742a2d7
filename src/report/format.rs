//! Plain-text report rendering.
//!
//! Formatting lives here only, so the statistics code stays free of layout
//! concerns and output changes stay localized.

use chrono::NaiveDate;

use crate::domain::{DATE_FORMAT, SummaryStats};
use crate::report::unit::BitRateUnit;

pub const REPORT_TITLE: &str = "SamKnows Metric Analyser v1.0.0";

/// Everything the report template needs, already computed.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    /// Earliest and latest measurement date (`None` for an empty dataset).
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub stats: &'a SummaryStats,
    pub unit: BitRateUnit,
    /// Compressed under-performing periods; the block is omitted when empty.
    pub under_performing: &'a [String],
}

/// Render the fixed report template.
pub fn render_report(input: &ReportInput<'_>) -> String {
    let (from, to) = match input.period {
        Some((from, to)) => (fmt_date(from), fmt_date(to)),
        None => (String::new(), String::new()),
    };
    let unit = input.unit;
    let stats = input.stats;

    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(REPORT_TITLE.len()));
    out.push_str("\n\n");

    out.push_str("Period checked:\n\n");
    out.push_str(&format!("    From: {from}\n"));
    out.push_str(&format!("    To:   {to}\n\n"));

    out.push_str("Statistics:\n\n");
    out.push_str(&format!("    Unit: {}\n\n", unit.label()));
    out.push_str(&format!("    Average: {:.2}\n", unit.scale(stats.mean)));
    out.push_str(&format!("    Min: {:.2}\n", unit.scale(stats.min)));
    out.push_str(&format!("    Max: {:.2}\n", unit.scale(stats.max)));
    out.push_str(&format!("    Median: {:.2}\n", unit.scale(stats.median)));

    if !input.under_performing.is_empty() {
        out.push_str("\nUnder-performing periods:\n\n");
        out.push_str(&format!("    * The period {}\n", input.under_performing.join(", ")));
        out.push_str("      was under-performing.\n");
    }

    out
}

fn fmt_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
