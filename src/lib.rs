use crate::config::ReportConfig;
use crate::domain::billing::line_formatter::LineFormatter;
use crate::domain::billing::report::BillingReport;
use crate::error::Result;
use crate::loader::parser::{load_billing_feed, load_snapshot};

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads a snapshot (and optionally a billing feed) from JSON files and
/// renders the delimited billing report.
pub fn generate_billing_report(config: &ReportConfig, snapshot_path: &str, feed_path: Option<&str>) -> Result<String> {
    let snapshot = load_snapshot(snapshot_path)?;
    let feed = feed_path.map(load_billing_feed).transpose()?;

    let report = BillingReport::generate(config, &snapshot, feed.as_ref());
    if !report.unmatched.is_empty() {
        log::warn!("Billed but unknown resources: {:?}", report.unmatched.iter().map(|id| id.as_str()).collect::<Vec<_>>());
    }

    let formatter = LineFormatter::new(config.line_format()?);
    let rendered = report.render(&formatter)?;
    log::info!("Rendered billing report with {} resource line(s).", report.lines.len());

    Ok(rendered)
}
