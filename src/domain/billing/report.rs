use std::collections::HashSet;

use chrono::NaiveDate;

use crate::api::snapshot_dto::snapshot_dto::BillingSnapshotDto;
use crate::config::ReportConfig;
use crate::domain::billing::billing_feed::{BillingFeed, reconcile};
use crate::domain::billing::csv_format::LineFormat;
use crate::domain::billing::entity::{EdgeNode, ExploratoryInstance, SharedServiceNode};
use crate::domain::billing::line_formatter::LineFormatter;
use crate::domain::billing::report_line::BillingReportLine;
use crate::domain::billing::report_line_builder::{edge_lines, exploratory_lines, shared_service_node_lines};
use crate::domain::billing::utils::id::{ResourceId, ServiceBaseName};
use crate::error::{Error, Result};

/// Everything provisioned at one point in time. Treated as immutable while a
/// report is built from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingSnapshot {
    pub ssn: Option<SharedServiceNode>,
    pub edges: Vec<EdgeNode>,
    pub exploratories: Vec<ExploratoryInstance>,
}

impl TryFrom<BillingSnapshotDto> for BillingSnapshot {
    type Error = Error;

    fn try_from(dto: BillingSnapshotDto) -> Result<Self> {
        Ok(BillingSnapshot {
            ssn: dto.ssn.map(SharedServiceNode::try_from).transpose()?,
            edges: dto.edges.into_iter().map(EdgeNode::try_from).collect::<Result<Vec<_>>>()?,
            exploratories: dto.exploratories.into_iter().map(ExploratoryInstance::try_from).collect::<Result<Vec<_>>>()?,
        })
    }
}

impl BillingSnapshot {
    /// SSN lines, then every edge, then every exploratory, each in snapshot order.
    pub fn report_lines(&self) -> Vec<BillingReportLine> {
        let mut lines = Vec::new();

        if let Some(ssn) = &self.ssn {
            lines.extend(shared_service_node_lines(ssn));
        }
        for edge in &self.edges {
            lines.extend(edge_lines(edge));
        }
        for exploratory in &self.exploratories {
            lines.extend(exploratory_lines(exploratory));
        }

        warn_on_duplicates(&lines);
        lines
    }
}

fn warn_on_duplicates(lines: &[BillingReportLine]) {
    let mut seen: HashSet<&ResourceId> = HashSet::with_capacity(lines.len());
    for line in lines {
        if !seen.insert(&line.resource_id) {
            log::warn!("Resource id '{}' ({}) appears more than once in the report", line.resource_id, line.resource_type);
        }
    }
}

/// A fully assembled billing report, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingReport {
    pub service_base_name: ServiceBaseName,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub lines: Vec<BillingReportLine>,
    pub total: Option<f64>,
    pub currency: Option<String>,
    pub unmatched: Vec<ResourceId>,
    pub missing: Vec<ResourceId>,
}

impl BillingReport {
    /// Expands the snapshot and, when a feed is given, attaches its costs.
    pub fn generate(config: &ReportConfig, snapshot: &BillingSnapshot, feed: Option<&BillingFeed>) -> Self {
        let lines = snapshot.report_lines();
        log::info!("Built {} report line(s) for '{}'", lines.len(), config.service_base_name);

        let (lines, total, currency, unmatched, missing) = match feed {
            Some(feed) => {
                let reconciled = reconcile(lines, feed);
                (reconciled.lines, reconciled.total, reconciled.currency, reconciled.unmatched, reconciled.missing)
            }
            None => (lines, None, None, Vec::new(), Vec::new()),
        };

        BillingReport {
            service_base_name: config.service_base_name.clone(),
            from: config.from,
            to: config.to,
            lines,
            total,
            currency: currency.or_else(|| config.currency.clone()),
            unmatched,
            missing,
        }
    }

    /// Summary line, header, one line per resource, totals line.
    pub fn render<F: LineFormat>(&self, formatter: &LineFormatter<F>) -> Result<String> {
        let mut out = formatter.first_line(&self.service_base_name, self.from, self.to)?;
        out.push_str(&formatter.header()?);
        for line in &self.lines {
            out.push_str(&formatter.print_line(line)?);
        }
        out.push_str(&formatter.total_line(self.total, self.currency.as_deref())?);
        Ok(out)
    }
}
