use std::collections::{HashMap, HashSet};

use crate::api::billing_feed_dto::{BillingFeedDto, BillingFeedRecordDto};
use crate::domain::billing::report_line::BillingReportLine;
use crate::domain::billing::utils::id::ResourceId;
use crate::error::{Error, Result};

/// One cost entry of the provider's bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingFeedRecord {
    pub resource_id: ResourceId,
    pub product: Option<String>,
    pub cost: f64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingFeed {
    pub records: Vec<BillingFeedRecord>,
}

impl TryFrom<BillingFeedRecordDto> for BillingFeedRecord {
    type Error = Error;

    fn try_from(dto: BillingFeedRecordDto) -> Result<Self> {
        if dto.resource_id.trim().is_empty() {
            return Err(Error::ModelConstructionError("billing feed record without resourceId".to_string()));
        }
        if !dto.cost.is_finite() {
            return Err(Error::ModelConstructionError(format!("billing feed record '{}' has a non-finite cost", dto.resource_id)));
        }

        Ok(BillingFeedRecord {
            resource_id: ResourceId::new(dto.resource_id),
            product: dto.product.filter(|p| !p.is_empty()),
            cost: dto.cost,
            currency: dto.currency.filter(|c| !c.is_empty()),
        })
    }
}

impl TryFrom<BillingFeedDto> for BillingFeed {
    type Error = Error;

    fn try_from(dto: BillingFeedDto) -> Result<Self> {
        let records = dto.records.into_iter().map(BillingFeedRecord::try_from).collect::<Result<Vec<_>>>()?;
        Ok(BillingFeed { records })
    }
}

impl BillingFeed {
    pub fn new(records: Vec<BillingFeedRecord>) -> Self {
        BillingFeed { records }
    }

    /// Keeps only the records of the given resources, e.g. an id set from
    /// [`crate::domain::billing::reconciliation`].
    pub fn retain_owned(&mut self, ids: &[ResourceId]) {
        let owned: HashSet<&ResourceId> = ids.iter().collect();
        self.records.retain(|record| owned.contains(&record.resource_id));
    }
}

/// Report lines with feed costs applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledReport {
    pub lines: Vec<BillingReportLine>,
    /// Sum over all matched costs; `None` if nothing matched.
    pub total: Option<f64>,
    pub currency: Option<String>,
    /// Billed resources the snapshot knows nothing about, in feed order.
    pub unmatched: Vec<ResourceId>,
    /// Report lines without any feed record, in report order.
    pub missing: Vec<ResourceId>,
}

#[derive(Default)]
struct FeedEntry {
    cost: f64,
    product: Option<String>,
}

/// Attaches feed costs and products to report lines, keeping the line order.
pub fn reconcile(lines: Vec<BillingReportLine>, feed: &BillingFeed) -> ReconciledReport {
    let mut entries: HashMap<&ResourceId, FeedEntry> = HashMap::new();
    let mut feed_order: Vec<&ResourceId> = Vec::new();
    let mut currency: Option<String> = None;

    for record in &feed.records {
        let entry = entries.entry(&record.resource_id).or_insert_with(|| {
            feed_order.push(&record.resource_id);
            FeedEntry::default()
        });
        entry.cost += record.cost;
        if entry.product.is_none() {
            entry.product = record.product.clone();
        }

        if let Some(c) = &record.currency {
            match currency.as_deref() {
                None => currency = Some(c.clone()),
                Some(known) if known != c.as_str() => {
                    log::warn!("Billing feed record '{}' uses currency {} instead of {}, ignoring the difference", record.resource_id, c, known);
                }
                Some(_) => {}
            }
        }
    }

    let mut total: Option<f64> = None;
    let mut missing = Vec::new();
    let mut billed: HashSet<ResourceId> = HashSet::new();

    let lines: Vec<BillingReportLine> = lines
        .into_iter()
        .map(|mut line| {
            match entries.get(&line.resource_id) {
                Some(entry) => {
                    line.cost = Some(entry.cost);
                    line.product = entry.product.clone();
                    // A resource listed twice is still billed once.
                    if billed.insert(line.resource_id.clone()) {
                        *total.get_or_insert(0.0) += entry.cost;
                    }
                }
                None => missing.push(line.resource_id.clone()),
            }
            line
        })
        .collect();

    let unmatched: Vec<ResourceId> = feed_order.into_iter().filter(|id| !billed.contains(*id)).cloned().collect();

    if !unmatched.is_empty() {
        log::warn!("{} billed resource(s) are not part of the snapshot", unmatched.len());
    }
    log::debug!("Reconciled {} line(s), {} without feed data", lines.len(), missing.len());

    ReconciledReport { lines, total, currency, unmatched, missing }
}
