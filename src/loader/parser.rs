use serde::de::DeserializeOwned;
use std::fs;

use crate::api::billing_feed_dto::BillingFeedDto;
use crate::api::report_config_dto::ReportConfigDto;
use crate::api::snapshot_dto::snapshot_dto::BillingSnapshotDto;
use crate::domain::billing::billing_feed::BillingFeed;
use crate::domain::billing::report::BillingSnapshot;
use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path).map_err(Error::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::DeserializationError)?;

    Ok(parsed_data)
}

pub fn load_snapshot(file_path: &str) -> Result<BillingSnapshot> {
    let dto: BillingSnapshotDto = parse_json_file(file_path)?;
    let snapshot = BillingSnapshot::try_from(dto)?;
    log::info!(
        "Loaded snapshot '{}': ssn={}, {} edge(s), {} exploratory instance(s)",
        file_path,
        snapshot.ssn.is_some(),
        snapshot.edges.len(),
        snapshot.exploratories.len()
    );
    Ok(snapshot)
}

pub fn load_billing_feed(file_path: &str) -> Result<BillingFeed> {
    let dto: BillingFeedDto = parse_json_file(file_path)?;
    let feed = BillingFeed::try_from(dto)?;
    log::info!("Loaded {} billing feed record(s) from '{}'", feed.records.len(), file_path);
    Ok(feed)
}

pub fn load_report_config(file_path: &str) -> Result<ReportConfigDto> {
    parse_json_file(file_path)
}
