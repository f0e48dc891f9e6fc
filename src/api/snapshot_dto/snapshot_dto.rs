use serde::Deserialize;

use crate::api::snapshot_dto::exploratory_dto::ExploratoryDto;
use crate::api::snapshot_dto::infrastructure_dto::{EdgeDto, SsnDto};

/// Point-in-time view of everything the deployment has provisioned.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSnapshotDto {
    pub ssn: Option<SsnDto>,
    #[serde(default)]
    pub edges: Vec<EdgeDto>,
    #[serde(default)]
    pub exploratories: Vec<ExploratoryDto>,
}
