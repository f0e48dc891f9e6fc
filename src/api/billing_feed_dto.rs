use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingFeedDto {
    pub records: Vec<BillingFeedRecordDto>,
}

/// One cost entry as exported by the cloud provider.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BillingFeedRecordDto {
    pub resource_id: String,
    pub product: Option<String>,
    pub cost: f64,
    pub currency: Option<String>,
}
