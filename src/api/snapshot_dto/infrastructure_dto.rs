use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SsnDto {
    pub service_base_name: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDto {
    pub project: String,
    pub service_base_name: String,
    pub endpoint: String,
    pub status: Option<String>,
}
