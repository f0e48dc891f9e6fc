use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExploratoryDto {
    pub exploratory_id: String,
    pub exploratory_name: String,
    pub user: String,
    pub project: String,
    pub shape: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub resources: Vec<ComputationalDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ComputationalDto {
    /// Absent until the cloud side has provisioned the cluster.
    pub computational_id: Option<String>,
    pub computational_name: String,
    pub status: Option<String>,
    pub image_name: String,
    pub dataengine_instance_count: Option<u32>,
    pub dataengine_shape: Option<String>,
    pub master_node_shape: Option<String>,
}
