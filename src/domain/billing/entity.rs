use crate::api::snapshot_dto::exploratory_dto::{ComputationalDto, ExploratoryDto};
use crate::api::snapshot_dto::infrastructure_dto::{EdgeDto, SsnDto};
use crate::domain::billing::data_engine::DataEngineType;
use crate::domain::billing::utils::id::{ComputationalId, EndpointName, ExploratoryId, ProjectName, ServiceBaseName, UserName};
use crate::error::{Error, Result};

/// Per-project gateway node, shared by every user of the project.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeNode {
    pub project: ProjectName,
    pub service_base_name: ServiceBaseName,
    pub endpoint: EndpointName,
    pub status: Option<String>,
}

/// The deployment-wide self-service node.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedServiceNode {
    pub service_base_name: ServiceBaseName,
}

/// A user's analytics environment together with its attached clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploratoryInstance {
    pub id: ExploratoryId,
    pub name: String,
    pub user: UserName,
    pub project: ProjectName,
    pub shape: Option<String>,
    pub status: Option<String>,

    /// Attached clusters in the order the provisioning side lists them.
    pub resources: Vec<ComputationalResource>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputationalResource {
    /// `None` while the cluster is not provisioned yet; such clusters are not billed.
    pub id: Option<ComputationalId>,
    pub name: String,
    pub status: Option<String>,
    pub image_name: String,

    // Standalone engine sizing.
    pub instance_count: Option<u32>,
    pub instance_shape: Option<String>,

    // Cluster service sizing.
    pub master_shape: Option<String>,
}

impl ComputationalResource {
    pub fn engine_type(&self) -> Option<DataEngineType> {
        DataEngineType::from_docker_image_name(&self.image_name)
    }
}

fn required(field: &str, owner: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::ModelConstructionError(format!("{} of {} must not be empty", field, owner)));
    }
    Ok(value)
}

impl TryFrom<SsnDto> for SharedServiceNode {
    type Error = Error;

    fn try_from(dto: SsnDto) -> Result<Self> {
        let sbn = required("serviceBaseName", "ssn", dto.service_base_name)?;
        Ok(SharedServiceNode { service_base_name: ServiceBaseName::new(sbn) })
    }
}

impl TryFrom<EdgeDto> for EdgeNode {
    type Error = Error;

    fn try_from(dto: EdgeDto) -> Result<Self> {
        let project = required("project", "edge", dto.project)?;
        let owner = format!("edge of project '{}'", project);

        Ok(EdgeNode {
            service_base_name: ServiceBaseName::new(required("serviceBaseName", &owner, dto.service_base_name)?),
            endpoint: EndpointName::new(required("endpoint", &owner, dto.endpoint)?),
            project: ProjectName::new(project),
            status: dto.status,
        })
    }
}

impl TryFrom<ComputationalDto> for ComputationalResource {
    type Error = Error;

    fn try_from(dto: ComputationalDto) -> Result<Self> {
        // An empty id is treated like a missing one: nothing exists on the cloud yet.
        let id = dto.computational_id.filter(|id| !id.trim().is_empty()).map(ComputationalId::new);

        Ok(ComputationalResource {
            id,
            image_name: required("imageName", &format!("computational '{}'", dto.computational_name), dto.image_name)?,
            name: dto.computational_name,
            status: dto.status,
            instance_count: dto.dataengine_instance_count,
            instance_shape: dto.dataengine_shape,
            master_shape: dto.master_node_shape,
        })
    }
}

impl TryFrom<ExploratoryDto> for ExploratoryInstance {
    type Error = Error;

    fn try_from(dto: ExploratoryDto) -> Result<Self> {
        let id = required("exploratoryId", &format!("exploratory '{}'", dto.exploratory_name), dto.exploratory_id)?;
        let owner = format!("exploratory '{}'", id);

        let resources = dto.resources.into_iter().map(ComputationalResource::try_from).collect::<Result<Vec<_>>>()?;

        Ok(ExploratoryInstance {
            user: UserName::new(required("user", &owner, dto.user)?),
            project: ProjectName::new(required("project", &owner, dto.project)?),
            id: ExploratoryId::new(id),
            name: dto.exploratory_name,
            shape: dto.shape,
            status: dto.status,
            resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computational_dto(id: Option<&str>) -> ComputationalDto {
        ComputationalDto {
            computational_id: id.map(str::to_string),
            computational_name: "spark".to_string(),
            status: Some("running".to_string()),
            image_name: "docker.dlab-dataengine".to_string(),
            dataengine_instance_count: Some(2),
            dataengine_shape: Some("n1-standard-2".to_string()),
            master_node_shape: None,
        }
    }

    #[test]
    fn blank_computational_id_means_not_provisioned() {
        let resource = ComputationalResource::try_from(computational_dto(Some("  "))).unwrap();
        assert_eq!(resource.id, None);

        let resource = ComputationalResource::try_from(computational_dto(Some("comp-1"))).unwrap();
        assert_eq!(resource.id, Some(ComputationalId::new("comp-1")));
        assert_eq!(resource.engine_type(), Some(DataEngineType::SparkStandalone));
    }

    #[test]
    fn edge_without_endpoint_is_rejected() {
        let dto = EdgeDto {
            project: "Proj1".to_string(),
            service_base_name: "dlab-test".to_string(),
            endpoint: "".to_string(),
            status: None,
        };

        match EdgeNode::try_from(dto) {
            Err(Error::ModelConstructionError(msg)) => assert!(msg.contains("endpoint"), "{}", msg),
            other => panic!("expected construction error, got {:?}", other),
        }
    }
}
