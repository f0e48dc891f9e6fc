//! Expands logical entities into the ordered report lines of the physical
//! resources they own.
//!
//! Order is part of the contract: reconciliation diffs and tests depend on it,
//! so nothing here sorts or deduplicates.

use crate::domain::billing::data_engine::DataEngineType;
use crate::domain::billing::entity::{ComputationalResource, EdgeNode, ExploratoryInstance, SharedServiceNode};
use crate::domain::billing::identity;
use crate::domain::billing::report_line::{BillingReportLine, SHARED_RESOURCE};
use crate::domain::billing::resource_type::BillingResourceType;
use crate::domain::billing::status::InstanceStatus;
use crate::domain::billing::utils::id::ServiceBaseName;

const VOLUME_PRIMARY: &str = "Volume primary";
const VOLUME_SECONDARY: &str = "Volume secondary";

// Rendered where a sizing value is missing inside a shape template.
const MISSING_SHAPE_VALUE: &str = "null";

/// `[edge node, edge volume, edge bucket]`.
pub fn edge_lines(edge: &EdgeNode) -> Vec<BillingReportLine> {
    let sbn = &edge.service_base_name;
    let project = edge.project.as_str();
    let status = edge.status.as_deref().and_then(InstanceStatus::of);

    vec![
        BillingReportLine::new(identity::edge_id(sbn, &edge.project, &edge.endpoint), "EDGE node", SHARED_RESOURCE, project, BillingResourceType::Edge)
            .with_status(status),
        BillingReportLine::new(
            identity::edge_volume_id(sbn, &edge.project, &edge.endpoint),
            "EDGE volume",
            SHARED_RESOURCE,
            project,
            BillingResourceType::Volume,
        ),
        BillingReportLine::new(identity::edge_bucket_id(sbn, &edge.project), "EDGE bucket", SHARED_RESOURCE, project, BillingResourceType::EdgeBucket),
    ]
}

/// `[ssn, ssn volume, ssn bucket, collaboration bucket]`, all shared.
pub fn ssn_lines(sbn: &ServiceBaseName) -> Vec<BillingReportLine> {
    vec![
        BillingReportLine::shared(identity::ssn_id(sbn), "SSN", BillingResourceType::Ssn),
        BillingReportLine::shared(identity::ssn_volume_id(sbn), "SSN Volume", BillingResourceType::Volume),
        BillingReportLine::shared(identity::ssn_bucket_id(sbn), "SSN bucket", BillingResourceType::SsnBucket),
        BillingReportLine::shared(identity::shared_bucket_id(sbn), "Collaboration bucket", BillingResourceType::SharedBucket),
    ]
}

pub fn shared_service_node_lines(ssn: &SharedServiceNode) -> Vec<BillingReportLine> {
    ssn_lines(&ssn.service_base_name)
}

/// Lines of every provisioned cluster (instance then volume), followed by
/// the exploratory instance and its primary and secondary volumes.
///
/// Clusters without an id are skipped, so `k` provisioned clusters give
/// `2k + 3` lines.
pub fn exploratory_lines(exploratory: &ExploratoryInstance) -> Vec<BillingReportLine> {
    let user = exploratory.user.as_str();
    let project = exploratory.project.as_str();

    let mut lines = Vec::with_capacity(exploratory.resources.len() * 2 + 3);

    for resource in &exploratory.resources {
        let Some(computational_id) = &resource.id else {
            log::debug!("Skipping computational '{}' of '{}': not provisioned", resource.name, exploratory.id);
            continue;
        };

        lines.push(
            BillingReportLine::new(identity::computational_id(computational_id), resource.name.as_str(), user, project, BillingResourceType::Computational)
                .with_status(resource.status.as_deref().and_then(InstanceStatus::of))
                .with_shape(Some(computational_shape(resource))),
        );
        lines.push(BillingReportLine::new(
            identity::computational_volume_id(computational_id),
            format!("{}:{}", resource.name, VOLUME_PRIMARY),
            user,
            project,
            BillingResourceType::Volume,
        ));
    }

    lines.push(
        BillingReportLine::new(identity::exploratory_id(&exploratory.id), exploratory.name.as_str(), user, project, BillingResourceType::Exploratory)
            .with_status(exploratory.status.as_deref().and_then(InstanceStatus::of))
            .with_shape(exploratory.shape.clone()),
    );
    lines.push(BillingReportLine::new(
        identity::exploratory_primary_volume_id(&exploratory.id),
        VOLUME_PRIMARY,
        user,
        project,
        BillingResourceType::Volume,
    ));
    lines.push(BillingReportLine::new(
        identity::exploratory_secondary_volume_id(&exploratory.id),
        VOLUME_SECONDARY,
        user,
        project,
        BillingResourceType::Volume,
    ));

    lines
}

/// Standalone engines: `"{count} x {shape}"`.
/// Cluster services: `"Master: {master}\nSlave:  {count} x {shape}"`.
///
/// The slave sizing of cluster services is not part of the snapshot, so that
/// half always renders as `null x null`.
pub fn computational_shape(resource: &ComputationalResource) -> String {
    match resource.engine_type() {
        Some(DataEngineType::SparkStandalone) => {
            let count = resource.instance_count.map(|c| c.to_string());
            format!("{} x {}", or_missing(count.as_deref()), or_missing(resource.instance_shape.as_deref()))
        }
        Some(DataEngineType::CloudService) | None => {
            format!("Master: {}\nSlave:  {} x {}", or_missing(resource.master_shape.as_deref()), MISSING_SHAPE_VALUE, MISSING_SHAPE_VALUE)
        }
    }
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_SHAPE_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::utils::id::{ComputationalId, EndpointName, ExploratoryId, ProjectName, UserName};

    fn edge(status: Option<&str>) -> EdgeNode {
        EdgeNode {
            project: ProjectName::new("Proj1"),
            service_base_name: ServiceBaseName::new("dlab-test"),
            endpoint: EndpointName::new("edge1"),
            status: status.map(str::to_string),
        }
    }

    fn cluster(id: Option<&str>, image: &str) -> ComputationalResource {
        ComputationalResource {
            id: id.map(ComputationalId::new),
            name: format!("cluster-{}", id.unwrap_or("pending")),
            status: Some("running".to_string()),
            image_name: image.to_string(),
            instance_count: Some(3),
            instance_shape: Some("m5.large".to_string()),
            master_shape: Some("m5.xlarge".to_string()),
        }
    }

    fn exploratory(resources: Vec<ComputationalResource>) -> ExploratoryInstance {
        ExploratoryInstance {
            id: ExploratoryId::new("nb-1"),
            name: "jupyter".to_string(),
            user: UserName::new("alice"),
            project: ProjectName::new("Proj1"),
            shape: Some("t2.medium".to_string()),
            status: Some("stopped".to_string()),
            resources,
        }
    }

    fn ids(lines: &[BillingReportLine]) -> Vec<&str> {
        lines.iter().map(|l| l.resource_id.as_str()).collect()
    }

    #[test]
    fn edge_stream_has_three_lines_in_order() {
        let lines = edge_lines(&edge(Some("running")));

        assert_eq!(ids(&lines), vec!["dlab-test-proj1-edge1-edge", "dlab-test-proj1-edge1-edge-volume-primary", "dlab-test-proj1-bucket"]);
        assert_eq!(
            lines.iter().map(|l| l.resource_type).collect::<Vec<_>>(),
            vec![BillingResourceType::Edge, BillingResourceType::Volume, BillingResourceType::EdgeBucket]
        );
        assert!(lines.iter().all(|l| l.project == "Proj1" && l.user == SHARED_RESOURCE));
        assert_eq!(lines[0].status, Some(InstanceStatus::Running));
        assert_eq!(lines[1].status, None);
        assert_eq!(lines[2].status, None);
    }

    #[test]
    fn unknown_edge_status_is_left_empty() {
        let lines = edge_lines(&edge(Some("warming up")));
        assert_eq!(lines[0].status, None);
        assert_eq!(edge_lines(&edge(None))[0].status, None);
    }

    #[test]
    fn ssn_stream_is_shared() {
        let lines = ssn_lines(&ServiceBaseName::new("dlab_test"));

        assert_eq!(ids(&lines), vec!["dlab_test-ssn", "dlab_test-ssn-volume-primary", "dlab-test-ssn-bucket", "dlab-test-shared-bucket"]);
        assert!(lines.iter().all(|l| l.user == SHARED_RESOURCE && l.project == SHARED_RESOURCE));
        assert!(lines.iter().all(|l| l.status.is_none() && l.shape.is_none()));
    }

    #[test]
    fn exploratory_stream_lists_clusters_first() {
        let lines = exploratory_lines(&exploratory(vec![
            cluster(Some("c1"), "docker.dlab-dataengine"),
            cluster(None, "docker.dlab-dataengine"),
            cluster(Some("c2"), "docker.dlab-dataengine-service"),
        ]));

        assert_eq!(lines.len(), 2 * 2 + 3);
        assert_eq!(ids(&lines), vec!["c1", "c1-volume-primary", "c2", "c2-volume-primary", "nb-1", "nb-1-volume-primary", "nb-1-volume-secondary"]);

        assert_eq!(lines[0].resource_type, BillingResourceType::Computational);
        assert_eq!(lines[0].shape.as_deref(), Some("3 x m5.large"));
        assert_eq!(lines[0].status, Some(InstanceStatus::Running));
        assert_eq!(lines[1].resource_name, "cluster-c1:Volume primary");
        assert_eq!(lines[1].shape, None);
        assert_eq!(lines[1].status, None);

        assert_eq!(lines[4].resource_type, BillingResourceType::Exploratory);
        assert_eq!(lines[4].shape.as_deref(), Some("t2.medium"));
        assert_eq!(lines[4].status, Some(InstanceStatus::Stopped));
        assert!(lines.iter().all(|l| l.user == "alice" && l.project == "Proj1"));
    }

    #[test]
    fn exploratory_without_clusters_has_three_lines() {
        let lines = exploratory_lines(&exploratory(vec![cluster(None, "docker.dlab-dataengine")]));
        assert_eq!(ids(&lines), vec!["nb-1", "nb-1-volume-primary", "nb-1-volume-secondary"]);
    }

    #[test]
    fn cluster_service_shape_has_no_slave_sizing() {
        let shape = computational_shape(&cluster(Some("c"), "docker.dlab-dataengine-service"));
        assert_eq!(shape, "Master: m5.xlarge\nSlave:  null x null");
    }

    #[test]
    fn unknown_image_uses_cluster_service_shape() {
        let shape = computational_shape(&cluster(Some("c"), "docker.dlab-zeppelin"));
        assert!(shape.starts_with("Master: m5.xlarge"));
    }

    #[test]
    fn building_twice_gives_identical_lines() {
        let instance = exploratory(vec![cluster(Some("c1"), "docker.dlab-dataengine")]);
        assert_eq!(exploratory_lines(&instance), exploratory_lines(&instance));
    }
}
