//! Deterministic names of the physical cloud resources behind each logical entity.
//!
//! Every function is a pure string template. Inputs are used as given: no
//! escaping or sanitizing takes place, so callers must pass identifiers that
//! are already valid for the provider's naming scheme.

use crate::domain::billing::utils::id::{ComputationalId, EndpointName, ExploratoryId, ProjectName, ResourceId, ServiceBaseName};

const EDGE_SUFFIX: &str = "edge";
const SSN_SUFFIX: &str = "ssn";
const VOLUME_PRIMARY_SUFFIX: &str = "volume-primary";
const VOLUME_SECONDARY_SUFFIX: &str = "volume-secondary";

fn project_key(project: &ProjectName) -> String {
    project.as_str().to_lowercase()
}

/// Bucket names may not contain underscores.
fn bucket_prefix(sbn: &ServiceBaseName) -> String {
    sbn.as_str().replace('_', "-")
}

fn primary_volume_of(owner: &str) -> ResourceId {
    ResourceId::new(format!("{}-{}", owner, VOLUME_PRIMARY_SUFFIX))
}

/// `{sbn}-{project}-{endpoint}-edge`, project lower-cased.
pub fn edge_id(sbn: &ServiceBaseName, project: &ProjectName, endpoint: &EndpointName) -> ResourceId {
    ResourceId::new(format!("{}-{}-{}-{}", sbn, project_key(project), endpoint, EDGE_SUFFIX))
}

pub fn edge_volume_id(sbn: &ServiceBaseName, project: &ProjectName, endpoint: &EndpointName) -> ResourceId {
    primary_volume_of(edge_id(sbn, project, endpoint).as_str())
}

/// One bucket per project, whatever the number of endpoints.
pub fn edge_bucket_id(sbn: &ServiceBaseName, project: &ProjectName) -> ResourceId {
    ResourceId::new(format!("{}-{}-bucket", sbn, project_key(project)))
}

pub fn ssn_id(sbn: &ServiceBaseName) -> ResourceId {
    ResourceId::new(format!("{}-{}", sbn, SSN_SUFFIX))
}

pub fn ssn_volume_id(sbn: &ServiceBaseName) -> ResourceId {
    primary_volume_of(ssn_id(sbn).as_str())
}

pub fn ssn_bucket_id(sbn: &ServiceBaseName) -> ResourceId {
    ResourceId::new(format!("{}-{}-bucket", bucket_prefix(sbn), SSN_SUFFIX))
}

/// Collaboration bucket shared by all projects of the deployment.
pub fn shared_bucket_id(sbn: &ServiceBaseName) -> ResourceId {
    ResourceId::new(format!("{}-shared-bucket", bucket_prefix(sbn)))
}

pub fn exploratory_id(exploratory: &ExploratoryId) -> ResourceId {
    ResourceId::new(exploratory.as_str())
}

pub fn exploratory_primary_volume_id(exploratory: &ExploratoryId) -> ResourceId {
    primary_volume_of(exploratory.as_str())
}

pub fn exploratory_secondary_volume_id(exploratory: &ExploratoryId) -> ResourceId {
    ResourceId::new(format!("{}-{}", exploratory, VOLUME_SECONDARY_SUFFIX))
}

pub fn computational_id(computational: &ComputationalId) -> ResourceId {
    ResourceId::new(computational.as_str())
}

/// Clusters only ever get a primary volume.
pub fn computational_volume_id(computational: &ComputationalId) -> ResourceId {
    primary_volume_of(computational.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sbn(name: &str) -> ServiceBaseName {
        ServiceBaseName::new(name)
    }

    #[test]
    fn edge_ids_lowercase_the_project() {
        let project = ProjectName::new("Proj1");
        let endpoint = EndpointName::new("edge1");

        assert_eq!(edge_id(&sbn("dlab-test"), &project, &endpoint).as_str(), "dlab-test-proj1-edge1-edge");
        assert_eq!(edge_volume_id(&sbn("dlab-test"), &project, &endpoint).as_str(), "dlab-test-proj1-edge1-edge-volume-primary");
        assert_eq!(edge_bucket_id(&sbn("dlab-test"), &project).as_str(), "dlab-test-proj1-bucket");
    }

    #[test]
    fn endpoint_case_is_kept() {
        let id = edge_id(&sbn("sbn"), &ProjectName::new("P"), &EndpointName::new("Local"));
        assert_eq!(id.as_str(), "sbn-p-Local-edge");
    }

    #[test]
    fn ssn_buckets_replace_underscores() {
        let name = sbn("my_dlab_env");

        assert_eq!(ssn_id(&name).as_str(), "my_dlab_env-ssn");
        assert_eq!(ssn_volume_id(&name).as_str(), "my_dlab_env-ssn-volume-primary");
        assert_eq!(ssn_bucket_id(&name).as_str(), "my-dlab-env-ssn-bucket");
        assert_eq!(shared_bucket_id(&name).as_str(), "my-dlab-env-shared-bucket");
    }

    #[test]
    fn instance_volumes() {
        let exploratory = ExploratoryId::new("nb-42");
        assert_eq!(exploratory_id(&exploratory).as_str(), "nb-42");
        assert_eq!(exploratory_primary_volume_id(&exploratory).as_str(), "nb-42-volume-primary");
        assert_eq!(exploratory_secondary_volume_id(&exploratory).as_str(), "nb-42-volume-secondary");

        let computational = ComputationalId::new("des-7");
        assert_eq!(computational_id(&computational).as_str(), "des-7");
        assert_eq!(computational_volume_id(&computational).as_str(), "des-7-volume-primary");
    }

    #[test]
    fn special_characters_pass_through() {
        let id = edge_bucket_id(&sbn("a,b"), &ProjectName::new("X\"Y"));
        assert_eq!(id.as_str(), "a,b-x\"y-bucket");
    }
}
