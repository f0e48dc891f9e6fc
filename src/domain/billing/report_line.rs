use serde::Serialize;

use crate::domain::billing::resource_type::BillingResourceType;
use crate::domain::billing::status::InstanceStatus;
use crate::domain::billing::utils::id::ResourceId;

/// Owner shown for infrastructure that no single user owns.
pub const SHARED_RESOURCE: &str = "Shared resource";

/// One normalized billing record for a single physical resource.
///
/// Lines are rebuilt from a snapshot on every report request. `status` and
/// `shape` stay empty unless the line describes a running compute unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingReportLine {
    pub resource_id: ResourceId,
    /// Human readable label; not part of the rendered report.
    pub resource_name: String,
    pub user: String,
    pub project: String,
    pub resource_type: BillingResourceType,
    pub status: Option<InstanceStatus>,
    pub shape: Option<String>,
    pub product: Option<String>,
    pub cost: Option<f64>,
}

impl BillingReportLine {
    pub fn new(
        resource_id: ResourceId,
        resource_name: impl Into<String>,
        user: impl Into<String>,
        project: impl Into<String>,
        resource_type: BillingResourceType,
    ) -> Self {
        BillingReportLine {
            resource_id,
            resource_name: resource_name.into(),
            user: user.into(),
            project: project.into(),
            resource_type,
            status: None,
            shape: None,
            product: None,
            cost: None,
        }
    }

    pub fn shared(resource_id: ResourceId, resource_name: impl Into<String>, resource_type: BillingResourceType) -> Self {
        Self::new(resource_id, resource_name, SHARED_RESOURCE, SHARED_RESOURCE, resource_type)
    }

    /// Ignored for volumes and buckets.
    pub fn with_status(mut self, status: Option<InstanceStatus>) -> Self {
        if self.resource_type.is_compute_unit() {
            self.status = status;
        } else if status.is_some() {
            log::trace!("Dropping status of {} line '{}'", self.resource_type, self.resource_id);
        }
        self
    }

    /// Ignored for volumes and buckets.
    pub fn with_shape(mut self, shape: Option<String>) -> Self {
        if self.resource_type.is_compute_unit() {
            self.shape = shape;
        } else if shape.is_some() {
            log::trace!("Dropping shape of {} line '{}'", self.resource_type, self.resource_id);
        }
        self
    }
}
