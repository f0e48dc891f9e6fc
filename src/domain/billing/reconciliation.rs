//! Every physical resource id that belongs to one logical entity.
//!
//! Cleanup and filtering code uses these sets to pick the feed records of an
//! entity. Nothing here deletes anything.

use crate::domain::billing::identity;
use crate::domain::billing::utils::id::{ComputationalId, ExploratoryId, ResourceId};

/// `[id, id-volume-primary]`.
pub fn computational_ids(computational: &ComputationalId) -> Vec<ResourceId> {
    vec![identity::computational_id(computational), identity::computational_volume_id(computational)]
}

/// `[id, id-volume-primary, id-volume-secondary]`.
pub fn exploratory_ids(exploratory: &ExploratoryId) -> Vec<ResourceId> {
    vec![
        identity::exploratory_id(exploratory),
        identity::exploratory_primary_volume_id(exploratory),
        identity::exploratory_secondary_volume_id(exploratory),
    ]
}
