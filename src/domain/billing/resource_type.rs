use serde::Serialize;
use std::fmt;

/// Family of a physical cloud resource that shows up in the provider's bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingResourceType {
    /// Per-project gateway node.
    Edge,

    /// Any attached disk (edge, ssn, exploratory or computational).
    Volume,

    /// Per-project bucket owned by the edge node.
    EdgeBucket,

    /// Deployment-wide self-service node.
    Ssn,

    /// Bucket owned by the self-service node.
    SsnBucket,

    /// Deployment-wide collaboration bucket.
    SharedBucket,

    /// A user's analytics environment.
    Exploratory,

    /// A compute cluster attached to an exploratory environment.
    Computational,
}

impl BillingResourceType {
    /// Symbolic name as it appears in the report.
    pub fn name(&self) -> &'static str {
        match self {
            BillingResourceType::Edge => "EDGE",
            BillingResourceType::Volume => "VOLUME",
            BillingResourceType::EdgeBucket => "EDGE_BUCKET",
            BillingResourceType::Ssn => "SSN",
            BillingResourceType::SsnBucket => "SSN_BUCKET",
            BillingResourceType::SharedBucket => "SHARED_BUCKET",
            BillingResourceType::Exploratory => "EXPLORATORY",
            BillingResourceType::Computational => "COMPUTATIONAL",
        }
    }

    /// Only running compute units carry a status and a shape.
    pub fn is_compute_unit(&self) -> bool {
        match self {
            BillingResourceType::Edge | BillingResourceType::Exploratory | BillingResourceType::Computational => true,
            BillingResourceType::Volume
            | BillingResourceType::EdgeBucket
            | BillingResourceType::Ssn
            | BillingResourceType::SsnBucket
            | BillingResourceType::SharedBucket => false,
        }
    }
}

impl fmt::Display for BillingResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_name_matches_report_name() {
        for typ in [
            BillingResourceType::Edge,
            BillingResourceType::Volume,
            BillingResourceType::EdgeBucket,
            BillingResourceType::Ssn,
            BillingResourceType::SsnBucket,
            BillingResourceType::SharedBucket,
            BillingResourceType::Exploratory,
            BillingResourceType::Computational,
        ] {
            assert_eq!(serde_json::to_string(&typ).unwrap(), format!("\"{}\"", typ.name()));
        }
    }

    #[test]
    fn ssn_is_not_a_compute_unit() {
        assert!(!BillingResourceType::Ssn.is_compute_unit());
        assert!(BillingResourceType::Edge.is_compute_unit());
    }
}
