use serde::Serialize;
use std::fmt;

/// Lifecycle state of a user instance as reported by the provisioning side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    Creating,
    Created,
    Starting,
    Configuring,
    Running,
    Stopping,
    Stopped,
    Terminating,
    Terminated,
    Failed,
    CreatingImage,
    Reconfiguring,
    Reuploading,
}

impl InstanceStatus {
    const ALL: [InstanceStatus; 13] = [
        InstanceStatus::Creating,
        InstanceStatus::Created,
        InstanceStatus::Starting,
        InstanceStatus::Configuring,
        InstanceStatus::Running,
        InstanceStatus::Stopping,
        InstanceStatus::Stopped,
        InstanceStatus::Terminating,
        InstanceStatus::Terminated,
        InstanceStatus::Failed,
        InstanceStatus::CreatingImage,
        InstanceStatus::Reconfiguring,
        InstanceStatus::Reuploading,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InstanceStatus::Creating => "CREATING",
            InstanceStatus::Created => "CREATED",
            InstanceStatus::Starting => "STARTING",
            InstanceStatus::Configuring => "CONFIGURING",
            InstanceStatus::Running => "RUNNING",
            InstanceStatus::Stopping => "STOPPING",
            InstanceStatus::Stopped => "STOPPED",
            InstanceStatus::Terminating => "TERMINATING",
            InstanceStatus::Terminated => "TERMINATED",
            InstanceStatus::Failed => "FAILED",
            InstanceStatus::CreatingImage => "CREATING_IMAGE",
            InstanceStatus::Reconfiguring => "RECONFIGURING",
            InstanceStatus::Reuploading => "REUPLOADING",
        }
    }

    /// Lenient lookup used for status text coming from snapshots.
    ///
    /// Case is ignored and `-` or spaces count as `_`. Unknown or empty text
    /// gives `None`, which the report renders as "no status".
    pub fn of(status: &str) -> Option<InstanceStatus> {
        let normalized = status.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        if normalized.is_empty() {
            return None;
        }

        Self::ALL.into_iter().find(|s| s.name() == normalized)
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ignoring_case() {
        assert_eq!(InstanceStatus::of("running"), Some(InstanceStatus::Running));
        assert_eq!(InstanceStatus::of("Creating-Image"), Some(InstanceStatus::CreatingImage));
        assert_eq!(InstanceStatus::of(" stopped "), Some(InstanceStatus::Stopped));
    }

    #[test]
    fn unknown_status_is_absent() {
        assert_eq!(InstanceStatus::of(""), None);
        assert_eq!(InstanceStatus::of("exploding"), None);
    }
}
