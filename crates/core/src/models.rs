use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};

/// Tag key used to group instances into projects.
pub const PROJECT_TAG: &str = "Project";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub id: String,
    pub instance_type: String,
    pub availability_zone: String,
    pub state: InstanceState,
    pub public_dns_name: String,
    pub tags: BTreeMap<String, String>,
}

impl Instance {
    pub fn project(&self) -> Option<&str> {
        self.tags.get(PROJECT_TAG).map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
    Other(String),
}

impl InstanceState {
    pub fn from_name(name: &str) -> Self {
        match name {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "shutting-down" => Self::ShuttingDown,
            "terminated" => Self::Terminated,
            "stopping" => Self::Stopping,
            "stopped" => Self::Stopped,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::ShuttingDown => "shutting-down",
            Self::Terminated => "terminated",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Other(name) => name,
        }
    }
}

impl Display for InstanceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume {
    pub id: String,
    pub instance_id: String,
    pub size_gib: i32,
    pub encrypted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub id: String,
    pub volume_id: String,
    pub state: SnapshotState,
    pub progress: String,
    pub start_time: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotState {
    Pending,
    Completed,
    Error,
    Other(String),
}

impl SnapshotState {
    pub fn from_name(name: &str) -> Self {
        match name {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::Other(name) => name,
        }
    }
}

impl Display for SnapshotState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions as pa;

    #[test]
    fn instance_state_round_trips_provider_names() {
        for name in [
            "pending",
            "running",
            "shutting-down",
            "terminated",
            "stopping",
            "stopped",
        ] {
            pa::assert_eq!(name, InstanceState::from_name(name).as_str());
        }
    }

    #[test]
    fn instance_state_keeps_unrecognized_names() {
        pa::assert_eq!(
            InstanceState::Other("rebooting".to_string()),
            InstanceState::from_name("rebooting"),
        );
    }

    #[test]
    fn project_resolves_the_project_tag() {
        let mut instance = crate::test_utils::instance("i-1");
        assert_eq!(None, instance.project());

        instance
            .tags
            .insert(PROJECT_TAG.to_string(), "web".to_string());
        assert_eq!(Some("web"), instance.project());
    }
}
