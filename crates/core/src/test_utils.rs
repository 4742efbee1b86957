//! Hand-rolled builders for tests; not part of the public contract.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::models::{Instance, InstanceState, PROJECT_TAG, Snapshot, SnapshotState, Volume};

pub fn instance(id: &str) -> Instance {
    Instance {
        id: id.to_string(),
        instance_type: "t2.micro".to_string(),
        availability_zone: "us-east-1a".to_string(),
        state: InstanceState::Running,
        public_dns_name: format!("{id}.example.compute.amazonaws.com"),
        tags: Default::default(),
    }
}

pub fn project_instance(id: &str, project: &str) -> Instance {
    let mut instance = instance(id);
    instance
        .tags
        .insert(PROJECT_TAG.to_string(), project.to_string());
    instance
}

pub fn volume(id: &str, instance_id: &str, size_gib: i32, encrypted: bool) -> Volume {
    Volume {
        id: id.to_string(),
        instance_id: instance_id.to_string(),
        size_gib,
        encrypted,
    }
}

pub fn snapshot(id: &str, volume_id: &str, state: SnapshotState, start_time: &str) -> Snapshot {
    Snapshot {
        id: id.to_string(),
        volume_id: volume_id.to_string(),
        progress: match state {
            SnapshotState::Completed => "100%".to_string(),
            _ => "0%".to_string(),
        },
        state,
        start_time: datetime(start_time),
    }
}

pub fn datetime(datetime: &str) -> DateTime<Utc> {
    let datetime = NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S").unwrap();
    Utc.from_utc_datetime(&datetime)
}
