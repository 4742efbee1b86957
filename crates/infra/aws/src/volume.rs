use aws_sdk_ec2::Client as Ec2Client;
use aws_sdk_ec2::types::{Filter, Snapshot as Ec2Snapshot, Volume as Ec2Volume};
use chrono::{DateTime, Utc};
use fleetsnap_core::error::{ComputeError, Result};
use fleetsnap_core::models::{Snapshot, SnapshotState, Volume};

use crate::aws_error::map_aws_error;

pub(super) async fn list_volumes(client: &Ec2Client, instance_id: &str) -> Result<Vec<Volume>> {
    let request = client.describe_volumes().filters(
        Filter::builder()
            .name("attachment.instance-id")
            .values(instance_id)
            .build(),
    );

    let mut pages = request.into_paginator().send();
    let mut volumes = Vec::new();

    while let Some(page) = pages.next().await {
        let page = page.map_err(|error| map_aws_error("DescribeVolumes", error))?;

        for volume in page.volumes() {
            volumes.push(convert_volume(volume, instance_id)?);
        }
    }

    Ok(volumes)
}

pub(super) async fn list_snapshots(client: &Ec2Client, volume_id: &str) -> Result<Vec<Snapshot>> {
    let request = client
        .describe_snapshots()
        .filters(Filter::builder().name("volume-id").values(volume_id).build());

    let mut pages = request.into_paginator().send();
    let mut snapshots = Vec::new();

    while let Some(page) = pages.next().await {
        let page = page.map_err(|error| map_aws_error("DescribeSnapshots", error))?;

        for snapshot in page.snapshots() {
            snapshots.push(convert_snapshot(snapshot, volume_id)?);
        }
    }

    // DescribeSnapshots does not guarantee an ordering; the rest of the tool
    // expects newest first.
    snapshots.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    Ok(snapshots)
}

pub(super) async fn create_snapshot(
    client: &Ec2Client,
    volume_id: &str,
    description: &str,
) -> Result<String> {
    let response = client
        .create_snapshot()
        .volume_id(volume_id)
        .description(description)
        .send()
        .await
        .map_err(|error| map_aws_error("CreateSnapshot", error))?;

    Ok(response
        .snapshot_id()
        .ok_or(ComputeError::MissingSnapshotIdentifier)?
        .to_string())
}

fn convert_volume(volume: &Ec2Volume, instance_id: &str) -> Result<Volume> {
    Ok(Volume {
        id: volume
            .volume_id()
            .ok_or(ComputeError::MissingVolumeIdentifier)?
            .to_string(),
        instance_id: instance_id.to_string(),
        size_gib: volume.size().unwrap_or_default(),
        encrypted: volume.encrypted().unwrap_or_default(),
    })
}

fn convert_snapshot(snapshot: &Ec2Snapshot, volume_id: &str) -> Result<Snapshot> {
    let start_time = snapshot
        .start_time()
        .and_then(|time| DateTime::from_timestamp(time.secs(), time.subsec_nanos()))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    Ok(Snapshot {
        id: snapshot
            .snapshot_id()
            .ok_or(ComputeError::MissingSnapshotIdentifier)?
            .to_string(),
        volume_id: volume_id.to_string(),
        state: snapshot
            .state()
            .map(|state| SnapshotState::from_name(state.as_str()))
            .unwrap_or_else(|| SnapshotState::Other("unknown".to_string())),
        progress: snapshot.progress().unwrap_or_default().to_string(),
        start_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::primitives::DateTime as AwsDateTime;
    use aws_sdk_ec2::types::SnapshotState as Ec2SnapshotState;
    use pretty_assertions as pa;

    #[test]
    fn converts_a_volume() {
        let described = Ec2Volume::builder()
            .volume_id("vol-1")
            .size(8)
            .encrypted(true)
            .build();

        let volume = convert_volume(&described, "i-1").unwrap();

        pa::assert_eq!("vol-1", volume.id);
        pa::assert_eq!("i-1", volume.instance_id);
        pa::assert_eq!(8, volume.size_gib);
        assert!(volume.encrypted);
    }

    #[test]
    fn converts_a_snapshot() {
        let described = Ec2Snapshot::builder()
            .snapshot_id("snap-1")
            .state(Ec2SnapshotState::Completed)
            .progress("100%")
            .start_time(AwsDateTime::from_secs(946_728_000))
            .build();

        let snapshot = convert_snapshot(&described, "vol-1").unwrap();

        pa::assert_eq!("snap-1", snapshot.id);
        pa::assert_eq!("vol-1", snapshot.volume_id);
        pa::assert_eq!(SnapshotState::Completed, snapshot.state);
        pa::assert_eq!("100%", snapshot.progress);
        pa::assert_eq!(
            fleetsnap_core::test_utils::datetime("2000-01-01 12:00:00"),
            snapshot.start_time,
        );
    }

    #[test]
    fn a_snapshot_without_an_id_is_an_error() {
        let described = Ec2Snapshot::builder().build();

        assert!(convert_snapshot(&described, "vol-1").is_err());
    }
}
