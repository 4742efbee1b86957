use std::io::Write;

use crate::cloud_compute::{CloudCompute, WaitParams};
use crate::error::Result;
use crate::models::SnapshotState;

const SNAPSHOT_DESCRIPTION: &str = "Created by fleetsnap";

/// Stop → snapshot every volume → start, one instance at a time.
///
/// Volumes whose newest snapshot is still pending are skipped, which makes
/// re-running the command after an abort safe. Unlike the start/stop batches,
/// any failure here propagates and ends the whole run.
pub async fn create_snapshots(
    compute: &dyn CloudCompute,
    out: &mut dyn Write,
    project: Option<&str>,
    wait: &WaitParams,
) -> Result<()> {
    for instance in compute.list_instances(project).await? {
        writeln!(out, "Stopping {}", instance.id)?;

        compute.stop_instance(&instance.id).await?;
        compute.wait_until_stopped(&instance.id, wait).await?;

        for volume in compute.list_volumes(&instance.id).await? {
            if has_pending_snapshot(compute, &volume.id).await? {
                writeln!(out, "Skipping {}, snapshot already in progress", volume.id)?;
                continue;
            }

            writeln!(out, "Creating snapshot of {}", volume.id)?;
            compute
                .create_snapshot(&volume.id, SNAPSHOT_DESCRIPTION)
                .await?;
        }

        compute.start_instance(&instance.id).await?;
        compute.wait_until_running(&instance.id, wait).await?;
    }

    writeln!(out, "Job's done!")?;

    Ok(())
}

async fn has_pending_snapshot(compute: &dyn CloudCompute, volume_id: &str) -> Result<bool> {
    let snapshots = compute.list_snapshots(volume_id).await?;

    Ok(snapshots
        .first()
        .is_some_and(|snapshot| snapshot.state == SnapshotState::Pending))
}
