use std::io::Write;

use crate::cloud_compute::CloudCompute;
use crate::error::Result;
use crate::models::SnapshotState;

/// Prints one row per snapshot, newest first: snapshot id, volume id, instance
/// id, state, progress, start time.
///
/// Unless `list_all` is set, the per-volume listing stops at the first
/// `completed` snapshot, so each volume shows its most recent terminal
/// snapshot plus any pending ones ahead of it.
pub async fn list_snapshots(
    compute: &dyn CloudCompute,
    out: &mut dyn Write,
    project: Option<&str>,
    list_all: bool,
) -> Result<()> {
    for instance in compute.list_instances(project).await? {
        for volume in compute.list_volumes(&instance.id).await? {
            for snapshot in compute.list_snapshots(&volume.id).await? {
                writeln!(
                    out,
                    "{},{},{},{},{},{}",
                    snapshot.id,
                    volume.id,
                    instance.id,
                    snapshot.state,
                    snapshot.progress,
                    snapshot.start_time.format("%c"),
                )?;

                if snapshot.state == SnapshotState::Completed && !list_all {
                    break;
                }
            }
        }
    }

    Ok(())
}
