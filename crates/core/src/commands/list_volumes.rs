use std::io::Write;

use crate::cloud_compute::CloudCompute;
use crate::error::Result;

/// Prints one row per attached volume: volume id, owning instance id, size,
/// encryption status.
pub async fn list_volumes(
    compute: &dyn CloudCompute,
    out: &mut dyn Write,
    project: Option<&str>,
) -> Result<()> {
    for instance in compute.list_instances(project).await? {
        for volume in compute.list_volumes(&instance.id).await? {
            writeln!(
                out,
                "{},{},{}GiB,{}",
                volume.id,
                instance.id,
                volume.size_gib,
                if volume.encrypted {
                    "Encrypted"
                } else {
                    "Not Encrypted"
                },
            )?;
        }
    }

    Ok(())
}
