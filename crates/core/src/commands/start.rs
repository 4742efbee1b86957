use std::io::Write;

use crate::cloud_compute::CloudCompute;
use crate::error::Result;
use crate::report::BatchReport;

/// Requests a start for every matching instance. A per-instance rejection is
/// reported and the batch moves on; the returned report carries each outcome.
pub async fn start_instances(
    compute: &dyn CloudCompute,
    out: &mut dyn Write,
    project: Option<&str>,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for instance in compute.list_instances(project).await? {
        writeln!(out, "Starting {}...", instance.id)?;

        match compute.start_instance(&instance.id).await {
            Ok(()) => report.success(&instance.id),
            Err(error) => {
                writeln!(out, "Could not start {}: {}", instance.id, error)?;
                report.failure(&instance.id, error);
            }
        }
    }

    Ok(report)
}
