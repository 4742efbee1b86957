use std::io::stdout;

use fleetsnap_core::cloud_compute::CloudCompute;
use fleetsnap_core::error::Result;

pub async fn start_instances(compute: &dyn CloudCompute, project: Option<&str>) -> Result<()> {
    // Per-instance failures are already reported inline; a partial batch is
    // still a successful run.
    fleetsnap_core::commands::start_instances(compute, &mut stdout(), project).await?;

    Ok(())
}
