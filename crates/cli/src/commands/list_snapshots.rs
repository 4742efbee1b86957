use std::io::stdout;

use fleetsnap_core::cloud_compute::CloudCompute;
use fleetsnap_core::error::Result;

pub async fn list_snapshots(
    compute: &dyn CloudCompute,
    project: Option<&str>,
    all: bool,
) -> Result<()> {
    fleetsnap_core::commands::list_snapshots(compute, &mut stdout(), project, all).await
}
