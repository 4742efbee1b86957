use std::io::stdout;

use fleetsnap_core::cloud_compute::CloudCompute;
use fleetsnap_core::error::Result;

pub async fn list_instances(compute: &dyn CloudCompute, project: Option<&str>) -> Result<()> {
    fleetsnap_core::commands::list_instances(compute, &mut stdout(), project).await
}
