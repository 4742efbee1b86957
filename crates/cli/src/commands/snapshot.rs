use std::io::stdout;
use std::time::Duration;

use fleetsnap_core::cloud_compute::{CloudCompute, WaitParams};
use fleetsnap_core::error::Result;

pub async fn create_snapshots(
    compute: &dyn CloudCompute,
    project: Option<&str>,
    wait_timeout: u64,
) -> Result<()> {
    let wait = WaitParams::with_timeout(Duration::from_secs(wait_timeout));

    fleetsnap_core::commands::create_snapshots(compute, &mut stdout(), project, &wait).await
}
