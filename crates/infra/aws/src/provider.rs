use async_trait::async_trait;
use aws_sdk_ec2::Client as Ec2Client;
use fleetsnap_core::cloud_compute::{CloudCompute, WaitParams};
use fleetsnap_core::error::Result;
use fleetsnap_core::models::{Instance, Snapshot, Volume};

use crate::{config, instance, volume};

/// EC2-backed implementation of [`CloudCompute`].
pub struct AwsCompute {
    client: Ec2Client,
}

impl AwsCompute {
    pub async fn new(profile: Option<&str>, region: Option<&str>) -> Self {
        let config = config::get_config(profile, region).await;

        Self {
            client: Ec2Client::new(&config),
        }
    }
}

#[async_trait]
impl CloudCompute for AwsCompute {
    async fn list_instances(&self, project: Option<&str>) -> Result<Vec<Instance>> {
        instance::list_instances(&self.client, project).await
    }

    async fn list_volumes(&self, instance_id: &str) -> Result<Vec<Volume>> {
        volume::list_volumes(&self.client, instance_id).await
    }

    async fn list_snapshots(&self, volume_id: &str) -> Result<Vec<Snapshot>> {
        volume::list_snapshots(&self.client, volume_id).await
    }

    async fn create_snapshot(&self, volume_id: &str, description: &str) -> Result<String> {
        volume::create_snapshot(&self.client, volume_id, description).await
    }

    async fn start_instance(&self, instance_id: &str) -> Result<()> {
        instance::start_instance(&self.client, instance_id).await
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<()> {
        instance::stop_instance(&self.client, instance_id).await
    }

    async fn wait_until_stopped(&self, instance_id: &str, wait: &WaitParams) -> Result<()> {
        instance::wait_until_stopped(&self.client, instance_id, wait).await
    }

    async fn wait_until_running(&self, instance_id: &str, wait: &WaitParams) -> Result<()> {
        instance::wait_until_running(&self.client, instance_id, wait).await
    }
}
