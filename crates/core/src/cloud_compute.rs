use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Instance, Snapshot, Volume};

/// Bounds for a "wait until the instance reaches a state" call. Polling and
/// backoff are delegated to the provider; the timeout caps the whole wait.
#[derive(Clone, Copy, Debug)]
pub struct WaitParams {
    pub timeout: Duration,
}

impl WaitParams {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for WaitParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(600),
        }
    }
}

/// The compute side of a cloud provider, as far as fleetsnap is concerned.
///
/// Implementations own session and pagination details; callers get plain
/// collections and state-transition requests.
#[async_trait]
pub trait CloudCompute: Send + Sync {
    /// Lists instances, optionally restricted to those whose `Project` tag
    /// equals `project`.
    async fn list_instances(&self, project: Option<&str>) -> Result<Vec<Instance>>;

    /// Lists the volumes attached to an instance.
    async fn list_volumes(&self, instance_id: &str) -> Result<Vec<Volume>>;

    /// Lists the snapshots of a volume, newest first.
    async fn list_snapshots(&self, volume_id: &str) -> Result<Vec<Snapshot>>;

    /// Requests a snapshot of a volume and returns the new snapshot's id. The
    /// snapshot completes asynchronously on the provider side.
    async fn create_snapshot(&self, volume_id: &str, description: &str) -> Result<String>;

    /// Requests an instance start. Fails with a transition rejection when the
    /// instance's current state does not allow it.
    async fn start_instance(&self, instance_id: &str) -> Result<()>;

    /// Requests an instance stop. Fails with a transition rejection when the
    /// instance's current state does not allow it.
    async fn stop_instance(&self, instance_id: &str) -> Result<()>;

    /// Blocks until the instance is `stopped`, or until `wait.timeout` elapses.
    async fn wait_until_stopped(&self, instance_id: &str, wait: &WaitParams) -> Result<()>;

    /// Blocks until the instance is `running`, or until `wait.timeout` elapses.
    async fn wait_until_running(&self, instance_id: &str, wait: &WaitParams) -> Result<()>;
}
