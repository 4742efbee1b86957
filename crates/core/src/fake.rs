use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::cloud_compute::{CloudCompute, WaitParams};
use crate::error::{ComputeError, Result};
use crate::models::{Instance, InstanceState, Snapshot, SnapshotState, Volume};

/// An in-memory implementation of [`CloudCompute`].
///
/// State transitions are immediate: `stop_instance` moves the instance to
/// `stopping` and the matching wait settles it, mirroring the shape (not the
/// latency) of the real provider.
#[derive(Debug, Default)]
pub struct FakeCompute {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    instances: Vec<Instance>,
    volumes: Vec<Volume>,
    snapshots: Vec<Snapshot>,
    rejected_stops: BTreeSet<String>,
    rejected_starts: BTreeSet<String>,
    created_snapshots: u32,
}

impl FakeCompute {
    pub fn new(instances: Vec<Instance>) -> Self {
        Self {
            state: Mutex::new(State {
                instances,
                ..Default::default()
            }),
        }
    }

    pub fn add_instance(&mut self, instance: Instance) {
        self.state_mut().instances.push(instance);
    }

    pub fn add_volume(&mut self, volume: Volume) {
        self.state_mut().volumes.push(volume);
    }

    pub fn add_snapshot(&mut self, snapshot: Snapshot) {
        self.state_mut().snapshots.push(snapshot);
    }

    /// Makes every subsequent stop request for `instance_id` fail the way the
    /// provider rejects a transition that is invalid for the current state.
    pub fn reject_stop(&mut self, instance_id: &str) {
        self.state_mut()
            .rejected_stops
            .insert(instance_id.to_string());
    }

    /// Same as [`Self::reject_stop`], for start requests.
    pub fn reject_start(&mut self, instance_id: &str) {
        self.state_mut()
            .rejected_starts
            .insert(instance_id.to_string());
    }

    /// Current state of an instance, for assertions.
    pub fn instance_state(&self, instance_id: &str) -> Option<InstanceState> {
        self.state_mut()
            .instances
            .iter()
            .find(|instance| instance.id == instance_id)
            .map(|instance| instance.state.clone())
    }

    /// Snapshots of a volume, newest first, for assertions.
    pub fn snapshots_of(&self, volume_id: &str) -> Vec<Snapshot> {
        self.state_mut().snapshots_of(volume_id)
    }

    fn state_mut(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake compute state poisoned")
    }
}

impl State {
    fn instance_mut(&mut self, instance_id: &str) -> Result<&mut Instance> {
        self.instances
            .iter_mut()
            .find(|instance| instance.id == instance_id)
            .ok_or_else(|| {
                ComputeError::NoSuchInstance {
                    instance_id: instance_id.to_string(),
                }
                .into()
            })
    }

    fn snapshots_of(&self, volume_id: &str) -> Vec<Snapshot> {
        let mut snapshots: Vec<_> = self
            .snapshots
            .iter()
            .filter(|snapshot| snapshot.volume_id == volume_id)
            .cloned()
            .collect();
        snapshots.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        snapshots
    }

    fn next_snapshot_time(&self) -> DateTime<Utc> {
        let base = DateTime::<Utc>::UNIX_EPOCH;
        self.snapshots
            .iter()
            .map(|snapshot| snapshot.start_time)
            .max()
            .map_or(base, |latest| latest + Duration::seconds(1))
    }
}

#[async_trait]
impl CloudCompute for FakeCompute {
    async fn list_instances(&self, project: Option<&str>) -> Result<Vec<Instance>> {
        let state = self.state_mut();

        Ok(state
            .instances
            .iter()
            .filter(|instance| match project {
                Some(project) => instance.project() == Some(project),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn list_volumes(&self, instance_id: &str) -> Result<Vec<Volume>> {
        let state = self.state_mut();

        Ok(state
            .volumes
            .iter()
            .filter(|volume| volume.instance_id == instance_id)
            .cloned()
            .collect())
    }

    async fn list_snapshots(&self, volume_id: &str) -> Result<Vec<Snapshot>> {
        Ok(self.state_mut().snapshots_of(volume_id))
    }

    async fn create_snapshot(&self, volume_id: &str, _description: &str) -> Result<String> {
        let mut state = self.state_mut();

        if !state.volumes.iter().any(|volume| volume.id == volume_id) {
            return Err(ComputeError::NoSuchVolume {
                volume_id: volume_id.to_string(),
            }
            .into());
        }

        state.created_snapshots += 1;
        let snapshot = Snapshot {
            id: format!("snap-{:04}", state.created_snapshots),
            volume_id: volume_id.to_string(),
            state: SnapshotState::Pending,
            progress: "0%".to_string(),
            start_time: state.next_snapshot_time(),
        };
        let id = snapshot.id.clone();
        state.snapshots.push(snapshot);

        Ok(id)
    }

    async fn start_instance(&self, instance_id: &str) -> Result<()> {
        let mut state = self.state_mut();

        if state.rejected_starts.contains(instance_id) {
            return Err(ComputeError::TransitionRejected {
                instance_id: instance_id.to_string(),
                reason: "not in a state from which it can be started".to_string(),
            }
            .into());
        }

        state.instance_mut(instance_id)?.state = InstanceState::Pending;
        Ok(())
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<()> {
        let mut state = self.state_mut();

        if state.rejected_stops.contains(instance_id) {
            return Err(ComputeError::TransitionRejected {
                instance_id: instance_id.to_string(),
                reason: "not in a state from which it can be stopped".to_string(),
            }
            .into());
        }

        state.instance_mut(instance_id)?.state = InstanceState::Stopping;
        Ok(())
    }

    async fn wait_until_stopped(&self, instance_id: &str, _wait: &WaitParams) -> Result<()> {
        self.state_mut().instance_mut(instance_id)?.state = InstanceState::Stopped;
        Ok(())
    }

    async fn wait_until_running(&self, instance_id: &str, _wait: &WaitParams) -> Result<()> {
        self.state_mut().instance_mut(instance_id)?.state = InstanceState::Running;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use pretty_assertions as pa;

    fn fake() -> FakeCompute {
        let mut fake = FakeCompute::new(vec![
            project_instance("i-web", "web"),
            project_instance("i-db", "db"),
            instance("i-untagged"),
        ]);
        fake.add_volume(volume("vol-1", "i-web", 8, true));
        fake.add_volume(volume("vol-2", "i-db", 16, false));
        fake
    }

    mod list_instances {
        use super::*;

        #[tokio::test]
        async fn without_filter_returns_every_instance() {
            let instances = fake().list_instances(None).await.unwrap();

            pa::assert_eq!(
                vec!["i-web", "i-db", "i-untagged"],
                instances.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            );
        }

        #[tokio::test]
        async fn with_filter_returns_the_matching_subset() {
            let instances = fake().list_instances(Some("web")).await.unwrap();

            pa::assert_eq!(
                vec!["i-web"],
                instances.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            );
        }
    }

    mod list_snapshots {
        use super::*;

        #[tokio::test]
        async fn returns_newest_first() {
            let mut fake = fake();
            fake.add_snapshot(snapshot(
                "snap-old",
                "vol-1",
                SnapshotState::Completed,
                "2000-01-01 12:00:00",
            ));
            fake.add_snapshot(snapshot(
                "snap-new",
                "vol-1",
                SnapshotState::Pending,
                "2000-01-02 12:00:00",
            ));

            let snapshots = fake.list_snapshots("vol-1").await.unwrap();

            pa::assert_eq!(
                vec!["snap-new", "snap-old"],
                snapshots.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            );
        }
    }

    mod create_snapshot {
        use super::*;

        #[tokio::test]
        async fn created_snapshot_becomes_the_newest_and_is_pending() {
            let fake = {
                let mut fake = fake();
                fake.add_snapshot(snapshot(
                    "snap-old",
                    "vol-1",
                    SnapshotState::Completed,
                    "2000-01-01 12:00:00",
                ));
                fake
            };

            let id = fake.create_snapshot("vol-1", "test").await.unwrap();

            let snapshots = fake.snapshots_of("vol-1");
            pa::assert_eq!(id, snapshots[0].id);
            pa::assert_eq!(SnapshotState::Pending, snapshots[0].state);
        }

        #[tokio::test]
        async fn fails_for_unknown_volume() {
            let result = fake().create_snapshot("vol-nope", "test").await;

            assert!(result.is_err());
        }
    }

    mod transitions {
        use super::*;

        #[tokio::test]
        async fn stop_then_wait_settles_in_stopped() {
            let fake = fake();

            fake.stop_instance("i-web").await.unwrap();
            pa::assert_eq!(Some(InstanceState::Stopping), fake.instance_state("i-web"));

            fake.wait_until_stopped("i-web", &WaitParams::default())
                .await
                .unwrap();
            pa::assert_eq!(Some(InstanceState::Stopped), fake.instance_state("i-web"));
        }

        #[tokio::test]
        async fn injected_rejection_is_distinguishable() {
            let mut fake = fake();
            fake.reject_stop("i-web");

            let error = fake.stop_instance("i-web").await.unwrap_err();

            assert!(error.is_transition_rejection());
            pa::assert_eq!(Some(InstanceState::Running), fake.instance_state("i-web"));
        }
    }
}
