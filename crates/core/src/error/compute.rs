use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("instance {instance_id} rejected the state transition: {reason}")]
    TransitionRejected { instance_id: String, reason: String },

    #[error("failed to wait for instance {instance_id} to become {target}: {reason}")]
    WaitFailed {
        instance_id: String,
        target: String,
        reason: String,
    },

    #[error("instance listing failed: {reason}")]
    DescribeInstancesFailed { reason: String },

    #[error("volume listing failed for instance {instance_id}: {reason}")]
    DescribeVolumesFailed { instance_id: String, reason: String },

    #[error("snapshot listing failed for volume {volume_id}: {reason}")]
    DescribeSnapshotsFailed { volume_id: String, reason: String },

    #[error("snapshot creation failed for volume {volume_id}: {reason}")]
    SnapshotCreateFailed { volume_id: String, reason: String },

    #[error("instance missing required identifier")]
    MissingInstanceIdentifier,

    #[error("volume missing required identifier")]
    MissingVolumeIdentifier,

    #[error("snapshot missing required identifier")]
    MissingSnapshotIdentifier,

    #[error("no such instance: {instance_id}")]
    NoSuchInstance { instance_id: String },

    #[error("no such volume: {volume_id}")]
    NoSuchVolume { volume_id: String },
}
