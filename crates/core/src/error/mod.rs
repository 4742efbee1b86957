mod compute;

pub use compute::ComputeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InputOutput(#[from] std::io::Error),

    #[error(transparent)]
    Compute(#[from] ComputeError),

    #[error("authorization denied: {operation}")]
    Authorization { operation: String },

    #[error("authentication failed")]
    Authentication,

    #[error("rate limit or quota exceeded")]
    Quota,

    #[error("transient error during {operation_name}")]
    Transient { operation_name: String },

    #[error("unexpected error during {operation_name}: {detail}")]
    Unknown {
        operation_name: String,
        detail: String,
    },
}

impl Error {
    /// True for the provider's client-side "wrong current state" rejection of
    /// a start/stop request.
    pub fn is_transition_rejection(&self) -> bool {
        matches!(
            self,
            Error::Compute(ComputeError::TransitionRejected { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
