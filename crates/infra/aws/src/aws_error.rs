use aws_sdk_ec2::error::{ProvideErrorMetadata, SdkError};
use fleetsnap_core::error::{ComputeError, Error};

/// EC2 error codes for a start/stop request that is invalid for the
/// instance's current state.
const TRANSITION_REJECTION_CODES: &[&str] = &["IncorrectInstanceState", "IncorrectState"];

pub(super) fn map_aws_error<E>(operation_name: &'static str, sdk_error: SdkError<E>) -> Error
where
    E: std::error::Error + Send + Sync + 'static + ProvideErrorMetadata,
{
    match sdk_error {
        SdkError::ServiceError(service_error) => {
            let error = service_error.into_err();
            let code_string = error.code().unwrap_or_default();
            let message_string = error.message().unwrap_or_default().to_string();

            match code_string {
                "UnauthorizedOperation" => Error::Authentication,
                "AccessDeniedException" => Error::Authorization {
                    operation: operation_name.to_string(),
                },
                "ThrottlingException" | "RequestLimitExceeded" => Error::Quota,
                _ => Error::Unknown {
                    operation_name: operation_name.to_string(),
                    detail: message_string,
                },
            }
        }

        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => Error::Transient {
            operation_name: operation_name.to_string(),
        },

        other => Error::Unknown {
            operation_name: operation_name.to_string(),
            detail: other.to_string(),
        },
    }
}

/// Like [`map_aws_error`], but surfaces the provider's "wrong current state"
/// rejection as the distinguishable [`ComputeError::TransitionRejected`].
pub(super) fn map_transition_error<E>(
    operation_name: &'static str,
    instance_id: &str,
    sdk_error: SdkError<E>,
) -> Error
where
    E: std::error::Error + Send + Sync + 'static + ProvideErrorMetadata,
{
    if let Some(service_error) = sdk_error.as_service_error() {
        let code = service_error.code().unwrap_or_default();

        if TRANSITION_REJECTION_CODES.contains(&code) {
            return ComputeError::TransitionRejected {
                instance_id: instance_id.to_string(),
                reason: service_error
                    .message()
                    .unwrap_or("instance is not in a valid state for this request")
                    .to_string(),
            }
            .into();
        }
    }

    map_aws_error(operation_name, sdk_error)
}
