use aws_sdk_eventbridge::error::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Event is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to parse incoming event: {0}")]
    InvalidEvent(String),

    #[error("Failed to serialize message payload: {0}")]
    Serialization(String),

    #[error("Failed to publish to event bus: {0}")]
    Publish(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Serialization(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E> From<SdkError<E>> for RelayError
where
    E: std::fmt::Display,
{
    fn from(error: SdkError<E>) -> Self {
        RelayError::Publish(error.to_string())
    }
}
