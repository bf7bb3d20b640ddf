use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::bus::EventPublisher;
use crate::core::models::BusEnvelope;
use crate::errors::RelayError;
use crate::slack::SlackMessage;

/// Channel the raw event dumps are posted to.
pub const GENERIC_CHANNEL: &str = "#sandbox2";

/// Republishes any event verbatim as an inline-code chat message.
pub struct GenericRelay<P> {
    publisher: P,
}

impl<P: EventPublisher> GenericRelay<P> {
    pub fn new(publisher: P) -> Self {
        Self { publisher }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Wrap `event` as `` `<json>` `` and publish it.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the publish call fails.
    pub async fn relay(&self, event: &Value) -> Result<(), RelayError> {
        let message = build_message(event)?;
        let envelope = BusEnvelope::for_message(&message)?;
        self.publisher.publish(&[envelope]).await
    }

    /// Lambda handler for the generic relay entrypoint.
    #[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<(), Error> {
        info!(event = %event.payload, "Generic relay received event");

        self.relay(&event.payload).await.map_err(|e| {
            error!("Failed to relay event: {}", e);
            Error::from(e)
        })
    }
}

/// Build the flat-text payload for an arbitrary event.
///
/// # Errors
///
/// Returns an error if the event cannot be serialized.
pub fn build_message(event: &Value) -> Result<SlackMessage, RelayError> {
    let serialized = serde_json::to_string(event)?;
    Ok(SlackMessage::text(GENERIC_CHANNEL, format!("`{serialized}`")))
}
