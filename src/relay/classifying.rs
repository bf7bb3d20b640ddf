use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::bus::EventPublisher;
use crate::core::models::{AsgEvent, BusEnvelope};
use crate::errors::RelayError;
use crate::scaling::ScalingNotification;

/// Classifies Auto Scaling lifecycle events and republishes them as
/// color-coded Slack attachments.
pub struct ClassifyingRelay<P> {
    publisher: P,
}

impl<P: EventPublisher> ClassifyingRelay<P> {
    pub fn new(publisher: P) -> Self {
        Self { publisher }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Classify `event`, render it and publish one envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the publish fails.
    pub async fn relay(&self, event: &AsgEvent) -> Result<ScalingNotification, RelayError> {
        let notification = ScalingNotification::from_event(event)?;
        info!(
            environment = %notification.environment,
            cause = ?notification.cause,
            color = notification.color,
            label = %notification.label,
            "Classified scaling event"
        );

        let envelope = BusEnvelope::for_message(&notification.clone().into_message())?;
        self.publisher.publish(&[envelope]).await?;
        Ok(notification)
    }

    /// Lambda handler for the classifying relay entrypoint.
    #[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<(), Error> {
        info!(event = %event.payload, "Classifying relay received event");

        self.relay_value(event.payload).await.map(|_| ()).map_err(|e| {
            error!("Failed to relay scaling event: {}", e);
            Error::from(e)
        })
    }

    /// Decode a raw invocation payload and relay it.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidEvent`] if the payload is not shaped like an
    /// Auto Scaling notification, otherwise whatever [`Self::relay`] returns.
    pub async fn relay_value(&self, payload: Value) -> Result<ScalingNotification, RelayError> {
        let asg_event: AsgEvent = serde_json::from_value(payload)
            .map_err(|e| RelayError::InvalidEvent(e.to_string()))?;
        self.relay(&asg_event).await
    }
}
