use async_trait::async_trait;
use aws_sdk_eventbridge::Client as EventBridgeClient;
use aws_sdk_eventbridge::operation::put_events::PutEventsOutput;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use tracing::{error, info};

use super::EventPublisher;
use crate::core::config::RelayConfig;
use crate::core::models::BusEnvelope;
use crate::errors::RelayError;

/// `PutEvents` publisher. Build once per process and hand to the relay.
#[derive(Debug, Clone)]
pub struct EventBridgePublisher {
    client: EventBridgeClient,
    event_bus_name: Option<String>,
}

impl EventBridgePublisher {
    #[must_use]
    pub fn new(client: EventBridgeClient, event_bus_name: Option<String>) -> Self {
        Self {
            client,
            event_bus_name,
        }
    }

    /// Load AWS settings from the environment and build a client.
    pub async fn from_config(config: &RelayConfig) -> Self {
        let shared_config = aws_config::from_env().load().await;
        Self::new(
            EventBridgeClient::new(&shared_config),
            config.event_bus_name.clone(),
        )
    }

    fn request_entry(&self, envelope: &BusEnvelope) -> PutEventsRequestEntry {
        PutEventsRequestEntry::builder()
            .source(&envelope.source)
            .detail_type(&envelope.detail_type)
            .detail(&envelope.detail)
            .set_event_bus_name(self.event_bus_name.clone())
            .build()
    }
}

#[async_trait]
impl EventPublisher for EventBridgePublisher {
    async fn publish(&self, entries: &[BusEnvelope]) -> Result<(), RelayError> {
        let request_entries: Vec<PutEventsRequestEntry> =
            entries.iter().map(|e| self.request_entry(e)).collect();

        let output = self
            .client
            .put_events()
            .set_entries(Some(request_entries))
            .send()
            .await?;

        if let Err(e) = check_rejections(&output) {
            error!("Event bus rejected entries: {}", e);
            return Err(e);
        }

        info!(
            entry_count = entries.len(),
            event_bus = self.event_bus_name.as_deref().unwrap_or("default"),
            "Published to event bus"
        );
        Ok(())
    }
}

/// Per-entry rejections as `code: message`.
fn rejected_entries(output: &PutEventsOutput) -> Vec<String> {
    output
        .entries()
        .iter()
        .filter_map(|entry| {
            entry.error_code().map(|code| {
                format!("{}: {}", code, entry.error_message().unwrap_or("no message"))
            })
        })
        .collect()
}

// PutEvents reports per-entry rejections inside a successful response.
fn check_rejections(output: &PutEventsOutput) -> Result<(), RelayError> {
    let rejected = rejected_entries(output);
    if rejected.is_empty() {
        Ok(())
    } else {
        Err(RelayError::Publish(rejected.join("; ")))
    }
}
