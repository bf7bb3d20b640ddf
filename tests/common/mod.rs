#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use asg_relay::bus::EventPublisher;
use asg_relay::core::models::BusEnvelope;
use asg_relay::errors::RelayError;
use asg_relay::slack::SlackMessage;

/// In-memory publisher that records every call.
#[derive(Default)]
pub struct RecordingPublisher {
    calls: Mutex<Vec<Vec<BusEnvelope>>>,
}

impl RecordingPublisher {
    pub fn calls(&self) -> Vec<Vec<BusEnvelope>> {
        self.calls.lock().unwrap().clone()
    }

    /// The message from the single entry of the single publish call.
    pub fn only_message(&self) -> SlackMessage {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one publish call");
        assert_eq!(calls[0].len(), 1, "expected exactly one entry");
        calls[0][0].message().unwrap()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, entries: &[BusEnvelope]) -> Result<(), RelayError> {
        self.calls.lock().unwrap().push(entries.to_vec());
        Ok(())
    }
}

/// Publisher standing in for a throttled or unauthorized bus.
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _entries: &[BusEnvelope]) -> Result<(), RelayError> {
        Err(RelayError::Publish("ThrottlingException: Rate exceeded".to_string()))
    }
}
