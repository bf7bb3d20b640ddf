//! Event bus publishing

pub mod eventbridge;

use async_trait::async_trait;

use crate::core::models::BusEnvelope;
use crate::errors::RelayError;

pub use eventbridge::EventBridgePublisher;

/// Outbound seam for relays. One call per invocation; no retries.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, entries: &[BusEnvelope]) -> Result<(), RelayError>;
}
