use serde::{Deserialize, Serialize};

use crate::errors::RelayError;
use crate::slack::SlackMessage;

/// Source attached to every entry this crate puts on the bus.
pub const RELAY_SOURCE: &str = "org.prx.auto-scaling-toolkit";

/// Detail type the downstream Slack relay subscribes to.
pub const RELAY_DETAIL_TYPE: &str = "Slack Message Relay Message Payload";

/// An EC2 Auto Scaling lifecycle notification as delivered by EventBridge.
///
/// Only the fields the classifying relay reads are modelled; the rest of the
/// EventBridge envelope is ignored. Everything is optional at the serde layer so
/// that absence is reported through [`RelayError::MissingField`] instead of a
/// generic parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct AsgEvent {
    #[serde(rename = "detail-type")]
    pub detail_type: Option<String>,
    pub region: Option<String>,
    pub detail: Option<AsgEventDetail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AsgEventDetail {
    pub auto_scaling_group_name: Option<String>,
    #[serde(rename = "EC2InstanceId")]
    pub ec2_instance_id: Option<String>,
    pub cause: Option<String>,
    pub details: Option<InstanceDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceDetails {
    #[serde(rename = "Availability Zone")]
    pub availability_zone: Option<String>,
}

impl AsgEvent {
    pub fn detail_type(&self) -> Result<&str, RelayError> {
        self.detail_type
            .as_deref()
            .ok_or(RelayError::MissingField("detail-type"))
    }

    pub fn region(&self) -> Result<&str, RelayError> {
        self.region.as_deref().ok_or(RelayError::MissingField("region"))
    }

    pub fn group_name(&self) -> Result<&str, RelayError> {
        self.detail
            .as_ref()
            .and_then(|d| d.auto_scaling_group_name.as_deref())
            .ok_or(RelayError::MissingField("AutoScalingGroupName"))
    }

    pub fn instance_id(&self) -> Result<&str, RelayError> {
        self.detail
            .as_ref()
            .and_then(|d| d.ec2_instance_id.as_deref())
            .ok_or(RelayError::MissingField("EC2InstanceId"))
    }

    /// Free-text scaling cause; an absent cause reads as empty.
    #[must_use]
    pub fn cause(&self) -> &str {
        self.detail
            .as_ref()
            .and_then(|d| d.cause.as_deref())
            .unwrap_or("")
    }

    #[must_use]
    pub fn availability_zone(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.details.as_ref())
            .and_then(|d| d.availability_zone.as_deref())
    }
}

/// One `PutEvents` entry: the chat payload wrapped for the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusEnvelope {
    pub source: String,
    pub detail_type: String,
    /// Serialized [`SlackMessage`].
    pub detail: String,
}

impl BusEnvelope {
    /// # Errors
    ///
    /// Returns an error if the message cannot be serialized to JSON.
    pub fn for_message(message: &SlackMessage) -> Result<Self, RelayError> {
        Ok(Self {
            source: RELAY_SOURCE.to_string(),
            detail_type: RELAY_DETAIL_TYPE.to_string(),
            detail: serde_json::to_string(message)?,
        })
    }

    /// Decode the carried chat payload.
    ///
    /// # Errors
    ///
    /// Returns an error if `detail` is not a serialized [`SlackMessage`].
    pub fn message(&self) -> Result<SlackMessage, RelayError> {
        Ok(serde_json::from_str(&self.detail)?)
    }
}
