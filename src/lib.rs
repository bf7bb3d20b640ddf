//! Auto Scaling notification relays for Slack.
//!
//! This crate implements two AWS Lambda functions that turn EC2 Auto Scaling
//! lifecycle events into Slack message payloads and put them back on
//! EventBridge, where a separate relay delivers them to Slack:
//! 1. A generic relay that dumps the raw event as inline code
//! 2. A classifying relay that derives direction, environment and cause and
//!    renders a color-coded attachment with console links
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - EventBridge `PutEvents` for handing messages to the delivery relay
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use asg_relay::bus::EventBridgePublisher;
//! use asg_relay::core::config::RelayConfig;
//! use asg_relay::relay::ClassifyingRelay;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     asg_relay::setup_logging();
//!
//!     let config = RelayConfig::from_env()?;
//!     let relay = ClassifyingRelay::new(EventBridgePublisher::from_config(&config).await);
//!
//!     let event = serde_json::from_str(r#"{
//!         "detail-type": "EC2 Instance Launch Successful",
//!         "region": "us-east-1",
//!         "detail": {
//!             "AutoScalingGroupName": "web-prod-asg",
//!             "EC2InstanceId": "i-0123456789abcdef0",
//!             "Cause": "changing the desired capacity from 2 to 3."
//!         }
//!     }"#)?;
//!     let notification = relay.relay(&event).await?;
//!     println!("{}", notification.label);
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod bus;
pub mod core;
pub mod errors;
pub mod relay;
pub mod scaling;
pub mod slack;
pub mod utils;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Timestamps are left to `CloudWatch`. Calling this more than once is a no-op.
///
/// # Example
///
/// ```
/// asg_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
