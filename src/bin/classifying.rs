// Lambda entry point for the classifying relay

use asg_relay::bus::EventBridgePublisher;
use asg_relay::core::config::RelayConfig;
use asg_relay::relay::ClassifyingRelay;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    asg_relay::setup_logging();

    let config = RelayConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let relay = ClassifyingRelay::new(EventBridgePublisher::from_config(&config).await);
    let relay = &relay;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        relay.handle(event).await
    }))
    .await
}
