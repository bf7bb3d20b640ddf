mod common;

use asg_relay::core::models::{RELAY_DETAIL_TYPE, RELAY_SOURCE};
use asg_relay::errors::RelayError;
use asg_relay::relay::generic::{GENERIC_CHANNEL, build_message};
use asg_relay::relay::{ClassifyingRelay, GenericRelay};
use common::{FailingPublisher, RecordingPublisher};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;

#[tokio::test]
async fn test_generic_relay_wraps_event_in_code_span() {
    let relay = GenericRelay::new(RecordingPublisher::default());

    relay.relay(&json!({"foo": "bar"})).await.unwrap();

    let calls = relay.publisher().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].source, RELAY_SOURCE);
    assert_eq!(calls[0][0].detail_type, RELAY_DETAIL_TYPE);

    let message = relay.publisher().only_message();
    assert_eq!(message.text.as_deref(), Some("`{\"foo\":\"bar\"}`"));
    assert_eq!(message.channel, GENERIC_CHANNEL);
    assert!(message.mrkdwn);
    assert!(message.attachments.is_none());
}

#[tokio::test]
async fn test_generic_relay_preserves_key_order() {
    let relay = GenericRelay::new(RecordingPublisher::default());
    let event: serde_json::Value =
        serde_json::from_str(r#"{"zeta": 1, "alpha": {"b": 2, "a": 1}}"#).unwrap();

    relay.relay(&event).await.unwrap();

    let message = relay.publisher().only_message();
    assert_eq!(
        message.text.as_deref(),
        Some(r#"`{"zeta":1,"alpha":{"b":2,"a":1}}`"#)
    );
}

#[test]
fn test_generic_relay_number_formatting() {
    // serde_json keeps the float marker and writes exponents with a sign.
    let message = build_message(&json!({"capacity": 1.0, "big": 1e21})).unwrap();
    assert_eq!(
        message.text.as_deref(),
        Some(r#"`{"capacity":1.0,"big":1e+21}`"#)
    );
}

#[tokio::test]
async fn test_generic_relay_detail_is_serialized_payload() {
    let relay = GenericRelay::new(RecordingPublisher::default());
    relay.relay(&json!([1, 2])).await.unwrap();

    let detail: serde_json::Value =
        serde_json::from_str(&relay.publisher().calls()[0][0].detail).unwrap();
    assert_eq!(
        detail,
        json!({
            "username": "AWS Auto Scaling",
            "icon_emoji": ":ops-autoscaling:",
            "channel": "#sandbox2",
            "mrkdwn": true,
            "text": "`[1,2]`"
        })
    );
}

#[tokio::test]
async fn test_generic_relay_propagates_publish_failure() {
    let relay = GenericRelay::new(FailingPublisher);
    let err = relay.relay(&json!({"foo": "bar"})).await.unwrap_err();
    assert!(matches!(err, RelayError::Publish(_)));
}

#[tokio::test]
async fn test_generic_handle_publishes_invocation_payload() {
    let relay = GenericRelay::new(RecordingPublisher::default());

    relay
        .handle(LambdaEvent::new(json!({"foo": "bar"}), Context::default()))
        .await
        .unwrap();

    let message = relay.publisher().only_message();
    assert_eq!(message.text.as_deref(), Some("`{\"foo\":\"bar\"}`"));
}

#[tokio::test]
async fn test_generic_handle_surfaces_publish_failure_as_lambda_error() {
    let relay = GenericRelay::new(FailingPublisher);

    let err = relay
        .handle(LambdaEvent::new(json!({"foo": "bar"}), Context::default()))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to publish to event bus: ThrottlingException: Rate exceeded"
    );
}

fn scale_out_payload() -> serde_json::Value {
    json!({
        "detail-type": "EC2 Instance Launch Successful",
        "source": "aws.autoscaling",
        "region": "eu-west-2",
        "detail": {
            "AutoScalingGroupName": "feeder-prod-asg",
            "EC2InstanceId": "i-0feed",
            "Cause": "changing the desired capacity from 1 to 2.",
            "Details": { "Availability Zone": "eu-west-2b" }
        }
    })
}

#[tokio::test]
async fn test_classifying_relay_publishes_attachment_message() {
    let relay = ClassifyingRelay::new(RecordingPublisher::default());

    let notification = relay.relay_value(scale_out_payload()).await.unwrap();
    assert_eq!(
        notification.label,
        "ASG OUT » Europe (London) » prod » EC2 INSTANCE LAUNCH SUCCESSFUL"
    );

    let calls = relay.publisher().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[0][0].source, RELAY_SOURCE);

    let detail: serde_json::Value = serde_json::from_str(&calls[0][0].detail).unwrap();
    assert_eq!(detail["mrkdwn"], true);
    assert_eq!(detail["channel"], "G2QHC11SM");
    assert!(detail.get("text").is_none());

    let attachment = &detail["attachments"][0];
    assert_eq!(attachment["color"], "#2eb886");
    assert_eq!(attachment["fallback"], notification.label.as_str());
    assert_eq!(attachment["blocks"].as_array().unwrap().len(), 2);
    assert_eq!(attachment["blocks"][0]["type"], "section");
    assert_eq!(attachment["blocks"][0]["text"]["type"], "mrkdwn");
    assert_eq!(attachment["blocks"][0]["text"]["text"], notification.title().as_str());
    assert_eq!(
        attachment["blocks"][1]["text"]["text"],
        "Instance: <https://eu-west-2.console.aws.amazon.com/ec2/home?region=eu-west-2#InstanceDetails:instanceId=i-0feed|i-0feed> (eu-west-2b)\nCapacity change: 1 → 2"
    );
}

#[tokio::test]
async fn test_classifying_relay_missing_instance_does_not_publish() {
    let relay = ClassifyingRelay::new(RecordingPublisher::default());
    let mut payload = scale_out_payload();
    payload["detail"]
        .as_object_mut()
        .unwrap()
        .remove("EC2InstanceId");

    let err = relay.relay_value(payload).await.unwrap_err();
    assert!(matches!(err, RelayError::MissingField("EC2InstanceId")));
    assert!(relay.publisher().calls().is_empty());
}

#[tokio::test]
async fn test_classifying_relay_rejects_malformed_payload() {
    let relay = ClassifyingRelay::new(RecordingPublisher::default());
    let err = relay
        .relay_value(json!({"detail-type": 42, "detail": "nope"}))
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::InvalidEvent(_)));
    assert!(relay.publisher().calls().is_empty());
}

#[tokio::test]
async fn test_classifying_relay_propagates_publish_failure() {
    let relay = ClassifyingRelay::new(FailingPublisher);
    let err = relay.relay_value(scale_out_payload()).await.unwrap_err();
    assert!(matches!(err, RelayError::Publish(msg) if msg.contains("ThrottlingException")));
}

#[tokio::test]
async fn test_classifying_handle_publishes_invocation_payload() {
    let relay = ClassifyingRelay::new(RecordingPublisher::default());

    relay
        .handle(LambdaEvent::new(scale_out_payload(), Context::default()))
        .await
        .unwrap();

    let message = relay.publisher().only_message();
    let attachments = message.attachments.expect("attachments");
    assert_eq!(attachments[0].color, "#2eb886");
    assert_eq!(
        attachments[0].fallback,
        "ASG OUT » Europe (London) » prod » EC2 INSTANCE LAUNCH SUCCESSFUL"
    );
}

#[tokio::test]
async fn test_classifying_handle_rejects_malformed_payload_as_lambda_error() {
    let relay = ClassifyingRelay::new(RecordingPublisher::default());

    let err = relay
        .handle(LambdaEvent::new(json!({"detail": "nope"}), Context::default()))
        .await
        .unwrap_err();
    assert!(
        err.to_string().starts_with("Failed to parse incoming event:"),
        "unexpected error: {err}"
    );
    assert!(relay.publisher().calls().is_empty());
}

#[tokio::test]
async fn test_classifying_handle_missing_group_name_fails_invocation() {
    let relay = ClassifyingRelay::new(RecordingPublisher::default());
    let mut payload = scale_out_payload();
    payload["detail"]
        .as_object_mut()
        .unwrap()
        .remove("AutoScalingGroupName");

    let err = relay
        .handle(LambdaEvent::new(payload, Context::default()))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Event is missing required field: AutoScalingGroupName"
    );
    assert!(relay.publisher().calls().is_empty());
}
