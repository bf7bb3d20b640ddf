use crate::core::models::AsgEvent;
use crate::errors::RelayError;
use crate::scaling::classify::{Environment, ScalingCause, color_for};
use crate::slack::{Attachment, Block, SlackMessage};
use crate::utils::links::{auto_scaling_group_url, instance_url, slack_link};
use crate::utils::regions::display_region;

/// Channel ID the classified notifications are posted to.
pub const NOTIFICATION_CHANNEL: &str = "G2QHC11SM";

/// Everything derived from one lifecycle event, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingNotification {
    pub color: &'static str,
    pub environment: Environment,
    pub cause: ScalingCause,
    /// Title text without link markup; doubles as the attachment fallback.
    pub label: String,
    pub group_url: String,
    pub body: String,
}

impl ScalingNotification {
    /// Classify an Auto Scaling lifecycle event.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MissingField`] if the event lacks its
    /// `detail-type`, `region`, `AutoScalingGroupName` or `EC2InstanceId`.
    pub fn from_event(event: &AsgEvent) -> Result<Self, RelayError> {
        let detail_type = event.detail_type()?;
        let region = event.region()?;
        let group_name = event.group_name()?;
        let instance_id = event.instance_id()?;

        let environment = Environment::from_group_name(group_name);
        let cause = ScalingCause::classify(event.cause());

        let label = format!(
            "ASG{} » {} » {} » {}",
            cause.direction_indicator(),
            display_region(region),
            environment,
            detail_type.to_uppercase()
        );

        let mut instance_line = format!(
            "Instance: {}",
            slack_link(&instance_url(region, instance_id), instance_id)
        );
        if let Some(zone) = event.availability_zone() {
            instance_line.push_str(&format!(" ({zone})"));
        }

        let mut lines = vec![instance_line];
        lines.extend(cause.summary_line());

        Ok(Self {
            color: color_for(detail_type),
            environment,
            cause,
            label,
            group_url: auto_scaling_group_url(region, group_name),
            body: lines.join("\n"),
        })
    }

    /// Bold title linked to the group's activity page.
    #[must_use]
    pub fn title(&self) -> String {
        format!("*{}*", slack_link(&self.group_url, &self.label))
    }

    #[must_use]
    pub fn into_message(self) -> SlackMessage {
        let title = self.title();
        SlackMessage::with_attachment(
            NOTIFICATION_CHANNEL,
            Attachment {
                color: self.color.to_string(),
                fallback: self.label,
                blocks: vec![Block::markdown_section(title), Block::markdown_section(self.body)],
            },
        )
    }
}
