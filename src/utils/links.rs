//! AWS console deep links for Auto Scaling notifications.
//!
//! Identifiers are interpolated as received. Group names containing URL
//! reserved characters (`#`, `;`, `&`) will produce a link that lands on the
//! wrong console view.

#[must_use]
pub fn console_base(region: &str) -> String {
    format!("https://{region}.console.aws.amazon.com/ec2/home?region={region}")
}

/// Activity tab of the group's details page.
#[must_use]
pub fn auto_scaling_group_url(region: &str, group_name: &str) -> String {
    format!(
        "{}#AutoScalingGroupDetails:id={group_name};view=activity",
        console_base(region)
    )
}

#[must_use]
pub fn instance_url(region: &str, instance_id: &str) -> String {
    format!(
        "{}#InstanceDetails:instanceId={instance_id}",
        console_base(region)
    )
}

/// Slack `mrkdwn` link markup.
#[must_use]
pub fn slack_link(url: &str, label: &str) -> String {
    format!("<{url}|{label}>")
}
