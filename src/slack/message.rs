//! Chat message payloads handed to the downstream Slack relay.
//!
//! The shapes mirror Slack's `chat.postMessage` arguments closely enough that
//! the downstream relay can forward `detail` as-is.

use serde::{Deserialize, Serialize};

pub const RELAY_USERNAME: &str = "AWS Auto Scaling";
pub const RELAY_ICON_EMOJI: &str = ":ops-autoscaling:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub username: String,
    pub icon_emoji: String,
    pub channel: String,
    pub mrkdwn: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub color: String,
    pub fallback: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Section { text: TextObject },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl SlackMessage {
    /// A flat-text message from the relay identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use asg_relay::slack::SlackMessage;
    ///
    /// let message = SlackMessage::text("#ops", "`{}`");
    /// assert!(message.mrkdwn);
    /// assert!(message.attachments.is_none());
    /// ```
    #[must_use]
    pub fn text(channel: &str, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::empty(channel)
        }
    }

    /// A message carrying a single attachment and no top-level text.
    #[must_use]
    pub fn with_attachment(channel: &str, attachment: Attachment) -> Self {
        Self {
            attachments: Some(vec![attachment]),
            ..Self::empty(channel)
        }
    }

    fn empty(channel: &str) -> Self {
        Self {
            username: RELAY_USERNAME.to_string(),
            icon_emoji: RELAY_ICON_EMOJI.to_string(),
            channel: channel.to_string(),
            mrkdwn: true,
            text: None,
            attachments: None,
        }
    }
}

impl Block {
    #[must_use]
    pub fn markdown_section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::Mrkdwn { text: text.into() },
        }
    }

    /// The markdown carried by this block.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Block::Section {
                text: TextObject::Mrkdwn { text },
            } => text,
        }
    }
}
