//! Slack message payloads

pub mod message;

// Re-export main types for convenience
pub use message::{Attachment, Block, SlackMessage, TextObject};
