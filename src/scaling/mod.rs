//! Auto Scaling event classification and notification rendering

pub mod classify;
pub mod notification;

pub use classify::{Environment, ScaleDirection, ScalingCause, color_for};
pub use notification::{NOTIFICATION_CHANNEL, ScalingNotification};
