use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

pub const COLOR_NEUTRAL: &str = "#53adfb";
pub const COLOR_SUCCESS: &str = "#2eb886";
pub const COLOR_FAILURE: &str = "#a30200";

pub const USER_HEALTH_CHECK_LINE: &str =
    "Taken out of service in response to a user health-check.";
pub const USER_REQUEST_LINE: &str = "Taken out of service in response to a user request.";

/// Attachment color for an event's `detail-type`.
///
/// Both checks run; `Unsuccessful` is applied last so it wins when both
/// substrings appear. Matching is case-sensitive, so `Unsuccessful` on its own
/// does not count as `Successful`.
#[must_use]
pub fn color_for(detail_type: &str) -> &'static str {
    let mut color = COLOR_NEUTRAL;
    if detail_type.contains("Successful") {
        color = COLOR_SUCCESS;
    }
    if detail_type.contains("Unsuccessful") {
        color = COLOR_FAILURE;
    }
    color
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Staging,
    Unknown,
}

impl Environment {
    /// `prod` is checked before `stag`.
    #[must_use]
    pub fn from_group_name(group_name: &str) -> Self {
        if group_name.contains("prod") {
            Environment::Production
        } else if group_name.contains("stag") {
            Environment::Staging
        } else {
            Environment::Unknown
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "prod",
            Environment::Staging => "stag",
            Environment::Unknown => "????",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingCause {
    CapacityChange { from: u64, to: u64 },
    UserHealthCheck,
    UserRequest,
    Unclassified,
}

impl ScalingCause {
    /// Classify a free-text `Cause`. Rules run in order and the first match wins.
    #[must_use]
    pub fn classify(cause: &str) -> Self {
        CAUSE_RULES
            .iter()
            .find_map(|(pattern, handler)| pattern.captures(cause).and_then(|caps| handler(&caps)))
            .unwrap_or(ScalingCause::Unclassified)
    }

    /// Only capacity changes carry a direction; shrinking is `In`.
    #[must_use]
    pub fn direction(&self) -> Option<ScaleDirection> {
        match *self {
            ScalingCause::CapacityChange { from, to } if from > to => Some(ScaleDirection::In),
            ScalingCause::CapacityChange { .. } => Some(ScaleDirection::Out),
            _ => None,
        }
    }

    /// Suffix for the title label: `" IN"`, `" OUT"` or nothing.
    #[must_use]
    pub fn direction_indicator(&self) -> &'static str {
        match self.direction() {
            Some(ScaleDirection::In) => " IN",
            Some(ScaleDirection::Out) => " OUT",
            None => "",
        }
    }

    #[must_use]
    pub fn summary_line(&self) -> Option<String> {
        match self {
            ScalingCause::CapacityChange { from, to } => {
                Some(format!("Capacity change: {from} → {to}"))
            }
            ScalingCause::UserHealthCheck => Some(USER_HEALTH_CHECK_LINE.to_string()),
            ScalingCause::UserRequest => Some(USER_REQUEST_LINE.to_string()),
            ScalingCause::Unclassified => None,
        }
    }
}

type CauseHandler = fn(&Captures<'_>) -> Option<ScalingCause>;

static CAUSE_RULES: Lazy<Vec<(Regex, CauseHandler)>> = Lazy::new(|| {
    vec![
        (
            compile(r"capacity from (\d+) to (\d+)"),
            capacity_change as CauseHandler,
        ),
        (
            compile(r"taken out of service in response to a user health-check"),
            user_health_check as CauseHandler,
        ),
        (
            compile(r"taken out of service in response to a user request"),
            user_request as CauseHandler,
        ),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
}

// Counts too large for u64 fall through to the next rule.
fn capacity_change(caps: &Captures<'_>) -> Option<ScalingCause> {
    let from = caps.get(1)?.as_str().parse().ok()?;
    let to = caps.get(2)?.as_str().parse().ok()?;
    Some(ScalingCause::CapacityChange { from, to })
}

fn user_health_check(_: &Captures<'_>) -> Option<ScalingCause> {
    Some(ScalingCause::UserHealthCheck)
}

fn user_request(_: &Captures<'_>) -> Option<ScalingCause> {
    Some(ScalingCause::UserRequest)
}
