use std::env;

use crate::errors::RelayError;

#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// Target bus for `PutEvents`; the account's default bus when unset.
    pub event_bus_name: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        let event_bus_name = match env::var("EVENT_BUS_NAME") {
            Ok(name) if name.trim().is_empty() => {
                return Err(RelayError::Config(
                    "EVENT_BUS_NAME: must not be empty when set".to_string(),
                ));
            }
            Ok(name) => Some(name),
            Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(RelayError::Config(format!("EVENT_BUS_NAME: {}", e))),
        };

        Ok(Self { event_bus_name })
    }
}
