use aries_exchange::protocols::exchange::events::DEFAULT_EVENT_CAPACITY;
use messages::msg_types::{Protocol, ProtocolName};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use typed_builder::TypedBuilder;

use crate::error::{AgentError, AgentErrorKind, AgentResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct AgentConfig {
    #[builder(setter(into))]
    pub label: String,
    /// Buffered events per protocol before slow subscribers start lagging.
    #[builder(default = DEFAULT_EVENT_CAPACITY)]
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
    #[builder(default = all_protocols())]
    #[serde(default = "all_protocols")]
    pub enabled_protocols: Vec<Protocol>,
}

fn default_event_channel_capacity() -> usize {
    DEFAULT_EVENT_CAPACITY
}

fn all_protocols() -> Vec<Protocol> {
    ProtocolName::iter().map(Protocol::new).collect()
}

impl AgentConfig {
    pub fn from_json(json: &str) -> AgentResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AgentResult<()> {
        if self.label.trim().is_empty() {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidConfig,
                "Agent label must not be empty",
            ));
        }
        if self.event_channel_capacity == 0 {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidConfig,
                "Event channel capacity must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn is_enabled(&self, name: ProtocolName) -> bool {
        self.enabled_protocols
            .iter()
            .any(|protocol| protocol.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_every_protocol() {
        let config = AgentConfig::from_json(r#"{"label": "alice"}"#).unwrap();

        assert_eq!(config.event_channel_capacity, DEFAULT_EVENT_CAPACITY);
        assert_eq!(config.enabled_protocols.len(), 4);
        assert!(ProtocolName::iter().all(|name| config.is_enabled(name)));
        assert_eq!(config, AgentConfig::builder().label("alice").build());
    }

    #[test]
    fn test_enabled_protocols_parsed_from_uris() {
        let config = AgentConfig::from_json(
            r#"{
                "label": "bob",
                "event_channel_capacity": 8,
                "enabled_protocols": ["https://didcomm.org/survey/1.0"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.event_channel_capacity, 8);
        assert!(config.is_enabled(ProtocolName::Survey));
        assert!(!config.is_enabled(ProtocolName::QuestionAnswer));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = AgentConfig::from_json(r#"{"label": " "}"#).unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::InvalidConfig);

        let err = AgentConfig::from_json(r#"{"label": "a", "event_channel_capacity": 0}"#)
            .unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::InvalidConfig);

        let err = AgentConfig::from_json(
            r#"{"label": "a", "enabled_protocols": ["https://didcomm.org/connections/1.0"]}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::SerializationError);
    }
}
