//! The slice of connection handling exchanges depend on: finding a connection by id and
//! checking that it can carry messages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use typed_builder::TypedBuilder;

use crate::{
    errors::error::{ExchangeError, ExchangeResult},
    storage::{RecordTags, StorageRecord},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ConnectionState {
    Invited,
    Requested,
    Responded,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ConnectionRecord {
    #[builder(setter(into))]
    pub id: String,
    pub state: ConnectionState,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub their_label: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub version: u64,
}

impl ConnectionRecord {
    pub fn is_ready(&self) -> bool {
        self.state == ConnectionState::Completed
    }

    pub fn assert_ready(&self) -> ExchangeResult<()> {
        if !self.is_ready() {
            return Err(ExchangeError::ConnectionNotReady {
                connection_id: self.id.clone(),
                state: self.state,
            });
        }
        Ok(())
    }
}

impl StorageRecord for ConnectionRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> RecordTags {
        let mut tags = RecordTags::default();
        tags.add("state", self.state.as_ref());
        if let Some(label) = &self.their_label {
            tags.add("their_label", label.as_str());
        }
        tags
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}

#[async_trait]
pub trait ConnectionLookup: Send + Sync {
    async fn get_by_id(&self, connection_id: &str) -> ExchangeResult<ConnectionRecord>;
}
