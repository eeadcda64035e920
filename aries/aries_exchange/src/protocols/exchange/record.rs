use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use messages::msg_fields::protocols::common::ValidResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    kind::{ExchangeKind, ExchangeRequest},
    state::{ExchangeRole, ExchangeState},
};
use crate::{
    errors::error::{ExchangeError, ExchangeResult},
    storage::{RecordTags, StorageRecord},
};

pub const TAG_CONNECTION_ID: &str = "connection_id";
pub const TAG_ROLE: &str = "role";
pub const TAG_STATE: &str = "state";
pub const TAG_THREAD_ID: &str = "thread_id";

/// One party's view of one exchange. Only [`super::ExchangeService`] changes its state or
/// response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ExchangeRecord<K: ExchangeKind> {
    id: String,
    connection_id: String,
    thread_id: String,
    role: ExchangeRole,
    state: ExchangeState,
    request: ExchangeRequest<K::Request>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<K::Response>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: ExchangeKind> ExchangeRecord<K> {
    pub(crate) fn new(
        connection_id: &str,
        thread_id: &str,
        role: ExchangeRole,
        state: ExchangeState,
        request: ExchangeRequest<K::Request>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            connection_id: connection_id.to_string(),
            thread_id: thread_id.to_string(),
            role,
            state,
            request,
            response: None,
            created_at: now,
            updated_at: now,
            version: 0,
            kind: PhantomData,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn role(&self) -> ExchangeRole {
        self.role
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    /// Kind specific name of the current state, e.g. `question-sent`.
    pub fn state_label(&self) -> &'static str {
        K::state_label(self.state)
    }

    pub fn request(&self) -> &ExchangeRequest<K::Request> {
        &self.request
    }

    pub fn payload(&self) -> &K::Request {
        &self.request.payload
    }

    pub fn valid_responses(&self) -> &[ValidResponse] {
        &self.request.valid_responses
    }

    pub fn signature_required(&self) -> bool {
        self.request.signature_required.unwrap_or(false)
    }

    pub fn response(&self) -> Option<&K::Response> {
        self.response.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn assert_state(&self, expected: &[ExchangeState]) -> ExchangeResult<()> {
        if !expected.contains(&self.state) {
            return Err(ExchangeError::InvalidState {
                record_id: self.id.clone(),
                current: self.state,
                expected: expected.to_vec(),
            });
        }
        Ok(())
    }

    pub fn assert_role(&self, expected: ExchangeRole) -> ExchangeResult<()> {
        if self.role != expected {
            return Err(ExchangeError::InvalidRole {
                record_id: self.id.clone(),
                current: self.role,
                expected,
            });
        }
        Ok(())
    }

    pub(super) fn set_state(&mut self, state: ExchangeState) {
        self.state = state;
        self.updated_at = Utc::now();
    }

    pub(super) fn set_response(&mut self, response: K::Response) {
        self.response = Some(response);
    }
}

impl<K: ExchangeKind> StorageRecord for ExchangeRecord<K> {
    fn id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> RecordTags {
        RecordTags::new(vec![
            (TAG_CONNECTION_ID.to_owned(), self.connection_id.clone()),
            (TAG_ROLE.to_owned(), self.role.to_string()),
            (TAG_STATE.to_owned(), self.state.to_string()),
            (TAG_THREAD_ID.to_owned(), self.thread_id.clone()),
        ])
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    /// One record per thread and connection. Length-prefixed so distinct pairs never
    /// produce the same key.
    fn unique_key(&self) -> Option<String> {
        Some(format!(
            "{}:{}{}",
            self.connection_id.len(),
            self.connection_id,
            self.thread_id
        ))
    }
}
