use std::fmt;

use messages::error::ValidationError;
use thiserror::Error as ThisError;

use crate::{
    connection::ConnectionState,
    protocols::exchange::state::{ExchangeRole, ExchangeState},
};

pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// What was looked up when a record could not be found.
pub struct NotFoundInfo {
    category: String,
    lookup: String,
}

impl NotFoundInfo {
    pub fn new(category: &str, lookup: impl Into<String>) -> Self {
        Self {
            category: category.to_string(),
            lookup: lookup.into(),
        }
    }
}

impl fmt::Debug for NotFoundInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category: {}, lookup: {}", self.category, self.lookup)
    }
}

impl fmt::Display for NotFoundInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub(crate) struct StateList<'a>(pub &'a [ExchangeState]);

impl fmt::Display for StateList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(AsRef::as_ref).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}

#[derive(Debug, ThisError)]
pub enum ExchangeError {
    #[error("Record not found: {0}")]
    NotFound(NotFoundInfo),
    #[error("Duplicate record in {category}: {details}")]
    Duplicate { category: String, details: String },
    #[error("Record {record_id} in {category} already holds unique key {key}")]
    UniqueKeyTaken {
        category: String,
        key: String,
        record_id: String,
    },
    #[error("Record {record_id} already exists for thread {thread_id} on connection {connection_id}")]
    AlreadyExists {
        record_id: String,
        thread_id: String,
        connection_id: String,
    },
    #[error("Record {record_id} is in state {current}, expected one of {}", StateList(.expected))]
    InvalidState {
        record_id: String,
        current: ExchangeState,
        expected: Vec<ExchangeState>,
    },
    #[error("Record {record_id} has role {current}, expected {expected}")]
    InvalidRole {
        record_id: String,
        current: ExchangeRole,
        expected: ExchangeRole,
    },
    #[error("Response rejected for record {record_id}: {reason}")]
    InvalidResponse { record_id: String, reason: String },
    #[error("Connection {connection_id} is not ready, current state: {state}")]
    ConnectionNotReady {
        connection_id: String,
        state: ConnectionState,
    },
    #[error("No connection associated with inbound message {0}")]
    NoConnection(String),
    #[error("Record {record_id} was modified concurrently: stored version {stored}, given version {given}")]
    Conflict {
        record_id: String,
        stored: u64,
        given: u64,
    },
    #[error("Message could not be delivered: {0}")]
    DeliveryFailed(String),
    #[error("Action not supported: {0}")]
    ActionNotSupported(String),
    #[error("Invalid message: {0}")]
    InvalidMessage(#[from] ValidationError),
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Unable to lock record store {0}")]
    LockError(String),
}

impl ExchangeError {
    pub fn not_found(category: &str, lookup: impl Into<String>) -> Self {
        Self::NotFound(NotFoundInfo::new(category, lookup))
    }

    pub fn duplicate(category: &str, details: impl Into<String>) -> Self {
        Self::Duplicate {
            category: category.to_string(),
            details: details.into(),
        }
    }

    pub fn action_not_supported(action: impl Into<String>) -> Self {
        Self::ActionNotSupported(action.into())
    }
}
