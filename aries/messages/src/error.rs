use thiserror::Error as ThisError;

pub type MsgTypeResult<T> = Result<T, MsgTypeError>;

/// Errors raised while resolving the `@type` of a message.
#[derive(Debug, PartialEq, ThisError)]
pub enum MsgTypeError {
    #[error("Unknown protocol name: {0}")]
    UnknownProtocol(String),
    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(String),
    #[error("Unknown message kind: {0}")]
    UnknownKind(String),
    #[error("Invalid message type: {0}")]
    InvalidMsgType(String),
}

impl MsgTypeError {
    pub fn unknown_protocol(name: impl Into<String>) -> Self {
        Self::UnknownProtocol(name.into())
    }

    pub fn unsupported_version(version: impl Into<String>) -> Self {
        Self::UnsupportedVersion(version.into())
    }

    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind(kind.into())
    }
}

/// Errors raised when a well-typed message carries values it must not carry.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("Required field `{0}` is empty")]
    EmptyField(&'static str),
    #[error("Valid response at index {index} is malformed: {reason}")]
    MalformedValidResponse { index: usize, reason: String },
    #[error("Questionnaire contains no questions")]
    NoQuestions,
    #[error("Question at index {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
    #[error("Field `{field}` must be a JSON object, found: {found}")]
    NotAnObject { field: &'static str, found: String },
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
