use aries_exchange::errors::error::ExchangeError;

use crate::error::*;

impl From<ExchangeError> for AgentError {
    fn from(err: ExchangeError) -> AgentError {
        let kind = match &err {
            ExchangeError::NotFound(_) => AgentErrorKind::NotFound,
            ExchangeError::Duplicate { .. }
            | ExchangeError::UniqueKeyTaken { .. }
            | ExchangeError::AlreadyExists { .. } => AgentErrorKind::AlreadyExists,
            ExchangeError::InvalidState { .. } => AgentErrorKind::InvalidState,
            ExchangeError::InvalidRole { .. } => AgentErrorKind::InvalidRole,
            ExchangeError::InvalidResponse { .. } => AgentErrorKind::InvalidResponse,
            ExchangeError::ConnectionNotReady { .. } | ExchangeError::NoConnection(_) => {
                AgentErrorKind::ConnectionNotReady
            }
            ExchangeError::Conflict { .. } => AgentErrorKind::Conflict,
            ExchangeError::ActionNotSupported(_) => AgentErrorKind::ActionNotSupported,
            ExchangeError::InvalidMessage(_) => AgentErrorKind::InvalidMessage,
            ExchangeError::InvalidJson(_) => AgentErrorKind::SerializationError,
            ExchangeError::DeliveryFailed(_) => AgentErrorKind::DeliveryFailed,
            ExchangeError::LockError(_) => AgentErrorKind::LockError,
        };
        let message = format!("Exchange error: {err}");
        AgentError { message, kind }
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(serde_err: serde_json::Error) -> AgentError {
        let kind = AgentErrorKind::SerializationError;
        let message = format!("(De)serialization failed; err: {:?}", serde_err.to_string());
        AgentError { message, kind }
    }
}
