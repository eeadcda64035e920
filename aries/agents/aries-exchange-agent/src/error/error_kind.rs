use thiserror::Error as ThisError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ThisError)]
pub enum AgentErrorKind {
    #[error("Object not found")]
    NotFound,
    #[error("Object already exists")]
    AlreadyExists,
    #[error("Invalid state")]
    InvalidState,
    #[error("Invalid role")]
    InvalidRole,
    #[error("Invalid response")]
    InvalidResponse,
    #[error("Connection not ready")]
    ConnectionNotReady,
    #[error("Concurrent modification")]
    Conflict,
    #[error("Action not supported")]
    ActionNotSupported,
    #[error("Invalid message")]
    InvalidMessage,
    #[error("Invalid agent configuration")]
    InvalidConfig,
    #[error("(De)serialization failed")]
    SerializationError,
    #[error("Message delivery failed")]
    DeliveryFailed,
    #[error("Failed to acquire lock")]
    LockError,
}
