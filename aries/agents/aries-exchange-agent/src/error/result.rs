use super::error_struct::AgentError;

pub type AgentResult<T> = Result<T, AgentError>;
