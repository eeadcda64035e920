mod convertors;
mod error_kind;
mod error_struct;
mod result;

pub use self::{error_kind::AgentErrorKind, error_struct::AgentError, result::AgentResult};
