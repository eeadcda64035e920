//! Message parts shared by every request/response exchange protocol.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    decorators::{thread::Thread, timing::Timing},
    error::{require_non_empty, ValidationError},
    msg_fields::traits::Validate,
};

/// One acceptable answer to a question, as described in
/// [RFC 0113](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0113-question-answer/README.md>).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, TypedBuilder)]
pub struct ValidResponse {
    pub text: String,
}

impl ValidResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for ValidResponse {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

pub(crate) fn validate_valid_responses(responses: &[ValidResponse]) -> Result<(), ValidationError> {
    for (index, response) in responses.iter().enumerate() {
        if response.text.trim().is_empty() {
            return Err(ValidationError::MalformedValidResponse {
                index,
                reason: "text is empty".to_owned(),
            });
        }
    }
    Ok(())
}

/// Decorators of a request message. A request opens a thread, so `~thread` is optional:
/// when absent, the thread id is the message's own `@id`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct RequestDecorators {
    #[builder(default, setter(strip_option))]
    #[serde(rename = "~thread")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<Thread>,
    #[builder(default, setter(strip_option))]
    #[serde(rename = "~timing")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

impl Validate for RequestDecorators {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.thread {
            Some(thread) => require_non_empty("~thread.thid", &thread.thid),
            None => Ok(()),
        }
    }
}

/// Decorators of a response message, which always refers back to the request's thread.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct ResponseDecorators {
    #[serde(rename = "~thread")]
    pub thread: Thread,
    #[builder(default, setter(strip_option))]
    #[serde(rename = "~timing")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

impl Validate for ResponseDecorators {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("~thread.thid", &self.thread.thid)
    }
}

/// Access to the thread a message belongs to.
pub trait ThreadId {
    fn thread_id(&self) -> &str;
}

pub trait MessageId {
    fn message_id(&self) -> &str;
}

impl<C, D> MessageId for crate::msg_parts::MsgParts<C, D> {
    fn message_id(&self) -> &str {
        &self.id
    }
}

impl<C> ThreadId for crate::msg_parts::MsgParts<C, RequestDecorators> {
    fn thread_id(&self) -> &str {
        self.decorators
            .thread
            .as_ref()
            .map_or(self.id.as_str(), |thread| thread.thid.as_str())
    }
}

impl<C> ThreadId for crate::msg_parts::MsgParts<C, ResponseDecorators> {
    fn thread_id(&self) -> &str {
        &self.decorators.thread.thid
    }
}
