use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{error::ValidationError, msg_parts::MsgParts, msg_types::MessageKind};

/// Trait used for postponing serialization/deserialization of a message.
///
/// Its main purpose is to allow navigating from the [`crate::msg_types::Protocol`]
/// and message kind to the type we must deserialize to, or to the `@type`
/// we must construct for a particular message.
pub(crate) trait DelayedSerde: Sized {
    type MsgKind: MessageKind;

    fn delayed_deserialize(kind: Self::MsgKind, value: Value) -> serde_json::Result<Self>;

    fn delayed_serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;
}

/// Type used for serialization of a message along with appending its `@type` field.
#[derive(Serialize)]
pub(crate) struct MsgWithType<'a, T> {
    #[serde(rename = "@type")]
    msg_type: String,
    #[serde(flatten)]
    message: &'a T,
}

impl<'a, T> MsgWithType<'a, T> {
    pub fn new<K: MessageKind>(kind: K, message: &'a T) -> Self {
        Self {
            msg_type: kind.msg_type(),
            message,
        }
    }
}

/// Semantic checks that the type system alone cannot express, such as non-empty strings.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<C, D> Validate for MsgParts<C, D>
where
    C: Validate,
    D: Validate,
{
    fn validate(&self) -> Result<(), ValidationError> {
        crate::error::require_non_empty("@id", &self.id)?;
        self.content.validate()?;
        self.decorators.validate()
    }
}
