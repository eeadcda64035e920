#![allow(clippy::module_inception)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::large_enum_variant)]

pub mod decorators;
pub mod error;
pub mod misc;
pub mod msg_fields;
pub mod msg_parts;
pub mod msg_types;

use derive_more::From;
use msg_fields::protocols::{
    question_answer::QuestionAnswer, questionnaire::Questionnaire, submission::Submission,
    survey::Survey,
};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    misc::MSG_TYPE,
    msg_fields::traits::DelayedSerde,
    msg_types::{MessageKind, MessageType, Protocol, ProtocolName},
};

/// Enum that can represent any message of the implemented protocols.
///
/// It abstracts away the `@type` field and uses it to determine how
/// to deserialize the input into the correct message type.
///
/// It also automatically appends the correct `@type` field when serializing
/// a message.
#[derive(Clone, Debug, From, PartialEq)]
pub enum AriesMessage {
    QuestionAnswer(QuestionAnswer),
    Questionnaire(Questionnaire),
    Submission(Submission),
    Survey(Survey),
}

impl AriesMessage {
    pub fn id(&self) -> &str {
        match self {
            Self::QuestionAnswer(msg) => msg.id(),
            Self::Questionnaire(msg) => msg.id(),
            Self::Submission(msg) => msg.id(),
            Self::Survey(msg) => msg.id(),
        }
    }

    /// The protocol this message belongs to.
    pub fn protocol(&self) -> Protocol {
        let name = match self {
            Self::QuestionAnswer(_) => ProtocolName::QuestionAnswer,
            Self::Questionnaire(_) => ProtocolName::Questionnaire,
            Self::Submission(_) => ProtocolName::Submission,
            Self::Survey(_) => ProtocolName::Survey,
        };
        Protocol::new(name)
    }
}

fn delayed_deserialize<T>(kind: &str, value: Value) -> Result<T, String>
where
    T: DelayedSerde,
{
    let kind = T::MsgKind::kind_from_str(kind).map_err(|e| e.to_string())?;
    T::delayed_deserialize(kind, value).map_err(|e| e.to_string())
}

impl<'de> Deserialize<'de> for AriesMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = Map::deserialize(deserializer)?;

        let msg_type = match map.remove(MSG_TYPE) {
            Some(Value::String(msg_type)) => msg_type,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "field `{MSG_TYPE}` must be a string, found: {other}"
                )))
            }
            None => return Err(D::Error::missing_field(MSG_TYPE)),
        };

        let MessageType { protocol, kind } =
            MessageType::try_from(msg_type.as_str()).map_err(D::Error::custom)?;
        let value = Value::Object(map);

        match protocol.name {
            ProtocolName::QuestionAnswer => {
                delayed_deserialize::<QuestionAnswer>(kind, value).map(From::from)
            }
            ProtocolName::Questionnaire => {
                delayed_deserialize::<Questionnaire>(kind, value).map(From::from)
            }
            ProtocolName::Submission => {
                delayed_deserialize::<Submission>(kind, value).map(From::from)
            }
            ProtocolName::Survey => delayed_deserialize::<Survey>(kind, value).map(From::from),
        }
        .map_err(D::Error::custom)
    }
}

impl Serialize for AriesMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::QuestionAnswer(v) => v.delayed_serialize(serializer),
            Self::Questionnaire(v) => v.delayed_serialize(serializer),
            Self::Submission(v) => v.delayed_serialize(serializer),
            Self::Survey(v) => v.delayed_serialize(serializer),
        }
    }
}
