//! Module containing the `question-answer` protocol messages, as defined in the [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0113-question-answer/README.md>).

pub mod answer;
pub mod question;

use derive_more::From;
use serde::{Serialize, Serializer};
use serde_json::Value;

use self::{answer::Answer, question::Question};
use crate::{
    misc::utils::into_msg_with_type,
    msg_fields::traits::{DelayedSerde, MsgWithType},
    msg_types::protocols::question_answer::QuestionAnswerTypeV1_0,
};

#[derive(Clone, Debug, From, PartialEq)]
pub enum QuestionAnswer {
    Question(Question),
    Answer(Answer),
}

impl QuestionAnswer {
    pub fn id(&self) -> &str {
        match self {
            Self::Question(msg) => &msg.id,
            Self::Answer(msg) => &msg.id,
        }
    }
}

impl DelayedSerde for QuestionAnswer {
    type MsgKind = QuestionAnswerTypeV1_0;

    fn delayed_deserialize(kind: Self::MsgKind, value: Value) -> serde_json::Result<Self> {
        match kind {
            QuestionAnswerTypeV1_0::Question => {
                serde_json::from_value::<Question>(value).map(From::from)
            }
            QuestionAnswerTypeV1_0::Answer => serde_json::from_value::<Answer>(value).map(From::from),
        }
    }

    fn delayed_serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Question(v) => {
                MsgWithType::new(QuestionAnswerTypeV1_0::Question, v).serialize(serializer)
            }
            Self::Answer(v) => MsgWithType::new(QuestionAnswerTypeV1_0::Answer, v).serialize(serializer),
        }
    }
}

into_msg_with_type!(Question, QuestionAnswer, Question);
into_msg_with_type!(Answer, QuestionAnswer, Answer);
