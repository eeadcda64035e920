//! Module containing the `questionnaire` protocol messages: a single request carrying
//! several questions, answered by one message with one response per question.

pub mod answer;
pub mod question;

use derive_more::From;
use serde::{Serialize, Serializer};
use serde_json::Value;

use self::{answer::QuestionnaireAnswer, question::QuestionnaireQuestion};
use crate::{
    misc::utils::into_msg_with_type,
    msg_fields::traits::{DelayedSerde, MsgWithType},
    msg_types::protocols::questionnaire::QuestionnaireTypeV1_0,
};

#[derive(Clone, Debug, From, PartialEq)]
pub enum Questionnaire {
    Question(QuestionnaireQuestion),
    Answer(QuestionnaireAnswer),
}

impl Questionnaire {
    pub fn id(&self) -> &str {
        match self {
            Self::Question(msg) => &msg.id,
            Self::Answer(msg) => &msg.id,
        }
    }
}

impl DelayedSerde for Questionnaire {
    type MsgKind = QuestionnaireTypeV1_0;

    fn delayed_deserialize(kind: Self::MsgKind, value: Value) -> serde_json::Result<Self> {
        match kind {
            QuestionnaireTypeV1_0::Question => {
                serde_json::from_value::<QuestionnaireQuestion>(value).map(From::from)
            }
            QuestionnaireTypeV1_0::Answer => {
                serde_json::from_value::<QuestionnaireAnswer>(value).map(From::from)
            }
        }
    }

    fn delayed_serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Question(v) => {
                MsgWithType::new(QuestionnaireTypeV1_0::Question, v).serialize(serializer)
            }
            Self::Answer(v) => MsgWithType::new(QuestionnaireTypeV1_0::Answer, v).serialize(serializer),
        }
    }
}

into_msg_with_type!(QuestionnaireQuestion, Questionnaire, Question);
into_msg_with_type!(QuestionnaireAnswer, Questionnaire, Answer);
