//! Module containing the `questionnaire-submission` protocol messages. The request is a
//! single question and the reply submits one free-text value for it.

pub mod questionnaire;
pub mod submission;

use derive_more::From;
use serde::{Serialize, Serializer};
use serde_json::Value;

use self::{questionnaire::SubmissionQuestionnaire, submission::SubmissionResponse};
use crate::{
    misc::utils::into_msg_with_type,
    msg_fields::traits::{DelayedSerde, MsgWithType},
    msg_types::protocols::submission::SubmissionTypeV1_0,
};

#[derive(Clone, Debug, From, PartialEq)]
pub enum Submission {
    Questionnaire(SubmissionQuestionnaire),
    Submission(SubmissionResponse),
}

impl Submission {
    pub fn id(&self) -> &str {
        match self {
            Self::Questionnaire(msg) => &msg.id,
            Self::Submission(msg) => &msg.id,
        }
    }
}

impl DelayedSerde for Submission {
    type MsgKind = SubmissionTypeV1_0;

    fn delayed_deserialize(kind: Self::MsgKind, value: Value) -> serde_json::Result<Self> {
        match kind {
            SubmissionTypeV1_0::Questionnaire => {
                serde_json::from_value::<SubmissionQuestionnaire>(value).map(From::from)
            }
            SubmissionTypeV1_0::Submission => {
                serde_json::from_value::<SubmissionResponse>(value).map(From::from)
            }
        }
    }

    fn delayed_serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Questionnaire(v) => {
                MsgWithType::new(SubmissionTypeV1_0::Questionnaire, v).serialize(serializer)
            }
            Self::Submission(v) => {
                MsgWithType::new(SubmissionTypeV1_0::Submission, v).serialize(serializer)
            }
        }
    }
}

into_msg_with_type!(SubmissionQuestionnaire, Submission, Questionnaire);
into_msg_with_type!(SubmissionResponse, Submission, Submission);
