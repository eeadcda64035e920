//! Module containing the `survey` protocol messages. A survey request carries a form
//! (JSON schema plus UI schema) and the response is the filled-in form as a JSON object.

pub mod request;
pub mod response;

use derive_more::From;
use serde::{Serialize, Serializer};
use serde_json::Value;

use self::{request::SurveyRequestMsg, response::SurveyResponse};
use crate::{
    misc::utils::into_msg_with_type,
    msg_fields::traits::{DelayedSerde, MsgWithType},
    msg_types::protocols::survey::SurveyTypeV1_0,
};

#[derive(Clone, Debug, From, PartialEq)]
pub enum Survey {
    Request(SurveyRequestMsg),
    Response(SurveyResponse),
}

impl Survey {
    pub fn id(&self) -> &str {
        match self {
            Self::Request(msg) => &msg.id,
            Self::Response(msg) => &msg.id,
        }
    }
}

impl DelayedSerde for Survey {
    type MsgKind = SurveyTypeV1_0;

    fn delayed_deserialize(kind: Self::MsgKind, value: Value) -> serde_json::Result<Self> {
        match kind {
            SurveyTypeV1_0::Request => {
                serde_json::from_value::<SurveyRequestMsg>(value).map(From::from)
            }
            SurveyTypeV1_0::Response => {
                serde_json::from_value::<SurveyResponse>(value).map(From::from)
            }
        }
    }

    fn delayed_serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Request(v) => MsgWithType::new(SurveyTypeV1_0::Request, v).serialize(serializer),
            Self::Response(v) => MsgWithType::new(SurveyTypeV1_0::Response, v).serialize(serializer),
        }
    }
}

into_msg_with_type!(SurveyRequestMsg, Survey, Request);
into_msg_with_type!(SurveyResponse, Survey, Response);
