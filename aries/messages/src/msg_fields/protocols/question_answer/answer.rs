use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    error::{require_non_empty, ValidationError},
    msg_fields::{protocols::common::ResponseDecorators, traits::Validate},
    msg_parts::MsgParts,
};

pub type Answer = MsgParts<AnswerContent, ResponseDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct AnswerContent {
    pub response: String,
}

impl Validate for AnswerContent {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("response", &self.response)
    }
}
