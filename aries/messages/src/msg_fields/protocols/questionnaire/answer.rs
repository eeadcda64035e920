use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    error::{require_non_empty, ValidationError},
    msg_fields::{protocols::common::ResponseDecorators, traits::Validate},
    msg_parts::MsgParts,
};

pub type QuestionnaireAnswer = MsgParts<QuestionnaireAnswerContent, ResponseDecorators>;

/// One response per question, in the order the questions were asked.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct QuestionnaireAnswerContent {
    pub response: Vec<String>,
}

impl Validate for QuestionnaireAnswerContent {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.response.is_empty() {
            return Err(ValidationError::EmptyField("response"));
        }
        self.response
            .iter()
            .try_for_each(|response| require_non_empty("response", response))
    }
}
