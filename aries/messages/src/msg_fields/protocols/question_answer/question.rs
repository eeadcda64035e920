use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    error::{require_non_empty, ValidationError},
    msg_fields::{
        protocols::common::{validate_valid_responses, RequestDecorators, ValidResponse},
        traits::Validate,
    },
    msg_parts::MsgParts,
};

pub type Question = MsgParts<QuestionContent, RequestDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct QuestionContent {
    pub question_text: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_detail: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
    #[builder(default)]
    #[serde(default)]
    pub valid_responses: Vec<ValidResponse>,
}

impl Validate for QuestionContent {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("question_text", &self.question_text)?;
        validate_valid_responses(&self.valid_responses)
    }
}
