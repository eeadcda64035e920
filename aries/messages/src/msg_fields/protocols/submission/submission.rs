use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    error::{require_non_empty, ValidationError},
    msg_fields::{protocols::common::ResponseDecorators, traits::Validate},
    msg_parts::MsgParts,
};

pub type SubmissionResponse = MsgParts<SubmissionContent, ResponseDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct SubmissionContent {
    pub response: String,
}

impl Validate for SubmissionContent {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("response", &self.response)
    }
}
