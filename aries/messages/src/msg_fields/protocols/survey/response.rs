use serde::{Deserialize, Serialize};
use serde_json::Value;
use typed_builder::TypedBuilder;

use crate::{
    error::ValidationError,
    msg_fields::{protocols::common::ResponseDecorators, traits::Validate},
    msg_parts::MsgParts,
};

pub type SurveyResponse = MsgParts<SurveyResponseContent, ResponseDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct SurveyResponseContent {
    pub response: Value,
}

impl Validate for SurveyResponseContent {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.response.is_object() {
            return Err(ValidationError::NotAnObject {
                field: "response",
                found: self.response.to_string(),
            });
        }
        Ok(())
    }
}
