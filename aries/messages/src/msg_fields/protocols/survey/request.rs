use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    error::{require_non_empty, ValidationError},
    msg_fields::{protocols::common::RequestDecorators, traits::Validate},
    msg_parts::MsgParts,
};

pub type SurveyRequestMsg = MsgParts<SurveyRequestContent, RequestDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct SurveyRequestContent {
    pub request: SurveyRequest,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
    /// Carried as-is; expiry is not enforced.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

/// The form being requested.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct SurveyRequest {
    pub json_schema: String,
    pub ui_schema: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_data: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_data: Option<String>,
}

impl Validate for SurveyRequestContent {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("request.json_schema", &self.request.json_schema)?;
        require_non_empty("request.ui_schema", &self.request.ui_schema)
    }
}
