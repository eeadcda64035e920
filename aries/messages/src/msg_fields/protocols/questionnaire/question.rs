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

pub type QuestionnaireQuestion = MsgParts<QuestionnaireContent, RequestDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct QuestionnaireContent {
    pub questions: Vec<QuestionItem>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
}

/// A single entry of a questionnaire.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct QuestionItem {
    pub question_text: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_detail: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub valid_responses: Vec<ValidResponse>,
}

impl Validate for QuestionItem {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("question_text", &self.question_text)?;
        validate_valid_responses(&self.valid_responses)
    }
}

impl Validate for QuestionnaireContent {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }
        for (index, question) in self.questions.iter().enumerate() {
            question
                .validate()
                .map_err(|source| ValidationError::InvalidQuestion {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::misc::test_utils;

    fn make_item(text: &str, responses: &[&str]) -> QuestionItem {
        QuestionItem::builder()
            .question_text(text.to_owned())
            .valid_responses(responses.iter().map(|r| ValidResponse::new(*r)).collect())
            .build()
    }

    #[test]
    fn test_minimal_questionnaire() {
        let content = QuestionnaireContent::builder()
            .questions(vec![
                make_item("Coffee or tea?", &["Coffee", "Tea"]),
                make_item("Any allergies?", &[]),
            ])
            .build();

        let msg = QuestionnaireQuestion::builder()
            .id("questionnaire-id".to_owned())
            .content(content)
            .decorators(RequestDecorators::default())
            .build();

        let expected = json!({
            "questions": [
                {
                    "question_text": "Coffee or tea?",
                    "valid_responses": [{ "text": "Coffee" }, { "text": "Tea" }],
                },
                {
                    "question_text": "Any allergies?",
                    "valid_responses": [],
                },
            ],
        });

        test_utils::test_constructed_msg(
            msg,
            "https://didcomm.org/questionnaire/1.0/question",
            expected,
        );
    }

    #[test]
    fn test_questionnaire_without_questions_is_invalid() {
        let content = QuestionnaireContent::builder().questions(vec![]).build();

        assert_eq!(content.validate().unwrap_err(), ValidationError::NoQuestions);
    }

    #[test]
    fn test_questionnaire_reports_offending_question() {
        let content = QuestionnaireContent::builder()
            .questions(vec![make_item("Fine?", &["Yes"]), make_item(" ", &["No"])])
            .build();

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidQuestion { index: 1, .. }));
    }
}
