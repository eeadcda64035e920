use messages::{
    decorators::{thread::Thread, timing::Timing},
    msg_fields::protocols::{
        common::{RequestDecorators, ResponseDecorators},
        questionnaire::{
            answer::{QuestionnaireAnswer, QuestionnaireAnswerContent},
            question::{QuestionItem, QuestionnaireContent, QuestionnaireQuestion},
        },
    },
    msg_types::ProtocolName,
};

use super::question_answer::{question_labels, questioner_labels};
use crate::protocols::exchange::{
    kind::{check_valid_response, ExchangeKind, ExchangeRequest},
    state::{ExchangeRole, ExchangeState, Topology},
};

/// Several questions asked at once; answered with one response per question, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QuestionnaireKind;

impl ExchangeKind for QuestionnaireKind {
    type Request = Vec<QuestionItem>;
    type Response = Vec<String>;
    type RequestMsg = QuestionnaireQuestion;
    type ResponseMsg = QuestionnaireAnswer;

    const PROTOCOL: ProtocolName = ProtocolName::Questionnaire;
    const CATEGORY: &'static str = "questionnaire";
    const EVENT_TYPE: &'static str = "QuestionnaireStateChanged";
    const TOPOLOGY: Topology = Topology::TwoTerminal;

    fn build_request(
        id: String,
        request: &ExchangeRequest<Vec<QuestionItem>>,
    ) -> QuestionnaireQuestion {
        let content = QuestionnaireContent {
            questions: request.payload.clone(),
            nonce: request.nonce.clone(),
            signature_required: request.signature_required,
        };

        QuestionnaireQuestion::builder()
            .id(id)
            .content(content)
            .decorators(RequestDecorators::builder().timing(Timing::now()).build())
            .build()
    }

    fn unpack_request(message: &QuestionnaireQuestion) -> ExchangeRequest<Vec<QuestionItem>> {
        let content = &message.content;
        ExchangeRequest {
            payload: content.questions.clone(),
            valid_responses: vec![],
            signature_required: content.signature_required,
            nonce: content.nonce.clone(),
            expiration_date: None,
        }
    }

    fn build_response(id: String, thread_id: &str, response: &Vec<String>) -> QuestionnaireAnswer {
        let decorators = ResponseDecorators::builder()
            .thread(Thread::new(thread_id))
            .timing(Timing::now())
            .build();

        QuestionnaireAnswer::builder()
            .id(id)
            .content(
                QuestionnaireAnswerContent::builder()
                    .response(response.clone())
                    .build(),
            )
            .decorators(decorators)
            .build()
    }

    fn unpack_response(message: &QuestionnaireAnswer) -> Vec<String> {
        message.content.response.clone()
    }

    fn accepts(
        request: &ExchangeRequest<Vec<QuestionItem>>,
        response: &Vec<String>,
    ) -> Result<(), String> {
        let questions = &request.payload;
        if questions.len() != response.len() {
            return Err(format!(
                "expected {} responses, got {}",
                questions.len(),
                response.len()
            ));
        }
        questions
            .iter()
            .zip(response)
            .enumerate()
            .try_for_each(|(index, (question, answer))| {
                check_valid_response(&question.valid_responses, answer)
                    .map_err(|reason| format!("question {index}: {reason}"))
            })
    }

    fn state_label(state: ExchangeState) -> &'static str {
        question_labels(state)
    }

    fn role_label(role: ExchangeRole) -> &'static str {
        questioner_labels(role)
    }
}

#[cfg(test)]
mod tests {
    use messages::msg_fields::protocols::common::ValidResponse;

    use super::*;

    fn make_request() -> ExchangeRequest<Vec<QuestionItem>> {
        let drink = QuestionItem::builder()
            .question_text("Coffee or tea?".to_owned())
            .valid_responses(vec![ValidResponse::new("Coffee"), ValidResponse::new("Tea")])
            .build();
        let note = QuestionItem::builder()
            .question_text("Anything else?".to_owned())
            .build();
        ExchangeRequest::builder().payload(vec![drink, note]).build()
    }

    #[test]
    fn test_accepts_one_valid_answer_per_question() {
        let request = make_request();

        assert!(QuestionnaireKind::accepts(
            &request,
            &vec!["Tea".to_owned(), "Oat milk, please".to_owned()]
        )
        .is_ok());
    }

    #[test]
    fn test_rejects_wrong_answer_count() {
        let err = QuestionnaireKind::accepts(&make_request(), &vec!["Tea".to_owned()]).unwrap_err();

        assert_eq!(err, "expected 2 responses, got 1");
    }

    #[test]
    fn test_rejects_answer_outside_question_set() {
        let err = QuestionnaireKind::accepts(
            &make_request(),
            &vec!["Water".to_owned(), "No".to_owned()],
        )
        .unwrap_err();

        assert_eq!(err, "question 0: `Water` is not one of [Coffee, Tea]");
    }
}
