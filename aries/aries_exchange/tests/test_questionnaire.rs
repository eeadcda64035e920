#![allow(clippy::unwrap_used)]

mod utils;

use aries_exchange::{
    errors::error::ExchangeError,
    protocols::{
        exchange::{ExchangeService, ExchangeState},
        kinds::QuestionnaireKind,
    },
};
use messages::msg_fields::protocols::{common::ValidResponse, questionnaire::question::QuestionItem};

use crate::utils::{inbound, relay, simple_request, REQUESTER_CONNECTION, RESPONDER_CONNECTION};

fn questions() -> Vec<QuestionItem> {
    vec![
        QuestionItem::builder()
            .question_text("Coffee or tea?".to_owned())
            .valid_responses(vec![ValidResponse::new("Coffee"), ValidResponse::new("Tea")])
            .build(),
        QuestionItem::builder()
            .question_text("Any dietary requirements?".to_owned())
            .question_detail("Free text".to_owned())
            .build(),
    ]
}

#[test_log::test(tokio::test)]
async fn test_questionnaire_round_trip() {
    let requester = ExchangeService::<QuestionnaireKind>::in_memory(8);
    let responder = ExchangeService::<QuestionnaireKind>::in_memory(8);

    let (question, requester_record) = requester
        .create_request(REQUESTER_CONNECTION, simple_request(questions()))
        .await
        .unwrap();
    let received = responder
        .process_request(inbound(relay(question), RESPONDER_CONNECTION))
        .await
        .unwrap();
    assert_eq!(received.payload().len(), 2);

    let answers = vec!["Tea".to_owned(), "Vegetarian".to_owned()];
    let (answer, answered) = responder
        .create_response(received, answers.clone())
        .await
        .unwrap();
    assert_eq!(answered.state(), ExchangeState::ResponseSent);

    let finished = requester
        .process_response(inbound(relay(answer), REQUESTER_CONNECTION))
        .await
        .unwrap();
    assert_eq!(finished.id(), requester_record.id());
    assert_eq!(finished.state(), ExchangeState::ResponseReceived);
    assert_eq!(finished.response(), Some(&answers));
}

#[test_log::test(tokio::test)]
async fn test_questionnaire_answers_are_checked_per_question() {
    let requester = ExchangeService::<QuestionnaireKind>::in_memory(8);
    let responder = ExchangeService::<QuestionnaireKind>::in_memory(8);

    let (question, _) = requester
        .create_request(REQUESTER_CONNECTION, simple_request(questions()))
        .await
        .unwrap();
    let received = responder
        .process_request(inbound(question, RESPONDER_CONNECTION))
        .await
        .unwrap();

    let err = responder
        .create_response(received.clone(), vec!["Juice".to_owned(), "None".to_owned()])
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::InvalidResponse { .. }));

    let err = responder
        .create_response(received.clone(), vec!["Tea".to_owned()])
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::InvalidResponse { .. }));

    let stored = responder.get_by_id(received.id()).await.unwrap();
    assert_eq!(stored.state(), ExchangeState::RequestReceived);
}

#[test_log::test(tokio::test)]
async fn test_empty_questionnaire_is_not_sent() {
    let requester = ExchangeService::<QuestionnaireKind>::in_memory(8);

    let err = requester
        .create_request(REQUESTER_CONNECTION, simple_request(vec![]))
        .await
        .unwrap_err();

    assert!(matches!(err, ExchangeError::InvalidMessage(_)));
    assert!(requester.get_all().await.unwrap().is_empty());
}
