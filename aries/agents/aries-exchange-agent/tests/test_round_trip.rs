#![allow(clippy::unwrap_used)]

mod utils;

use aries_exchange::{
    connection::ConnectionState,
    protocols::{
        exchange::{ExchangeRequest, ExchangeRole, ExchangeState},
        kinds::question_answer::QuestionPayload,
    },
    storage::TagQuery,
};
use aries_exchange_agent::{AgentErrorKind, InboundWire};
use messages::msg_fields::protocols::{
    questionnaire::question::QuestionItem, survey::request::SurveyRequest,
};
use messages::msg_types::ProtocolName;
use serde_json::json;

use crate::utils::{deliver, only_protocol, setup_agents, setup_agents_with};

fn yes_no_question() -> ExchangeRequest<QuestionPayload> {
    ExchangeRequest::builder()
        .payload(QuestionPayload::new("Is the meeting still on?").with_detail("Friday 10:00"))
        .valid_responses(vec!["Yes".into(), "No".into()])
        .build()
}

fn survey_request() -> ExchangeRequest<SurveyRequest> {
    let form = SurveyRequest::builder()
        .json_schema(json!({ "type": "object" }).to_string())
        .ui_schema("{}".to_owned())
        .build();
    ExchangeRequest::builder().payload(form).build()
}

#[test_log::test(tokio::test)]
async fn test_question_answered_between_agents() {
    let agents = setup_agents().await;
    let mut alice_events = agents.alice.question_answer().subscribe();

    let sent = agents
        .alice
        .question_answer()
        .send_request(&agents.alice_to_bob, yes_no_question())
        .await
        .unwrap();
    assert_eq!(sent.state(), ExchangeState::RequestSent);
    assert_eq!(alice_events.try_recv().unwrap().previous_state, None);

    let bob_record_id = deliver(&agents.bob).await;
    let bob_record = agents
        .bob
        .question_answer()
        .get_by_id(&bob_record_id)
        .await
        .unwrap();
    assert_eq!(bob_record.role(), ExchangeRole::Responder);
    assert_eq!(bob_record.connection_id(), agents.bob_to_alice);
    assert_eq!(bob_record.thread_id(), sent.thread_id());
    assert_eq!(bob_record.payload().question_text, "Is the meeting still on?");

    let answered = agents
        .bob
        .question_answer()
        .send_response(&bob_record_id, "Yes".to_owned())
        .await
        .unwrap();
    assert_eq!(answered.state_label(), "answer-sent");

    let alice_record_id = deliver(&agents.alice).await;
    assert_eq!(alice_record_id, sent.id());
    let alice_record = agents
        .alice
        .question_answer()
        .get_by_id(&alice_record_id)
        .await
        .unwrap();
    assert_eq!(alice_record.state(), ExchangeState::ResponseReceived);
    assert_eq!(alice_record.response().map(String::as_str), Some("Yes"));

    let event = alice_events.try_recv().unwrap();
    assert_eq!(event.previous_state, Some(ExchangeState::RequestSent));
    assert_eq!(event.record.state(), ExchangeState::ResponseReceived);
}

#[test_log::test(tokio::test)]
async fn test_invalid_answer_is_not_sent() {
    let agents = setup_agents().await;
    agents
        .alice
        .question_answer()
        .send_request(&agents.alice_to_bob, yes_no_question())
        .await
        .unwrap();
    let bob_record_id = deliver(&agents.bob).await;

    let err = agents
        .bob
        .question_answer()
        .send_response(&bob_record_id, "Maybe".to_owned())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::InvalidResponse);

    let bob_record = agents
        .bob
        .question_answer()
        .get_by_id(&bob_record_id)
        .await
        .unwrap();
    assert_eq!(bob_record.state(), ExchangeState::RequestReceived);
    assert!(agents.alice.receive_next().await.is_none());
}

#[test_log::test(tokio::test)]
async fn test_request_over_unready_connection_fails() {
    let agents = setup_agents().await;
    let pending = agents
        .alice
        .connections()
        .create_connection("carol", ConnectionState::Requested)
        .await
        .unwrap();

    let err = agents
        .alice
        .question_answer()
        .send_request(&pending.id, yes_no_question())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::ConnectionNotReady);
    assert!(agents
        .alice
        .question_answer()
        .get_all()
        .await
        .unwrap()
        .is_empty());

    let err = agents
        .alice
        .question_answer()
        .send_request("missing", yes_no_question())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::NotFound);
}

#[test_log::test(tokio::test)]
async fn test_questionnaire_between_agents() {
    let agents = setup_agents().await;
    let questions = vec![
        QuestionItem::builder()
            .question_text("Coffee or tea?".to_owned())
            .valid_responses(vec!["Coffee".into(), "Tea".into()])
            .build(),
        QuestionItem::builder()
            .question_text("Any allergies?".to_owned())
            .build(),
    ];
    let sent = agents
        .alice
        .questionnaire()
        .send_request(
            &agents.alice_to_bob,
            ExchangeRequest::builder().payload(questions).build(),
        )
        .await
        .unwrap();

    let bob_record_id = deliver(&agents.bob).await;
    let err = agents
        .bob
        .questionnaire()
        .send_response(&bob_record_id, vec!["Tea".to_owned()])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::InvalidResponse);

    agents
        .bob
        .questionnaire()
        .send_response(&bob_record_id, vec!["Tea".to_owned(), "None".to_owned()])
        .await
        .unwrap();
    deliver(&agents.alice).await;

    let alice_record = agents.alice.questionnaire().get_by_id(sent.id()).await.unwrap();
    assert_eq!(alice_record.state_label(), "answer-received");
    assert_eq!(
        alice_record.response().unwrap(),
        &vec!["Tea".to_owned(), "None".to_owned()]
    );
}

#[test_log::test(tokio::test)]
async fn test_survey_update_reaches_requester() {
    let agents = setup_agents().await;
    let sent = agents
        .alice
        .survey()
        .send_request(&agents.alice_to_bob, survey_request())
        .await
        .unwrap();
    let bob_record_id = deliver(&agents.bob).await;

    agents
        .bob
        .survey()
        .send_response(&bob_record_id, json!({ "name": "Bob" }))
        .await
        .unwrap();
    deliver(&agents.alice).await;
    let alice_record = agents.alice.survey().get_by_id(sent.id()).await.unwrap();
    assert_eq!(alice_record.state(), ExchangeState::Completed);

    let updated = agents
        .bob
        .survey()
        .send_update(&bob_record_id, json!({ "name": "Robert" }))
        .await
        .unwrap();
    assert_eq!(updated.state(), ExchangeState::Completed);
    deliver(&agents.alice).await;

    let alice_record = agents.alice.survey().get_by_id(sent.id()).await.unwrap();
    assert_eq!(alice_record.state(), ExchangeState::Completed);
    assert_eq!(alice_record.response(), Some(&json!({ "name": "Robert" })));
}

#[test_log::test(tokio::test)]
async fn test_survey_records_deleted() {
    let agents = setup_agents().await;
    let survey = agents.alice.survey();
    let first = survey
        .send_request(&agents.alice_to_bob, survey_request())
        .await
        .unwrap();
    survey
        .send_request(&agents.alice_to_bob, survey_request())
        .await
        .unwrap();

    survey.delete_by_id(first.id()).await.unwrap();
    assert!(survey.find_by_id(first.id()).await.unwrap().is_none());
    let err = survey.delete_by_id(first.id()).await.unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::NotFound);

    assert_eq!(survey.delete_all().await.unwrap(), 1);
    assert!(survey.get_all().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_disabled_protocol_rejected() {
    let agents = setup_agents_with(only_protocol("bob", ProtocolName::Survey)).await;
    assert_eq!(agents.alice.supported_protocols().len(), 4);
    let bob_protocols = agents.bob.supported_protocols();
    assert_eq!(bob_protocols.len(), 1);
    assert_eq!(bob_protocols[0].pid, "https://didcomm.org/survey/1.0");

    agents
        .alice
        .question_answer()
        .send_request(&agents.alice_to_bob, yes_no_question())
        .await
        .unwrap();
    let err = agents.bob.receive_next().await.unwrap().unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::ActionNotSupported);

    let err = agents
        .bob
        .question_answer()
        .send_request(&agents.bob_to_alice, yes_no_question())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::ActionNotSupported);
}

#[test_log::test(tokio::test)]
async fn test_inbound_wire_errors() {
    let agents = setup_agents().await;
    let question = json!({
        "@id": "question-1",
        "@type": "https://didcomm.org/questionanswer/1.0/question",
        "question_text": "Hello?"
    });

    let err = agents
        .bob
        .receive_wire(InboundWire {
            connection_id: "unknown".to_owned(),
            payload: question.to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::ConnectionNotReady);

    let err = agents
        .bob
        .receive_wire(InboundWire {
            connection_id: agents.bob_to_alice.clone(),
            payload: "{ not json".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::SerializationError);

    agents
        .bob
        .receive_wire(InboundWire {
            connection_id: agents.bob_to_alice.clone(),
            payload: question.to_string(),
        })
        .await
        .unwrap();
    let err = agents
        .bob
        .receive_wire(InboundWire {
            connection_id: agents.bob_to_alice.clone(),
            payload: question.to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::AlreadyExists);

    let received = agents
        .bob
        .question_answer()
        .find_all_by_query(&TagQuery::eq("state", "request-received"))
        .await
        .unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].thread_id(), "question-1");
}
