use messages::{
    decorators::{thread::Thread, timing::Timing},
    msg_fields::protocols::{
        common::{RequestDecorators, ResponseDecorators},
        question_answer::{
            answer::{Answer, AnswerContent},
            question::{Question, QuestionContent},
        },
    },
    msg_types::ProtocolName,
};
use serde::{Deserialize, Serialize};

use crate::protocols::exchange::{
    kind::{check_valid_response, ExchangeKind, ExchangeRequest},
    state::{ExchangeRole, ExchangeState, Topology},
};

/// A single question, optionally with extra detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub question_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_detail: Option<String>,
}

impl QuestionPayload {
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            question_detail: None,
        }
    }

    pub fn with_detail(mut self, question_detail: impl Into<String>) -> Self {
        self.question_detail = Some(question_detail.into());
        self
    }
}

pub(crate) fn question_labels(state: ExchangeState) -> &'static str {
    match state {
        ExchangeState::RequestSent => "question-sent",
        ExchangeState::RequestReceived => "question-received",
        ExchangeState::ResponseSent => "answer-sent",
        ExchangeState::ResponseReceived => "answer-received",
        ExchangeState::Completed => "completed",
    }
}

pub(crate) fn questioner_labels(role: ExchangeRole) -> &'static str {
    match role {
        ExchangeRole::Requester => "questioner",
        ExchangeRole::Responder => "responder",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QuestionAnswerKind;

impl ExchangeKind for QuestionAnswerKind {
    type Request = QuestionPayload;
    type Response = String;
    type RequestMsg = Question;
    type ResponseMsg = Answer;

    const PROTOCOL: ProtocolName = ProtocolName::QuestionAnswer;
    const CATEGORY: &'static str = "question-answer";
    const EVENT_TYPE: &'static str = "QuestionAnswerStateChanged";
    const TOPOLOGY: Topology = Topology::TwoTerminal;

    fn build_request(id: String, request: &ExchangeRequest<QuestionPayload>) -> Question {
        let content = QuestionContent {
            question_text: request.payload.question_text.clone(),
            question_detail: request.payload.question_detail.clone(),
            nonce: request.nonce.clone(),
            signature_required: request.signature_required,
            valid_responses: request.valid_responses.clone(),
        };
        let decorators = RequestDecorators::builder().timing(Timing::now()).build();

        Question::builder()
            .id(id)
            .content(content)
            .decorators(decorators)
            .build()
    }

    fn unpack_request(message: &Question) -> ExchangeRequest<QuestionPayload> {
        let content = &message.content;
        ExchangeRequest {
            payload: QuestionPayload {
                question_text: content.question_text.clone(),
                question_detail: content.question_detail.clone(),
            },
            valid_responses: content.valid_responses.clone(),
            signature_required: content.signature_required,
            nonce: content.nonce.clone(),
            expiration_date: None,
        }
    }

    fn build_response(id: String, thread_id: &str, response: &String) -> Answer {
        let decorators = ResponseDecorators::builder()
            .thread(Thread::new(thread_id))
            .timing(Timing::now())
            .build();

        Answer::builder()
            .id(id)
            .content(AnswerContent::builder().response(response.clone()).build())
            .decorators(decorators)
            .build()
    }

    fn unpack_response(message: &Answer) -> String {
        message.content.response.clone()
    }

    fn accepts(request: &ExchangeRequest<QuestionPayload>, response: &String) -> Result<(), String> {
        check_valid_response(&request.valid_responses, response)
    }

    fn state_label(state: ExchangeState) -> &'static str {
        question_labels(state)
    }

    fn role_label(role: ExchangeRole) -> &'static str {
        questioner_labels(role)
    }
}
