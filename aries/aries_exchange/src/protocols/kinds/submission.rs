use messages::{
    decorators::{thread::Thread, timing::Timing},
    msg_fields::protocols::{
        common::{RequestDecorators, ResponseDecorators},
        submission::{
            questionnaire::{SubmissionQuestionnaire, SubmissionQuestionnaireContent},
            submission::{SubmissionContent, SubmissionResponse},
        },
    },
    msg_types::ProtocolName,
};

use super::question_answer::{questioner_labels, QuestionPayload};
use crate::protocols::exchange::{
    kind::{check_valid_response, ExchangeKind, ExchangeRequest},
    state::{ExchangeRole, ExchangeState, Topology},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubmissionKind;

impl ExchangeKind for SubmissionKind {
    type Request = QuestionPayload;
    type Response = String;
    type RequestMsg = SubmissionQuestionnaire;
    type ResponseMsg = SubmissionResponse;

    const PROTOCOL: ProtocolName = ProtocolName::Submission;
    const CATEGORY: &'static str = "questionnaire-submission";
    const EVENT_TYPE: &'static str = "SubmissionStateChanged";
    const TOPOLOGY: Topology = Topology::TwoTerminal;

    fn build_request(
        id: String,
        request: &ExchangeRequest<QuestionPayload>,
    ) -> SubmissionQuestionnaire {
        let content = SubmissionQuestionnaireContent {
            question_text: request.payload.question_text.clone(),
            question_detail: request.payload.question_detail.clone(),
            nonce: request.nonce.clone(),
            signature_required: request.signature_required,
            valid_responses: request.valid_responses.clone(),
        };

        SubmissionQuestionnaire::builder()
            .id(id)
            .content(content)
            .decorators(RequestDecorators::builder().timing(Timing::now()).build())
            .build()
    }

    fn unpack_request(message: &SubmissionQuestionnaire) -> ExchangeRequest<QuestionPayload> {
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

    fn build_response(id: String, thread_id: &str, response: &String) -> SubmissionResponse {
        let decorators = ResponseDecorators::builder()
            .thread(Thread::new(thread_id))
            .timing(Timing::now())
            .build();

        SubmissionResponse::builder()
            .id(id)
            .content(SubmissionContent::builder().response(response.clone()).build())
            .decorators(decorators)
            .build()
    }

    fn unpack_response(message: &SubmissionResponse) -> String {
        message.content.response.clone()
    }

    fn accepts(request: &ExchangeRequest<QuestionPayload>, response: &String) -> Result<(), String> {
        check_valid_response(&request.valid_responses, response)
    }

    fn state_label(state: ExchangeState) -> &'static str {
        match state {
            ExchangeState::RequestSent => "questionnaire-sent",
            ExchangeState::RequestReceived => "questionnaire-received",
            ExchangeState::ResponseSent => "submission-sent",
            ExchangeState::ResponseReceived => "submission-received",
            ExchangeState::Completed => "completed",
        }
    }

    fn role_label(role: ExchangeRole) -> &'static str {
        questioner_labels(role)
    }
}
