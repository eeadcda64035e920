use messages::{
    decorators::{thread::Thread, timing::Timing},
    msg_fields::protocols::{
        common::{RequestDecorators, ResponseDecorators},
        survey::{
            request::{SurveyRequest, SurveyRequestContent, SurveyRequestMsg},
            response::{SurveyResponse, SurveyResponseContent},
        },
    },
    msg_types::ProtocolName,
};
use serde_json::Value;

use crate::protocols::exchange::{
    kind::{ExchangeKind, ExchangeRequest},
    state::{ExchangeRole, ExchangeState, Topology},
};

/// A form sent to the responder, who returns it filled in. Both parties finish in
/// `Completed`, and the responder may update the response from there.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurveyKind;

impl ExchangeKind for SurveyKind {
    type Request = SurveyRequest;
    type Response = Value;
    type RequestMsg = SurveyRequestMsg;
    type ResponseMsg = SurveyResponse;

    const PROTOCOL: ProtocolName = ProtocolName::Survey;
    const CATEGORY: &'static str = "survey";
    const EVENT_TYPE: &'static str = "SurveyStateChanged";
    const TOPOLOGY: Topology = Topology::SingleTerminal;

    fn build_request(id: String, request: &ExchangeRequest<SurveyRequest>) -> SurveyRequestMsg {
        let content = SurveyRequestContent {
            request: request.payload.clone(),
            signature_required: request.signature_required,
            expiration_date: request.expiration_date.clone(),
        };

        SurveyRequestMsg::builder()
            .id(id)
            .content(content)
            .decorators(RequestDecorators::builder().timing(Timing::now()).build())
            .build()
    }

    fn unpack_request(message: &SurveyRequestMsg) -> ExchangeRequest<SurveyRequest> {
        let content = &message.content;
        ExchangeRequest {
            payload: content.request.clone(),
            valid_responses: vec![],
            signature_required: content.signature_required,
            nonce: None,
            expiration_date: content.expiration_date.clone(),
        }
    }

    fn build_response(id: String, thread_id: &str, response: &Value) -> SurveyResponse {
        let decorators = ResponseDecorators::builder()
            .thread(Thread::new(thread_id))
            .timing(Timing::now())
            .build();

        SurveyResponse::builder()
            .id(id)
            .content(SurveyResponseContent::builder().response(response.clone()).build())
            .decorators(decorators)
            .build()
    }

    fn unpack_response(message: &SurveyResponse) -> Value {
        message.content.response.clone()
    }

    fn accepts(_request: &ExchangeRequest<SurveyRequest>, response: &Value) -> Result<(), String> {
        if !response.is_object() {
            return Err(format!("survey response must be a JSON object, got {response}"));
        }
        Ok(())
    }

    fn state_label(state: ExchangeState) -> &'static str {
        match state {
            ExchangeState::RequestSent => "request-sent",
            ExchangeState::RequestReceived => "request-received",
            ExchangeState::ResponseSent | ExchangeState::ResponseReceived | ExchangeState::Completed => {
                "completed"
            }
        }
    }

    fn role_label(role: ExchangeRole) -> &'static str {
        match role {
            ExchangeRole::Requester => "requester",
            ExchangeRole::Responder => "responder",
        }
    }
}
