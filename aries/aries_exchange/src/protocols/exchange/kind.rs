use std::fmt::Debug;

use messages::{
    msg_fields::{
        protocols::common::{MessageId, ThreadId, ValidResponse},
        traits::Validate,
    },
    msg_types::ProtocolName,
    AriesMessage,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::state::{ExchangeRole, ExchangeState, Topology};

/// Everything a requester puts into a request, independent of its wire shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ExchangeRequest<P> {
    /// Question text, question set or form, depending on the kind.
    pub payload: P,
    /// Closed set of acceptable responses; empty means any response is accepted.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub valid_responses: Vec<ValidResponse>,
    /// Carried only, never enforced.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Carried only, never enforced.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

/// Describes one flavour of request/response exchange: the messages it travels in,
/// the values it carries and how responses are judged.
pub trait ExchangeKind: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    type Request: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync;
    type Response: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync;
    type RequestMsg: Clone
        + Debug
        + Validate
        + ThreadId
        + MessageId
        + Into<AriesMessage>
        + Send
        + Sync;
    type ResponseMsg: Clone
        + Debug
        + Validate
        + ThreadId
        + MessageId
        + Into<AriesMessage>
        + Send
        + Sync;

    const PROTOCOL: ProtocolName;
    /// Record category, also the name of the kind in logs.
    const CATEGORY: &'static str;
    const EVENT_TYPE: &'static str;
    const TOPOLOGY: Topology;

    fn build_request(id: String, request: &ExchangeRequest<Self::Request>) -> Self::RequestMsg;

    fn unpack_request(message: &Self::RequestMsg) -> ExchangeRequest<Self::Request>;

    fn build_response(id: String, thread_id: &str, response: &Self::Response)
        -> Self::ResponseMsg;

    fn unpack_response(message: &Self::ResponseMsg) -> Self::Response;

    /// Checks `response` against what the request allows. The error is a human readable
    /// reason.
    fn accepts(
        request: &ExchangeRequest<Self::Request>,
        response: &Self::Response,
    ) -> Result<(), String>;

    fn state_label(state: ExchangeState) -> &'static str;

    fn role_label(role: ExchangeRole) -> &'static str;
}

/// Membership check for kinds answered by a single value out of a closed set.
pub(crate) fn check_valid_response(valid: &[ValidResponse], response: &str) -> Result<(), String> {
    if valid.is_empty() || valid.iter().any(|v| v.text == response) {
        return Ok(());
    }
    let allowed: Vec<&str> = valid.iter().map(|v| v.text.as_str()).collect();
    Err(format!(
        "`{response}` is not one of [{}]",
        allowed.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_accepts_anything() {
        assert!(check_valid_response(&[], "Maybe").is_ok());
    }

    #[test]
    fn test_closed_set() {
        let valid = vec![ValidResponse::new("Yes"), ValidResponse::new("No")];

        assert!(check_valid_response(&valid, "No").is_ok());
        assert_eq!(
            check_valid_response(&valid, "Maybe").unwrap_err(),
            "`Maybe` is not one of [Yes, No]"
        );
    }
}
