use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExchangeState {
    RequestSent,
    RequestReceived,
    ResponseSent,
    ResponseReceived,
    /// Terminal state of both roles for single-terminal kinds.
    Completed,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExchangeRole {
    Requester,
    Responder,
}

/// Where each role ends up once the response has been exchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Responder ends in `ResponseSent`, requester in `ResponseReceived`.
    TwoTerminal,
    /// Both roles end in `Completed`; responses may be re-issued from there.
    SingleTerminal,
}

impl Topology {
    pub fn response_sent(self) -> ExchangeState {
        match self {
            Self::TwoTerminal => ExchangeState::ResponseSent,
            Self::SingleTerminal => ExchangeState::Completed,
        }
    }

    pub fn response_received(self) -> ExchangeState {
        match self {
            Self::TwoTerminal => ExchangeState::ResponseReceived,
            Self::SingleTerminal => ExchangeState::Completed,
        }
    }

    /// States in which a requester accepts an inbound response.
    pub fn awaiting_response(self) -> &'static [ExchangeState] {
        match self {
            Self::TwoTerminal => &[ExchangeState::RequestSent],
            Self::SingleTerminal => &[ExchangeState::RequestSent, ExchangeState::Completed],
        }
    }

    pub fn supports_updates(self) -> bool {
        matches!(self, Self::SingleTerminal)
    }
}
