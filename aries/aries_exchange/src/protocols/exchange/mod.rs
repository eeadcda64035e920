//! The request/response exchange shared by every protocol kind: a requester sends one
//! request over a connection and a responder answers it, while both parties track the
//! exchange in a record.

pub mod events;
pub mod kind;
pub mod record;
pub mod service;
pub mod state;

pub use self::{
    events::{EventChannel, StateChangedEvent},
    kind::{ExchangeKind, ExchangeRequest},
    record::ExchangeRecord,
    service::ExchangeService,
    state::{ExchangeRole, ExchangeState, Topology},
};
