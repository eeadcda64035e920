#![allow(dead_code)]

use aries_exchange::{
    connection::{ConnectionRecord, ConnectionState},
    messages::AriesMessage,
    protocols::exchange::{ExchangeKind, ExchangeRequest, StateChangedEvent},
    transport::InboundMessageContext,
};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::broadcast::{error::TryRecvError, Receiver};

pub const REQUESTER_CONNECTION: &str = "conn-requester";
pub const RESPONDER_CONNECTION: &str = "conn-responder";

pub fn ready_connection(id: &str) -> ConnectionRecord {
    ConnectionRecord::builder()
        .id(id)
        .state(ConnectionState::Completed)
        .build()
}

/// Sends `message` through its JSON wire form, as a transport between two agents would.
pub fn relay<M>(message: M) -> M
where
    M: Serialize + DeserializeOwned + Into<AriesMessage>,
{
    let sent: AriesMessage = message.into();
    let wire = serde_json::to_string(&sent).unwrap();
    let received: AriesMessage = serde_json::from_str(&wire).unwrap();
    assert_eq!(received, sent);

    serde_json::from_str(&wire).unwrap()
}

pub fn inbound<M>(message: M, connection_id: &str) -> InboundMessageContext<M> {
    InboundMessageContext::new(message, Some(ready_connection(connection_id)))
}

pub fn simple_request<P>(payload: P) -> ExchangeRequest<P> {
    ExchangeRequest::builder().payload(payload).build()
}

pub fn next_event<K: ExchangeKind>(rx: &mut Receiver<StateChangedEvent<K>>) -> StateChangedEvent<K> {
    rx.try_recv().unwrap()
}

pub fn assert_no_event<K: ExchangeKind>(rx: &mut Receiver<StateChangedEvent<K>>) {
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}
