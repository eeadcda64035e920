use async_trait::async_trait;
use messages::AriesMessage;

use crate::{
    connection::ConnectionRecord,
    errors::error::{ExchangeError, ExchangeResult},
};

/// A message leaving the agent, addressed to a connection.
#[derive(Clone, Debug)]
pub struct OutboundMessageContext {
    pub message: AriesMessage,
    pub connection: ConnectionRecord,
    /// Id of the exchange record the message was produced for.
    pub associated_record_id: Option<String>,
}

impl OutboundMessageContext {
    pub fn new(message: impl Into<AriesMessage>, connection: ConnectionRecord) -> Self {
        Self {
            message: message.into(),
            connection,
            associated_record_id: None,
        }
    }

    pub fn with_associated_record(mut self, record_id: impl Into<String>) -> Self {
        self.associated_record_id = Some(record_id.into());
        self
    }
}

#[async_trait]
pub trait OutboundDispatch: Send + Sync {
    async fn send(&self, context: OutboundMessageContext) -> ExchangeResult<()>;
}

/// A message that arrived at the agent, together with the connection it arrived over.
#[derive(Clone, Debug)]
pub struct InboundMessageContext<M> {
    pub message: M,
    pub connection: Option<ConnectionRecord>,
}

impl<M> InboundMessageContext<M> {
    pub fn new(message: M, connection: Option<ConnectionRecord>) -> Self {
        Self {
            message,
            connection,
        }
    }

    pub fn assert_ready_connection(&self, message_id: &str) -> ExchangeResult<&ConnectionRecord> {
        let connection = self
            .connection
            .as_ref()
            .ok_or_else(|| ExchangeError::NoConnection(message_id.to_string()))?;
        connection.assert_ready()?;
        Ok(connection)
    }
}
