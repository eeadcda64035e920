use std::{fmt, sync::Arc};

use aries_exchange::{
    connection::{ConnectionLookup, ConnectionRecord},
    errors::error::ExchangeError,
    protocols::{
        exchange::{
            ExchangeKind, ExchangeRecord, ExchangeRequest, ExchangeService, StateChangedEvent,
        },
        kinds::SurveyKind,
    },
    storage::TagQuery,
    transport::{InboundMessageContext, OutboundDispatch, OutboundMessageContext},
};
use messages::AriesMessage;
use tokio::sync::broadcast;

use crate::error::*;

/// Entry point for one exchange protocol: turns caller intent into state machine calls
/// and hands produced messages to the outbound transport.
pub struct ServiceExchange<K: ExchangeKind> {
    service: ExchangeService<K>,
    connections: Arc<dyn ConnectionLookup>,
    dispatch: Arc<dyn OutboundDispatch>,
    enabled: bool,
}

impl<K: ExchangeKind> ServiceExchange<K> {
    pub fn new(
        service: ExchangeService<K>,
        connections: Arc<dyn ConnectionLookup>,
        dispatch: Arc<dyn OutboundDispatch>,
        enabled: bool,
    ) -> Self {
        Self {
            service,
            connections,
            dispatch,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn assert_enabled(&self) -> AgentResult<()> {
        if !self.enabled {
            return Err(AgentError::from_msg(
                AgentErrorKind::ActionNotSupported,
                &format!("Protocol {} is not enabled on this agent", K::PROTOCOL.as_ref()),
            ));
        }
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateChangedEvent<K>> {
        self.service.subscribe()
    }

    pub async fn send_request(
        &self,
        connection_id: &str,
        request: ExchangeRequest<K::Request>,
    ) -> AgentResult<ExchangeRecord<K>> {
        trace!(
            "ServiceExchange<{}>::send_request >>> connection_id: {}",
            K::CATEGORY,
            connection_id
        );
        self.assert_enabled()?;
        let connection = self.connections.get_by_id(connection_id).await?;
        connection.assert_ready()?;

        let (message, record) = self.service.create_request(connection_id, request).await?;
        self.send_message(message, connection, &record).await?;
        Ok(record)
    }

    pub async fn send_response(
        &self,
        record_id: &str,
        response: K::Response,
    ) -> AgentResult<ExchangeRecord<K>> {
        trace!(
            "ServiceExchange<{}>::send_response >>> record_id: {}",
            K::CATEGORY,
            record_id
        );
        self.assert_enabled()?;
        let record = self.service.get_by_id(record_id).await?;
        let (message, record) = self.service.create_response(record, response).await?;

        let connection = self.connections.get_by_id(record.connection_id()).await?;
        self.send_message(message, connection, &record).await?;
        Ok(record)
    }

    pub async fn process_request(
        &self,
        connection_id: &str,
        message: K::RequestMsg,
    ) -> AgentResult<ExchangeRecord<K>> {
        self.assert_enabled()?;
        let connection = self.find_connection(connection_id).await?;
        let record = self
            .service
            .process_request(InboundMessageContext::new(message, connection))
            .await?;
        Ok(record)
    }

    pub async fn process_response(
        &self,
        connection_id: &str,
        message: K::ResponseMsg,
    ) -> AgentResult<ExchangeRecord<K>> {
        self.assert_enabled()?;
        let connection = self.find_connection(connection_id).await?;
        let record = self
            .service
            .process_response(InboundMessageContext::new(message, connection))
            .await?;
        Ok(record)
    }

    pub async fn get_by_id(&self, record_id: &str) -> AgentResult<ExchangeRecord<K>> {
        Ok(self.service.get_by_id(record_id).await?)
    }

    pub async fn find_by_id(&self, record_id: &str) -> AgentResult<Option<ExchangeRecord<K>>> {
        Ok(self.service.find_by_id(record_id).await?)
    }

    pub async fn get_all(&self) -> AgentResult<Vec<ExchangeRecord<K>>> {
        Ok(self.service.get_all().await?)
    }

    pub async fn find_all_by_query(
        &self,
        query: &TagQuery,
    ) -> AgentResult<Vec<ExchangeRecord<K>>> {
        Ok(self.service.find_all_by_query(query).await?)
    }

    async fn find_connection(&self, connection_id: &str) -> AgentResult<Option<ConnectionRecord>> {
        match self.connections.get_by_id(connection_id).await {
            Ok(connection) => Ok(Some(connection)),
            Err(ExchangeError::NotFound(_)) => {
                warn!("Inbound message on unknown connection {connection_id}");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn send_message(
        &self,
        message: impl Into<AriesMessage>,
        connection: ConnectionRecord,
        record: &ExchangeRecord<K>,
    ) -> AgentResult<()> {
        let context =
            OutboundMessageContext::new(message, connection).with_associated_record(record.id());
        self.dispatch.send(context).await?;
        Ok(())
    }
}

impl<K: ExchangeKind> fmt::Debug for ServiceExchange<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceExchange")
            .field("service", &self.service)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl ServiceExchange<SurveyKind> {
    /// Sends a fresh copy of the response of a completed survey.
    pub async fn send_update(
        &self,
        record_id: &str,
        response: serde_json::Value,
    ) -> AgentResult<ExchangeRecord<SurveyKind>> {
        trace!("ServiceExchange<survey>::send_update >>> record_id: {record_id}");
        self.assert_enabled()?;
        let record = self.service.get_by_id(record_id).await?;
        let (message, record) = self.service.create_update(record, response).await?;

        let connection = self.connections.get_by_id(record.connection_id()).await?;
        self.send_message(message, connection, &record).await?;
        Ok(record)
    }

    pub async fn delete_by_id(&self, record_id: &str) -> AgentResult<()> {
        Ok(self.service.delete_by_id(record_id).await?)
    }

    /// Deletes every survey record, returning how many were removed.
    pub async fn delete_all(&self) -> AgentResult<usize> {
        Ok(self.service.delete_all().await?)
    }
}
