use std::{fmt, sync::Arc};

use messages::msg_fields::{
    protocols::common::{MessageId, ThreadId},
    traits::Validate,
};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::{
    events::{EventChannel, StateChangedEvent},
    kind::{ExchangeKind, ExchangeRequest},
    record::{ExchangeRecord, TAG_CONNECTION_ID, TAG_THREAD_ID},
    state::{ExchangeRole, ExchangeState},
};
use crate::{
    errors::error::{ExchangeError, ExchangeResult},
    storage::{InMemoryRecordStore, RecordStore, TagQuery},
    transport::InboundMessageContext,
};

/// State machine of one exchange kind. It is the only writer of record state and
/// response; every state change is persisted and then announced on the event channel.
pub struct ExchangeService<K: ExchangeKind> {
    store: Arc<dyn RecordStore<ExchangeRecord<K>>>,
    events: EventChannel<K>,
}

impl<K: ExchangeKind> ExchangeService<K> {
    pub fn new(store: Arc<dyn RecordStore<ExchangeRecord<K>>>, events: EventChannel<K>) -> Self {
        Self { store, events }
    }

    pub fn in_memory(event_capacity: usize) -> Self {
        Self::new(
            Arc::new(InMemoryRecordStore::new(K::CATEGORY)),
            EventChannel::with_capacity(event_capacity),
        )
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateChangedEvent<K>> {
        self.events.subscribe()
    }

    /// Builds a request for `connection_id` and records it as sent.
    pub async fn create_request(
        &self,
        connection_id: &str,
        request: ExchangeRequest<K::Request>,
    ) -> ExchangeResult<(K::RequestMsg, ExchangeRecord<K>)> {
        trace!(
            "ExchangeService<{}>::create_request >>> connection_id: {}",
            K::CATEGORY,
            connection_id
        );
        let message = K::build_request(Uuid::new_v4().to_string(), &request);
        message.validate()?;

        let record = ExchangeRecord::new(
            connection_id,
            message.thread_id(),
            ExchangeRole::Requester,
            ExchangeState::RequestSent,
            request,
        );
        self.store.save(&record).await?;
        self.events.emit(None, &record);

        Ok((message, record))
    }

    /// Records an inbound request. A second request on the same thread and connection is
    /// rejected.
    pub async fn process_request(
        &self,
        context: InboundMessageContext<K::RequestMsg>,
    ) -> ExchangeResult<ExchangeRecord<K>> {
        let message = &context.message;
        debug!(
            "ExchangeService<{}>::process_request >>> message id: {}",
            K::CATEGORY,
            message.message_id()
        );
        let connection = context.assert_ready_connection(message.message_id())?;
        message.validate()?;

        let thread_id = message.thread_id();
        if let Some(existing) = self
            .find_by_thread_and_connection_id(&connection.id, thread_id)
            .await?
        {
            return Err(ExchangeError::AlreadyExists {
                record_id: existing.id().to_string(),
                thread_id: thread_id.to_string(),
                connection_id: connection.id.clone(),
            });
        }

        let record = ExchangeRecord::new(
            &connection.id,
            thread_id,
            ExchangeRole::Responder,
            ExchangeState::RequestReceived,
            K::unpack_request(message),
        );
        // A concurrent delivery of the same request may have saved since the lookup.
        self.store.save(&record).await.map_err(|err| match err {
            ExchangeError::UniqueKeyTaken { record_id, .. } => ExchangeError::AlreadyExists {
                record_id,
                thread_id: thread_id.to_string(),
                connection_id: connection.id.clone(),
            },
            err => err,
        })?;
        self.events.emit(None, &record);

        Ok(record)
    }

    /// Answers a received request. Nothing is changed if the record is not awaiting a
    /// response or if the response is not acceptable.
    pub async fn create_response(
        &self,
        mut record: ExchangeRecord<K>,
        response: K::Response,
    ) -> ExchangeResult<(K::ResponseMsg, ExchangeRecord<K>)> {
        trace!(
            "ExchangeService<{}>::create_response >>> record id: {}",
            K::CATEGORY,
            record.id()
        );
        record.assert_state(&[ExchangeState::RequestReceived])?;
        record.assert_role(ExchangeRole::Responder)?;

        let message = self.prepare_response(&record, &response)?;
        record.set_response(response);
        self.update_state(&mut record, K::TOPOLOGY.response_sent())
            .await?;

        Ok((message, record))
    }

    /// Re-issues the response of a completed exchange. Only kinds whose roles share a
    /// single terminal state support this.
    pub async fn create_update(
        &self,
        mut record: ExchangeRecord<K>,
        response: K::Response,
    ) -> ExchangeResult<(K::ResponseMsg, ExchangeRecord<K>)> {
        trace!(
            "ExchangeService<{}>::create_update >>> record id: {}",
            K::CATEGORY,
            record.id()
        );
        if !K::TOPOLOGY.supports_updates() {
            return Err(ExchangeError::action_not_supported(format!(
                "{} responses cannot be updated",
                K::CATEGORY
            )));
        }
        record.assert_state(&[ExchangeState::Completed])?;
        record.assert_role(ExchangeRole::Responder)?;

        let message = self.prepare_response(&record, &response)?;
        record.set_response(response);
        self.update_state(&mut record, ExchangeState::Completed)
            .await?;

        Ok((message, record))
    }

    /// Records the response to a request this party sent.
    pub async fn process_response(
        &self,
        context: InboundMessageContext<K::ResponseMsg>,
    ) -> ExchangeResult<ExchangeRecord<K>> {
        let message = &context.message;
        debug!(
            "ExchangeService<{}>::process_response >>> message id: {}",
            K::CATEGORY,
            message.message_id()
        );
        let connection = context.assert_ready_connection(message.message_id())?;
        message.validate()?;

        let mut record = self
            .get_by_thread_and_connection_id(&connection.id, message.thread_id())
            .await?;
        record.assert_state(K::TOPOLOGY.awaiting_response())?;
        record.assert_role(ExchangeRole::Requester)?;

        record.set_response(K::unpack_response(message));
        self.update_state(&mut record, K::TOPOLOGY.response_received())
            .await?;

        Ok(record)
    }

    fn prepare_response(
        &self,
        record: &ExchangeRecord<K>,
        response: &K::Response,
    ) -> ExchangeResult<K::ResponseMsg> {
        K::accepts(record.request(), response).map_err(|reason| {
            ExchangeError::InvalidResponse {
                record_id: record.id().to_string(),
                reason,
            }
        })?;
        let message = K::build_response(Uuid::new_v4().to_string(), record.thread_id(), response);
        message.validate()?;
        Ok(message)
    }

    async fn update_state(
        &self,
        record: &mut ExchangeRecord<K>,
        new_state: ExchangeState,
    ) -> ExchangeResult<()> {
        let previous_state = record.state();
        record.set_state(new_state);
        self.store.update(record).await?;
        self.events.emit(Some(previous_state), record);
        Ok(())
    }

    pub async fn get_by_id(&self, record_id: &str) -> ExchangeResult<ExchangeRecord<K>> {
        self.store.get_by_id(record_id).await
    }

    pub async fn find_by_id(&self, record_id: &str) -> ExchangeResult<Option<ExchangeRecord<K>>> {
        self.store.find_by_id(record_id).await
    }

    pub async fn get_by_thread_and_connection_id(
        &self,
        connection_id: &str,
        thread_id: &str,
    ) -> ExchangeResult<ExchangeRecord<K>> {
        self.store
            .get_single_by_query(&thread_query(connection_id, thread_id))
            .await
    }

    pub async fn find_by_thread_and_connection_id(
        &self,
        connection_id: &str,
        thread_id: &str,
    ) -> ExchangeResult<Option<ExchangeRecord<K>>> {
        self.store
            .find_single_by_query(&thread_query(connection_id, thread_id))
            .await
    }

    pub async fn get_all(&self) -> ExchangeResult<Vec<ExchangeRecord<K>>> {
        self.store.get_all().await
    }

    pub async fn find_all_by_query(
        &self,
        query: &TagQuery,
    ) -> ExchangeResult<Vec<ExchangeRecord<K>>> {
        self.store.find_by_query(query).await
    }

    pub async fn delete_by_id(&self, record_id: &str) -> ExchangeResult<()> {
        let record = self.get_by_id(record_id).await?;
        self.store.delete(record.id()).await
    }

    /// Deletes every record of this kind. A failed deletion is logged and skipped; returns
    /// the number of records deleted.
    pub async fn delete_all(&self) -> ExchangeResult<usize> {
        let mut deleted = 0;
        for record in self.get_all().await? {
            match self.store.delete(record.id()).await {
                Ok(()) => deleted += 1,
                Err(err) => error!(
                    "ExchangeService<{}>::delete_all >>> failed to delete record {}: {}",
                    K::CATEGORY,
                    record.id(),
                    err
                ),
            }
        }
        Ok(deleted)
    }
}

impl<K: ExchangeKind> fmt::Debug for ExchangeService<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeService")
            .field("category", &self.store.category())
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

fn thread_query(connection_id: &str, thread_id: &str) -> TagQuery {
    TagQuery::eq(TAG_CONNECTION_ID, connection_id).and(TagQuery::eq(TAG_THREAD_ID, thread_id))
}
