use aries_exchange::{
    connection::{ConnectionLookup, ConnectionRecord, ConnectionState},
    errors::error::ExchangeResult,
    storage::{InMemoryRecordStore, RecordStore},
};
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::*;

/// Registry of the connections this agent holds. Exchanges may only travel over
/// connections in the `completed` state.
#[derive(Debug)]
pub struct ServiceConnections {
    connections: InMemoryRecordStore<ConnectionRecord>,
}

impl ServiceConnections {
    pub fn new() -> Self {
        Self {
            connections: InMemoryRecordStore::new("connections"),
        }
    }

    pub async fn create_connection(
        &self,
        their_label: &str,
        state: ConnectionState,
    ) -> AgentResult<ConnectionRecord> {
        let connection = ConnectionRecord::builder()
            .id(Uuid::new_v4().to_string())
            .state(state)
            .their_label(their_label)
            .build();
        self.connections.save(&connection).await?;
        info!(
            "Created connection {} with {} in state {}",
            connection.id, their_label, connection.state
        );
        Ok(connection)
    }

    pub async fn update_state(
        &self,
        connection_id: &str,
        state: ConnectionState,
    ) -> AgentResult<ConnectionRecord> {
        let mut connection = self.connections.get_by_id(connection_id).await?;
        debug!(
            "Connection {} moves from {} to {}",
            connection_id, connection.state, state
        );
        connection.state = state;
        self.connections.update(&mut connection).await?;
        Ok(connection)
    }

    pub async fn get_by_id(&self, connection_id: &str) -> AgentResult<ConnectionRecord> {
        Ok(self.connections.get_by_id(connection_id).await?)
    }

    pub async fn get_all(&self) -> AgentResult<Vec<ConnectionRecord>> {
        Ok(self.connections.get_all().await?)
    }
}

impl Default for ServiceConnections {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionLookup for ServiceConnections {
    async fn get_by_id(&self, connection_id: &str) -> ExchangeResult<ConnectionRecord> {
        self.connections.get_by_id(connection_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_connection_lifecycle() {
        let connections = ServiceConnections::new();
        let connection = connections
            .create_connection("bob", ConnectionState::Invited)
            .await
            .unwrap();
        assert!(!connection.is_ready());

        let connection = connections
            .update_state(&connection.id, ConnectionState::Completed)
            .await
            .unwrap();
        assert!(connection.is_ready());
        assert_eq!(connection.their_label.as_deref(), Some("bob"));

        let looked_up = ConnectionLookup::get_by_id(&connections, &connection.id)
            .await
            .unwrap();
        assert_eq!(looked_up, connection);
        assert_eq!(connections.get_all().await.unwrap().len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_connection() {
        let connections = ServiceConnections::new();
        let err = connections.get_by_id("missing").await.unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::NotFound);
    }
}
