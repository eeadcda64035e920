use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use aries_exchange::{
    errors::error::{ExchangeError, ExchangeResult},
    transport::{OutboundDispatch, OutboundMessageContext},
};
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

/// A serialized message waiting in an agent's inbox, tagged with the local connection
/// it arrived over.
#[derive(Clone, Debug, PartialEq)]
pub struct InboundWire {
    pub connection_id: String,
    pub payload: String,
}

#[derive(Debug)]
struct Route {
    peer_connection_id: String,
    inbox: UnboundedSender<InboundWire>,
}

/// Delivers outbound messages as JSON to the inbox of an agent in the same process.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    routes: RwLock<HashMap<String, Route>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent over `connection_id` land in `inbox`, addressed to the peer's
    /// `peer_connection_id`.
    pub fn add_route(
        &self,
        connection_id: &str,
        peer_connection_id: &str,
        inbox: UnboundedSender<InboundWire>,
    ) -> ExchangeResult<()> {
        let route = Route {
            peer_connection_id: peer_connection_id.to_string(),
            inbox,
        };
        self.lock_routes_write()?
            .insert(connection_id.to_string(), route);
        Ok(())
    }

    fn lock_routes_read(&self) -> ExchangeResult<RwLockReadGuard<'_, HashMap<String, Route>>> {
        self.routes.read().map_err(|err| {
            error!("Unable to read-lock transport routes: {err:?}");
            ExchangeError::LockError(err.to_string())
        })
    }

    fn lock_routes_write(&self) -> ExchangeResult<RwLockWriteGuard<'_, HashMap<String, Route>>> {
        self.routes.write().map_err(|err| {
            error!("Unable to write-lock transport routes: {err:?}");
            ExchangeError::LockError(err.to_string())
        })
    }
}

#[async_trait]
impl OutboundDispatch for InMemoryTransport {
    async fn send(&self, context: OutboundMessageContext) -> ExchangeResult<()> {
        let payload = serde_json::to_string(&context.message)?;
        let routes = self.lock_routes_read()?;
        let route = routes.get(&context.connection.id).ok_or_else(|| {
            ExchangeError::DeliveryFailed(format!(
                "No route for connection {}",
                context.connection.id
            ))
        })?;
        info!(
            "Sending message {} over connection {} (record {:?}): {}",
            context.message.id(),
            context.connection.id,
            context.associated_record_id,
            payload
        );
        route
            .inbox
            .send(InboundWire {
                connection_id: route.peer_connection_id.clone(),
                payload,
            })
            .map_err(|err| ExchangeError::DeliveryFailed(err.to_string()))
    }
}
