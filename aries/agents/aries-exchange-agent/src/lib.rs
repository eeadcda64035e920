#[macro_use]
extern crate log;

mod agent;
mod error;
mod handlers;
mod transport;

pub use aries_exchange;
pub use messages;

pub use agent::*;
pub use error::*;
pub use handlers::{connection::ServiceConnections, exchange::ServiceExchange};
pub use transport::in_memory::{InMemoryTransport, InboundWire};
