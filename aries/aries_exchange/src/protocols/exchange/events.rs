use tokio::sync::broadcast;

use super::{kind::ExchangeKind, record::ExchangeRecord, state::ExchangeState};

pub const DEFAULT_EVENT_CAPACITY: usize = 64;

#[derive(Clone, Debug)]
pub struct StateChangedEvent<K: ExchangeKind> {
    pub event_type: &'static str,
    /// `None` when the record was just created.
    pub previous_state: Option<ExchangeState>,
    pub record: ExchangeRecord<K>,
}

/// Fan-out of state changes of one exchange kind. Every subscriber receives the events
/// emitted after it subscribed, in emission order.
///
/// Each subscriber buffers at most `capacity` events. A subscriber that falls further
/// behind loses the oldest ones: its next `recv` returns `RecvError::Lagged(n)` with the
/// number skipped, then continues in order from the oldest event still buffered.
#[derive(Debug)]
pub struct EventChannel<K: ExchangeKind> {
    sender: broadcast::Sender<StateChangedEvent<K>>,
    capacity: usize,
}

impl<K: ExchangeKind> EventChannel<K> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self { sender, capacity }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateChangedEvent<K>> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of subscribers the event reached.
    pub fn emit(&self, previous_state: Option<ExchangeState>, record: &ExchangeRecord<K>) -> usize {
        debug!(
            "{}: record {} {} -> {}",
            K::EVENT_TYPE,
            record.id(),
            previous_state.map_or("none", K::state_label),
            record.state_label()
        );
        let event = StateChangedEvent {
            event_type: K::EVENT_TYPE,
            previous_state,
            record: record.clone(),
        };
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                trace!("{}: no subscribers", K::EVENT_TYPE);
                0
            }
        }
    }
}

impl<K: ExchangeKind> Default for EventChannel<K> {
    fn default() -> Self {
        Self::new()
    }
}
