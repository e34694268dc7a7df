//! Registry of named bounded event consumers.
//!
//! Allows resilience primitives and the code observing them to rendezvous on
//! a name: whichever side asks first creates the consumer, and every later
//! caller gets the same instance.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::consumer::CircularEventConsumer;
use tracing::debug;

/// Process-wide mapping from logical name to one bounded event consumer.
///
/// Creation is lazy, idempotent, and atomic per name: two callers racing on
/// the same name always observe a single surviving consumer. Entries are
/// never removed or resized. Clones share the same underlying map.
#[derive(Debug)]
pub struct EventConsumerRegistry<T> {
    inner: Arc<RwLock<HashMap<String, Arc<CircularEventConsumer<T>>>>>,
}

impl<T> Default for EventConsumerRegistry<T> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl<T> Clone for EventConsumerRegistry<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> EventConsumerRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the consumer registered under `name`, creating one with
    /// `buffer_capacity` if absent.
    ///
    /// First writer wins: for an existing name the supplied capacity is
    /// ignored and the existing consumer is returned unchanged.
    pub fn create_event_consumer(
        &self,
        name: &str,
        buffer_capacity: usize,
    ) -> Arc<CircularEventConsumer<T>> {
        if let Some(existing) = self.get_event_consumer(name) {
            return existing;
        }
        let mut map = self.inner.write().expect("event consumer registry poisoned");
        map.entry(name.to_string())
            .or_insert_with(|| {
                debug!(target: "fusebox::registry", name, capacity = buffer_capacity, "event consumer created");
                Arc::new(CircularEventConsumer::new(buffer_capacity))
            })
            .clone()
    }

    /// The consumer registered under `name`, if any.
    pub fn get_event_consumer(&self, name: &str) -> Option<Arc<CircularEventConsumer<T>>> {
        let map = self.inner.read().expect("event consumer registry poisoned");
        map.get(name).cloned()
    }

    /// Snapshot of all registered consumers, in no guaranteed order.
    pub fn all_event_consumers(&self) -> Vec<Arc<CircularEventConsumer<T>>> {
        let map = self.inner.read().expect("event consumer registry poisoned");
        map.values().cloned().collect()
    }
}
