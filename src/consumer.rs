//! Fixed-capacity buffer of the most recent events.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Accumulates the most recent events sent to it, up to a fixed capacity.
///
/// Once the buffer is full, each new event evicts the oldest one. Shared
/// freely across producer and reader threads; readers get point-in-time
/// snapshots and never block producers for longer than a clone of the
/// buffered slice.
///
/// A capacity of zero is allowed and yields a buffer that is always empty:
/// every event is counted as evicted on arrival.
#[derive(Debug)]
pub struct CircularEventConsumer<T> {
    buffer: Mutex<VecDeque<T>>,
    capacity: usize,
    evicted: AtomicU64,
}

impl<T> CircularEventConsumer<T> {
    /// Create a consumer holding at most `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self { buffer: Mutex::new(VecDeque::new()), capacity, evicted: AtomicU64::new(0) }
    }

    /// Record an event, evicting the oldest one if the buffer is full.
    pub fn consume_event(&self, event: T) {
        if self.capacity == 0 {
            self.evicted.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let mut buffer = self.buffer.lock().expect("event buffer poisoned");
        if buffer.len() >= self.capacity {
            buffer.pop_front();
            self.evicted.fetch_add(1, Ordering::Relaxed);
        }
        buffer.push_back(event);
    }

    /// Number of events currently buffered.
    pub fn len(&self) -> usize {
        self.buffer.lock().expect("event buffer poisoned").len()
    }

    /// True if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().expect("event buffer poisoned").is_empty()
    }

    /// The fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of events evicted so far.
    pub fn evicted(&self) -> u64 {
        self.evicted.load(Ordering::Relaxed)
    }

    /// Drop all buffered events. The eviction counter is unaffected.
    pub fn clear(&self) {
        self.buffer.lock().expect("event buffer poisoned").clear();
    }
}

impl<T: Clone> CircularEventConsumer<T> {
    /// Snapshot of the buffered events, oldest first.
    pub fn buffered_events(&self) -> Vec<T> {
        self.buffer.lock().expect("event buffer poisoned").iter().cloned().collect()
    }
}
