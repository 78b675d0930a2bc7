//! Change-notification fan-out
//!
//! An explicit observer list: every registered callback is invoked
//! synchronously, in registration order, with the full current snapshot.
//! Callbacks must not block; long-running work belongs to the subscriber.
//! Single logical writer, so no locking.

use crate::model::Record;

/// A registered change listener.
pub type Subscriber = Box<dyn Fn(&[Record])>;

/// Ordered list of change listeners.
#[derive(Default)]
pub struct SubscriberRegistry {
    subscribers: Vec<Subscriber>,
}

impl SubscriberRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn register(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Invoke every listener with the current snapshot.
    pub fn notify_all(&self, snapshot: &[Record]) {
        for subscriber in &self.subscribers {
            subscriber(snapshot);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
