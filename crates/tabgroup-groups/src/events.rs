//! Change notifications

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Emitted after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupEvent {
    Created { group_id: String },
    TabsMerged { group_id: String, added: usize },
    Deleted { group_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Fan-out of events to registered listeners.
pub struct EventEmitter<T> {
    listeners: Arc<RwLock<Vec<(SubscriptionId, Listener<T>)>>>,
    next_id: Arc<AtomicU64>,
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn fire(&self, event: &T) {
        // Snapshot so listeners may subscribe or unsubscribe while handling
        let listeners: Vec<Listener<T>> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_fire_and_unsubscribe() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        let total = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&total);
        let id = emitter.subscribe(move |n| {
            sink.fetch_add(*n as usize, Ordering::SeqCst);
        });

        emitter.fire(&2);
        emitter.fire(&3);
        assert_eq!(total.load(Ordering::SeqCst), 5);

        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.fire(&10);
        assert_eq!(total.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_listener_may_unsubscribe_itself() {
        let emitter: EventEmitter<()> = EventEmitter::new();
        let handle = emitter.clone();
        let slot: Arc<RwLock<Option<SubscriptionId>>> = Arc::new(RwLock::new(None));

        let own_id = Arc::clone(&slot);
        let id = emitter.subscribe(move |_| {
            if let Some(id) = *own_id.read() {
                handle.unsubscribe(id);
            }
        });
        *slot.write() = Some(id);

        emitter.fire(&());
        assert_eq!(emitter.listener_count(), 0);
    }
}
