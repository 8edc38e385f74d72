use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use log::trace;
use parking_lot::RwLock;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use crate::events::structs::event_bus::EventBus;
use crate::events::types::{Listener, ListenerId};

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Runs every listener attached at the time of the call and returns how
    /// many ran. The list is snapshotted first, so listeners may subscribe or
    /// unsubscribe from inside a callback.
    pub fn dispatch(&self, event: &T) -> usize {
        let listeners: Vec<Listener<T>> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        if listeners.is_empty() {
            trace!("[EVENTS] Event dispatched without listeners, dropped");
        }
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl<T: Clone + Send + 'static> EventBus<T> {
    /// Forwards events into an unbounded channel for async consumers.
    pub fn subscribe_channel(&self) -> (ListenerId, UnboundedReceiver<T>) {
        let (tx, rx) = unbounded_channel();
        let id = self.subscribe(move |event: &T| {
            let _ = tx.send(event.clone());
        });
        (id, rx)
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
