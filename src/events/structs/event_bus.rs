use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use crate::events::types::{Listener, ListenerId};

pub struct EventBus<T> {
    pub(crate) listeners: RwLock<Vec<(ListenerId, Listener<T>)>>,
    pub(crate) next_id: AtomicU64,
}
