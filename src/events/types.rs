use std::sync::Arc;

pub type ListenerId = u64;
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;
