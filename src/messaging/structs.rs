/// Conversation summary.
pub mod conversation;

/// Chat message.
pub mod message;

/// The store and its read-receipt bookkeeping.
pub mod message_store;

/// Value snapshot of the store.
pub mod message_store_state;
