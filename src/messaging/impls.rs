pub mod conversation;
pub mod message;
pub mod message_event;
pub mod message_store;
