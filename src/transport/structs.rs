/// Body published for outbound chat messages.
pub mod outbound_chat;
/// The client handle.
pub mod transport_client;
/// Flags and handles shared with the session task.
pub mod transport_state;
