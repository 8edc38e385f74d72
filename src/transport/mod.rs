//! STOMP-over-WebSocket transport client.
//!
//! A `TransportClient` owns one broker session at a time. `connect` spawns a
//! background task that dials the configured broker URL, performs the STOMP
//! handshake, subscribes once to the per-user queue and hands every MESSAGE
//! body (parsed as JSON) to the caller's callback.
//!
//! # Reconnection
//!
//! When the socket drops, the broker sends ERROR, or the handshake fails, the
//! task clears the `connected` flag, waits `reconnect_delay_ms` and dials
//! again. It keeps doing so until `disconnect` is called. There is no backoff
//! and no retry limit.
//!
//! # Sending
//!
//! `send_message` publishes `{ fromUserId, toUserId, content }` to the send
//! destination. While disconnected it returns `TransportError::NotConnected`
//! instead of queueing.

/// Transport errors and session outcomes.
pub mod enums;

/// Client, shared state and wire payloads.
pub mod structs;

/// Implementation blocks for the client and its state.
pub mod impls;

/// Background session task.
pub mod session;

/// Callback and channel aliases.
pub mod types;

mod tests;
