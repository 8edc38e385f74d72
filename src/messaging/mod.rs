//! Conversation and message store.
//!
//! `MessageStore` is the client's single source of truth for conversations,
//! their message lists and unread counters. It is a plain value: the caller
//! owns it (usually as `Arc<parking_lot::RwLock<MessageStore>>`) and injects
//! the `SessionProvider` used to decide which side of a message is "us".
//!
//! # Unread accounting
//!
//! `unread_count` goes up by one for every inbound unread message routed to a
//! conversation and drops to 0 when the conversation becomes current. It is
//! never reconciled against the server on its own; reloading the conversation
//! list overwrites it.
//!
//! # Read receipts
//!
//! Marking a conversation read returns the ids that flipped to `read = true`
//! and records them as pending. Whoever sends the receipts reports back with
//! `resolve_read_receipt`, so failed receipts stay visible instead of being
//! lost.
//!
//! # Inbound events
//!
//! Payloads from the broker look like `{ "type": "NEW_MESSAGE", "data": {...} }`
//! and are parsed into `MessageEvent` before `handle_message_event` applies them.

/// Event types and outcomes.
pub mod enums;

/// Message, conversation and store structures.
pub mod structs;

/// Implementation blocks for the store and its data types.
pub mod impls;
