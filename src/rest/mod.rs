//! REST bindings for the message endpoints.
//!
//! History, sending, read receipts and conversation creation go over plain
//! HTTP; only live delivery uses the broker. `MessageApi` is the seam the
//! service talks to, `HttpMessageApi` is the `reqwest` implementation.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list_conversations` | `GET /api/messages/conversations` |
//! | `get_conversation_messages` | `GET /api/messages/conversations/:id` |
//! | `send_message` | `POST /api/messages/send` with `{ receiverId, content }` |
//! | `mark_read` | `PUT /api/messages/:id/read` |
//! | `create_conversation` | `POST /api/messages/conversations` with `{ participantId }` |
//!
//! Responses are decoded either as the bare value or from a `{ "data": ... }`
//! envelope.

pub mod enums;
pub mod structs;
pub mod traits;
pub mod impls;
