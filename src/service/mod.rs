//! Messaging service.
//!
//! `MessageService` ties the pieces together: the transport feeds raw broker
//! payloads into an `EventBus<serde_json::Value>`, a listener registered at
//! construction parses them into `MessageEvent`s and applies them to the
//! shared `MessageStore`, and the REST client handles history, sends, read
//! receipts and conversation creation.
//!
//! Read receipts are sent concurrently and every failure is returned to the
//! caller as a `ReadReceiptFailure`; the store keeps failed ids so they can be
//! retried with `retry_failed_read_receipts`.

pub mod enums;
pub mod structs;
pub mod impls;

mod tests;
