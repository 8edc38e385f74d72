//! STOMP 1.2 frame codec.
//!
//! The message broker speaks STOMP over WebSocket. Every WebSocket message
//! carries one frame:
//!
//! ```text
//! COMMAND
//! header1:value1
//! header2:value2
//!
//! body^@
//! ```
//!
//! A payload made only of EOLs is a heart-beat and decodes to `None`.
//! Header names and values are escaped on every frame except CONNECT and
//! CONNECTED.

/// Frame commands and codec errors.
pub mod enums;

/// Frame structure.
pub mod structs;

/// Encoding, decoding and frame builders.
pub mod impls;
