//! Interactive stdin console used by the binary.
//!
//! One command per line: `/list`, `/open <conversationId>`,
//! `/send <userId> <text>`, `/publish <userId> <text>`, `/close`, `/stats`,
//! `/help` and `/quit`.

pub mod enums;
pub mod impls;
pub mod console;
