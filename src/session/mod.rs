//! Local session data.
//!
//! The logged-in user is persisted as a small JSON blob (`{ id, username,
//! token }`). Routing of inbound messages needs the current user id, and it
//! is read through `SessionProvider` at call time so a login or logout is
//! picked up without restarting anything.

/// Session data structures.
pub mod structs;

/// Session provider trait.
pub mod traits;

/// Implementation blocks for session providers.
pub mod impls;
