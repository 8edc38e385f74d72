/// Codec errors.
pub mod frame_error;

/// Client and server frame commands.
pub mod stomp_command;
