/// What `handle_message_event` did with an event.
pub mod event_outcome;

/// Typed broker events.
pub mod message_event;

/// Errors raised while parsing broker events.
pub mod message_event_error;
