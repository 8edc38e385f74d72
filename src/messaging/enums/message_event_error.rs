use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageEventError {
    #[error("Event payload has no \"type\" field")]
    MissingType,

    #[error("Invalid data for {event_type}: {reason}")]
    InvalidData { event_type: String, reason: String },
}
