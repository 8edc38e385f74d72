#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The message was appended to this conversation.
    Routed(String),
    /// No conversation matched the message's counterpart.
    Dropped,
    ReadApplied,
    ReadUnmatched,
    Ignored(String),
}
