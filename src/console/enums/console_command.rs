#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Open(String),
    /// Sent over REST.
    Send { receiver_id: String, content: String },
    /// Published over the broker.
    Publish { receiver_id: String, content: String },
    Close,
    Stats,
    Help,
    Quit,
}
