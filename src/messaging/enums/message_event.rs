use crate::messaging::structs::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    NewMessage(Message),
    MessageRead { message_id: String },
    UserOnline { user_id: String },
    UserOffline { user_id: String },
    /// Any `type` this client does not know about.
    Other(String),
}
