use chrono::{SecondsFormat, Utc};
use crate::messaging::structs::message::Message;

impl Message {
    pub fn new(id: &str, sender_id: &str, receiver_id: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            content: content.to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            read: false,
        }
    }

    /// Anything not sent by the current user is inbound, including every
    /// message when nobody is logged in.
    pub fn is_inbound(&self, current_user_id: Option<&str>) -> bool {
        current_user_id != Some(self.sender_id.as_str())
    }

    /// The other party: the receiver when we sent it, the sender otherwise.
    pub fn counterpart(&self, current_user_id: Option<&str>) -> &str {
        if self.is_inbound(current_user_id) {
            &self.sender_id
        } else {
            &self.receiver_id
        }
    }
}
