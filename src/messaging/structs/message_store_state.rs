use std::collections::BTreeMap;
use serde::Serialize;
use crate::messaging::structs::conversation::Conversation;
use crate::messaging::structs::message::Message;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageStoreState {
    pub conversations: Vec<Conversation>,
    pub current_conversation: Option<String>,
    /// Conversation id to messages, in arrival order.
    pub messages: BTreeMap<String, Vec<Message>>,
}
