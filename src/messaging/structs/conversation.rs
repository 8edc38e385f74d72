use serde::{Deserialize, Serialize};
use crate::common::common::string_or_number;
use crate::messaging::structs::message::Message;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub participant_id: String,
    #[serde(default)]
    pub participant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    #[serde(default)]
    pub unread_count: u32,
}
