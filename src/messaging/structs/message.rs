use serde::{Deserialize, Serialize};
use crate::common::common::string_or_number;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub content: String,
    #[serde(deserialize_with = "string_or_number")]
    pub sender_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub receiver_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}
