use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundChat {
    pub from_user_id: String,
    pub to_user_id: String,
    pub content: String,
}
