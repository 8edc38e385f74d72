use serde::Deserialize;
use serde_json::{json, Value};
use crate::common::common::string_or_number;
use crate::messaging::enums::message_event::MessageEvent;
use crate::messaging::enums::message_event_error::MessageEventError;
use crate::messaging::structs::message::Message;

pub const NEW_MESSAGE: &str = "NEW_MESSAGE";
pub const MESSAGE_READ: &str = "MESSAGE_READ";
pub const USER_ONLINE: &str = "USER_ONLINE";
pub const USER_OFFLINE: &str = "USER_OFFLINE";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageReadData {
    #[serde(alias = "id", deserialize_with = "string_or_number")]
    message_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserPresenceData {
    #[serde(alias = "id", deserialize_with = "string_or_number")]
    user_id: String,
}

impl MessageEvent {
    pub fn from_value(value: &Value) -> Result<MessageEvent, MessageEventError> {
        let event_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(MessageEventError::MissingType)?;
        let data = value.get("data").cloned().unwrap_or(Value::Null);

        match event_type {
            NEW_MESSAGE => Ok(MessageEvent::NewMessage(parse_data::<Message>(event_type, data)?)),
            MESSAGE_READ => {
                let data: MessageReadData = parse_data(event_type, data)?;
                Ok(MessageEvent::MessageRead { message_id: data.message_id })
            }
            USER_ONLINE => {
                let data: UserPresenceData = parse_data(event_type, data)?;
                Ok(MessageEvent::UserOnline { user_id: data.user_id })
            }
            USER_OFFLINE => {
                let data: UserPresenceData = parse_data(event_type, data)?;
                Ok(MessageEvent::UserOffline { user_id: data.user_id })
            }
            other => Ok(MessageEvent::Other(other.to_string())),
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            MessageEvent::NewMessage(_) => NEW_MESSAGE,
            MessageEvent::MessageRead { .. } => MESSAGE_READ,
            MessageEvent::UserOnline { .. } => USER_ONLINE,
            MessageEvent::UserOffline { .. } => USER_OFFLINE,
            MessageEvent::Other(event_type) => event_type.as_str(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            MessageEvent::NewMessage(message) => json!({ "type": NEW_MESSAGE, "data": message }),
            MessageEvent::MessageRead { message_id } => json!({ "type": MESSAGE_READ, "data": { "messageId": message_id } }),
            MessageEvent::UserOnline { user_id } => json!({ "type": USER_ONLINE, "data": { "userId": user_id } }),
            MessageEvent::UserOffline { user_id } => json!({ "type": USER_OFFLINE, "data": { "userId": user_id } }),
            MessageEvent::Other(event_type) => json!({ "type": event_type }),
        }
    }
}

fn parse_data<T: serde::de::DeserializeOwned>(event_type: &str, data: Value) -> Result<T, MessageEventError> {
    serde_json::from_value(data).map_err(|e| MessageEventError::InvalidData {
        event_type: event_type.to_string(),
        reason: e.to_string(),
    })
}
