use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::config::structs::api_config::ApiConfig;
use crate::messaging::structs::conversation::Conversation;
use crate::messaging::structs::message::Message;
use crate::rest::enums::api_error::ApiError;
use crate::rest::structs::create_conversation_request::CreateConversationRequest;
use crate::rest::structs::http_message_api::HttpMessageApi;
use crate::rest::structs::send_message_request::SendMessageRequest;
use crate::rest::traits::message_api::MessageApi;
use crate::session::traits::session_provider::SessionProvider;

impl HttpMessageApi {
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionProvider>) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;
        Ok(Self {
            base_url,
            client,
            session,
        })
    }

    /// Appends percent-encoded path segments to the base URL, keeping any
    /// path prefix it already has.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request<B: Serialize + ?Sized>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String, ApiError> {
        debug!("[API] {} {}", method, url);
        let mut request = self.client.request(method, url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

/// Accepts either the bare value or a `{ "data": ... }` envelope.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    match serde_json::from_value::<T>(value.clone()) {
        Ok(decoded) => Ok(decoded),
        Err(e) => match value {
            Value::Object(mut object) if object.contains_key("data") => {
                let data = object.remove("data").unwrap_or(Value::Null);
                Ok(serde_json::from_value(data)?)
            }
            _ => Err(ApiError::Decode(e)),
        },
    }
}

#[async_trait]
impl MessageApi for HttpMessageApi {
    async fn list_conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        let url = self.endpoint(&["api", "messages", "conversations"])?;
        let body = self.request::<()>(Method::GET, url, None).await?;
        decode_body(&body)
    }

    async fn get_conversation_messages(&self, conversation_id: &str) -> Result<Vec<Message>, ApiError> {
        let url = self.endpoint(&["api", "messages", "conversations", conversation_id])?;
        let body = self.request::<()>(Method::GET, url, None).await?;
        decode_body(&body)
    }

    async fn send_message(&self, receiver_id: &str, content: &str) -> Result<Message, ApiError> {
        let url = self.endpoint(&["api", "messages", "send"])?;
        let payload = SendMessageRequest {
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
        };
        let body = self.request(Method::POST, url, Some(&payload)).await?;
        decode_body(&body)
    }

    async fn mark_read(&self, message_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "messages", message_id, "read"])?;
        self.request::<()>(Method::PUT, url, None).await?;
        Ok(())
    }

    async fn create_conversation(&self, participant_id: &str) -> Result<Conversation, ApiError> {
        let url = self.endpoint(&["api", "messages", "conversations"])?;
        let payload = CreateConversationRequest {
            participant_id: participant_id.to_string(),
        };
        let body = self.request(Method::POST, url, Some(&payload)).await?;
        decode_body(&body)
    }
}
