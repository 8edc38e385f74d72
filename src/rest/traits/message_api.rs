use async_trait::async_trait;
use crate::messaging::structs::conversation::Conversation;
use crate::messaging::structs::message::Message;
use crate::rest::enums::api_error::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn list_conversations(&self) -> Result<Vec<Conversation>, ApiError>;

    async fn get_conversation_messages(&self, conversation_id: &str) -> Result<Vec<Message>, ApiError>;

    /// Returns the message as stored by the server.
    async fn send_message(&self, receiver_id: &str, content: &str) -> Result<Message, ApiError>;

    async fn mark_read(&self, message_id: &str) -> Result<(), ApiError>;

    async fn create_conversation(&self, participant_id: &str) -> Result<Conversation, ApiError>;
}
