/// Body of `POST /api/messages/conversations`.
pub mod create_conversation_request;
/// `reqwest` backed client.
pub mod http_message_api;
/// Body of `POST /api/messages/send`.
pub mod send_message_request;
