pub mod http_message_api;
