pub mod message_api;
