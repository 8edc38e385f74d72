use std::sync::Arc;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tokio_tungstenite::tungstenite::Message;

pub type MessageCallback = Arc<dyn Fn(Value) + Send + Sync>;

pub type OutboundSender = UnboundedSender<Message>;
