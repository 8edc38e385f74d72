use thiserror::Error;
use tokio_tungstenite::tungstenite;
use crate::stomp::enums::frame_error::FrameError;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Not connected to the message broker")]
    NotConnected,
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),
    #[error("Timed out after {0} seconds")]
    Timeout(u64),
    #[error("Handshake failed: {0}")]
    Handshake(String),
    #[error("Broker error: {0}")]
    Broker(String),
    #[error("Connection closed during handshake")]
    Closed,
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
