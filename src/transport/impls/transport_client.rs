use std::sync::Arc;
use log::{info, warn};
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::watch;
use tokio_tungstenite::tungstenite::Message;
use crate::config::structs::broker_config::BrokerConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stomp::structs::stomp_frame::StompFrame;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::session::{run_session_loop, SessionContext};
use crate::transport::structs::outbound_chat::OutboundChat;
use crate::transport::structs::transport_client::TransportClient;
use crate::transport::structs::transport_state::TransportState;

impl TransportClient {
    pub fn new(config: BrokerConfig, stats: Arc<StatsAtomics>) -> Self {
        Self {
            config: Arc::new(config),
            stats,
            state: Arc::new(RwLock::new(TransportState::new())),
        }
    }

    /// Starts the session task. Returns `false` without doing anything when
    /// the client is already connected or connecting.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect<F>(&self, user_id: &str, token: Option<String>, on_message: F) -> bool
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let generation = {
            let mut state = self.state.write();
            if state.active {
                info!("[TRANSPORT] Already active, ignoring connect for user {}", user_id);
                return false;
            }
            state.active = true;
            state.connected = false;
            state.generation = state.generation.wrapping_add(1);
            state.shutdown = Some(shutdown_tx);
            state.generation
        };

        info!("[TRANSPORT] Connecting to {} as user {}", self.config.url, user_id);
        let context = SessionContext {
            config: self.config.clone(),
            stats: self.stats.clone(),
            state: self.state.clone(),
            generation,
            user_id: user_id.to_string(),
            token,
            on_message: Arc::new(on_message),
        };
        tokio::spawn(run_session_loop(context, shutdown_rx));
        true
    }

    /// Clears the flags right away and tells the session task to send
    /// DISCONNECT and close. Returns `false` when nothing was active.
    pub fn disconnect(&self) -> bool {
        let mut state = self.state.write();
        if !state.active {
            return false;
        }
        state.active = false;
        state.connected = false;
        state.sender = None;
        if let Some(shutdown) = state.shutdown.take() {
            let _ = shutdown.send(true);
        }
        info!("[TRANSPORT] Disconnect requested");
        true
    }

    pub fn is_connected(&self) -> bool {
        self.state.read().connected
    }

    pub fn is_active(&self) -> bool {
        self.state.read().active
    }

    pub fn send_message(&self, from_user_id: &str, to_user_id: &str, content: &str) -> Result<(), TransportError> {
        let chat = OutboundChat {
            from_user_id: from_user_id.to_string(),
            to_user_id: to_user_id.to_string(),
            content: content.to_string(),
        };
        let body = serde_json::to_vec(&chat)?;
        let frame = StompFrame::send(&self.config.send_destination, "application/json", body);

        let state = self.state.read();
        let sent = match (state.connected, state.sender.as_ref()) {
            (true, Some(sender)) => sender.send(frame_to_message(&frame)).is_ok(),
            _ => false,
        };
        if !sent {
            warn!("[TRANSPORT] Not connected, message to {} rejected", to_user_id);
            self.stats.update_stats(StatsEvent::SendRejected, 1);
            return Err(TransportError::NotConnected);
        }
        self.stats.update_stats(StatsEvent::FramesSent, 1);
        Ok(())
    }
}

pub(crate) fn frame_to_message(frame: &StompFrame) -> Message {
    Message::Text(String::from_utf8_lossy(&frame.encode()).into_owned().into())
}
