use std::sync::Arc;
use std::time::Duration;
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, trace, warn};
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::watch;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use crate::config::structs::broker_config::BrokerConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stomp::enums::stomp_command::StompCommand;
use crate::stomp::structs::stomp_frame::StompFrame;
use crate::transport::enums::session_end::SessionEnd;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::impls::transport_client::frame_to_message;
use crate::transport::structs::transport_state::TransportState;
use crate::transport::types::MessageCallback;

pub const SUBSCRIPTION_ID: &str = "sub-0";

const CLOSE_GRACE: Duration = Duration::from_secs(1);

pub struct SessionContext {
    pub config: Arc<BrokerConfig>,
    pub stats: Arc<StatsAtomics>,
    pub state: Arc<RwLock<TransportState>>,
    pub generation: u64,
    pub user_id: String,
    pub token: Option<String>,
    pub on_message: MessageCallback,
}

pub async fn run_session_loop(context: SessionContext, mut shutdown: watch::Receiver<bool>) {
    let reconnect_delay = context.config.reconnect_delay();

    loop {
        if *shutdown.borrow() || !context.state.read().is_current(context.generation) {
            break;
        }

        match run_session(&context, &mut shutdown).await {
            Ok(SessionEnd::Shutdown) => {
                info!("[TRANSPORT] Disconnected from {}", context.config.url);
                context.state.write().mark_disconnected(context.generation);
                break;
            }
            Ok(SessionEnd::Closed) => {
                info!("[TRANSPORT] Connection to {} closed", context.config.url);
            }
            Err(e) => {
                error!("[TRANSPORT] Connection error: {}", e);
                context.stats.update_stats(StatsEvent::ConnectErrors, 1);
            }
        }

        context.state.write().mark_disconnected(context.generation);
        if !context.state.read().is_current(context.generation) {
            break;
        }

        info!("[TRANSPORT] Reconnecting in {} ms...", reconnect_delay.as_millis());
        tokio::select! {
            _ = tokio::time::sleep(reconnect_delay) => {}
            _ = shutdown.changed() => break,
        }
        context.stats.update_stats(StatsEvent::Reconnects, 1);
    }
    debug!("[TRANSPORT] Session task for generation {} finished", context.generation);
}

async fn run_session(context: &SessionContext, shutdown: &mut watch::Receiver<bool>) -> Result<SessionEnd, TransportError> {
    let config = &context.config;
    let connect_timeout = config.connect_timeout();

    let (ws_stream, _) = timeout(connect_timeout, connect_async(config.url.as_str()))
        .await
        .map_err(|_| TransportError::Timeout(config.connect_timeout))??;
    let (mut write, mut read) = ws_stream.split();
    debug!("[TRANSPORT] Socket open, sending CONNECT");

    let mut connect = StompFrame::connect(&config.host(), &config.heartbeat_header())
        .with_header("userId", &context.user_id);
    if let Some(token) = context.token.as_deref() {
        connect = connect.with_header("Authorization", &format!("Bearer {}", token));
    }
    write.send(frame_to_message(&connect)).await?;
    context.stats.update_stats(StatsEvent::FramesSent, 1);

    let connected = timeout(connect_timeout, async {
        loop {
            let frame = match read.next().await {
                Some(Ok(Message::Text(text))) => StompFrame::decode(text.as_str().as_bytes())?,
                Some(Ok(Message::Binary(data))) => StompFrame::decode(&data)?,
                Some(Ok(Message::Close(_))) | None => return Err(TransportError::Closed),
                Some(Err(e)) => return Err(TransportError::WebSocket(e)),
                Some(Ok(_)) => continue,
            };
            match frame {
                Some(frame) => return Ok::<StompFrame, TransportError>(frame),
                None => trace!("[TRANSPORT] Heart-beat during handshake"),
            }
        }
    })
    .await
    .map_err(|_| TransportError::Timeout(config.connect_timeout))??;
    context.stats.update_stats(StatsEvent::FramesReceived, 1);

    match connected.command {
        StompCommand::Connected => {
            info!(
                "[TRANSPORT] STOMP session established (version {})",
                connected.header("version").unwrap_or("unknown")
            );
        }
        StompCommand::Error => {
            let message = connected.header("message").unwrap_or("no message").to_string();
            return Err(TransportError::Broker(message));
        }
        other => {
            return Err(TransportError::Handshake(format!("expected CONNECTED, got {}", other)));
        }
    }

    let (tx, mut rx) = unbounded_channel::<Message>();

    let write_handle = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let closing = matches!(message, Message::Close(_));
            if write.send(message).await.is_err() || closing {
                break;
            }
        }
    });

    let subscribe = StompFrame::subscribe(SUBSCRIPTION_ID, &config.subscribe_destination);
    if tx.send(frame_to_message(&subscribe)).is_err() {
        return Err(TransportError::Closed);
    }
    context.stats.update_stats(StatsEvent::FramesSent, 1);

    let still_current = {
        let mut state = context.state.write();
        let current = state.is_current(context.generation);
        if current {
            state.connected = true;
            state.sender = Some(tx.clone());
        }
        current
    };
    if !still_current {
        close_session(&tx, write_handle).await;
        return Ok(SessionEnd::Shutdown);
    }
    info!("[TRANSPORT] Subscribed to {}", config.subscribe_destination);

    let heartbeat_handle = (config.heartbeat_outgoing_ms > 0).then(|| {
        let heartbeat_tx = tx.clone();
        let period = Duration::from_millis(config.heartbeat_outgoing_ms);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                if heartbeat_tx.send(Message::Text(String::from("\n").into())).is_err() {
                    break;
                }
            }
        })
    });

    let end = loop {
        tokio::select! {
            _ = shutdown.changed() => break Ok(SessionEnd::Shutdown),
            message = read.next() => {
                let data = match message {
                    Some(Ok(Message::Text(text))) => text.as_str().as_bytes().to_vec(),
                    Some(Ok(Message::Binary(data))) => data.to_vec(),
                    Some(Ok(Message::Ping(_))) => {
                        debug!("[TRANSPORT] Received ping");
                        continue;
                    }
                    Some(Ok(Message::Pong(_))) => {
                        debug!("[TRANSPORT] Received pong");
                        continue;
                    }
                    Some(Ok(Message::Close(_))) => {
                        info!("[TRANSPORT] Received close from broker");
                        break Ok(SessionEnd::Closed);
                    }
                    Some(Ok(Message::Frame(_))) => continue,
                    Some(Err(e)) => break Err(TransportError::WebSocket(e)),
                    None => break Ok(SessionEnd::Closed),
                };
                if let Err(e) = handle_frame(context, &data) {
                    break Err(e);
                }
            }
        }
    };

    if let Some(handle) = heartbeat_handle {
        handle.abort();
    }
    context.state.write().mark_disconnected(context.generation);

    match end {
        Ok(SessionEnd::Shutdown) => {
            close_session(&tx, write_handle).await;
            Ok(SessionEnd::Shutdown)
        }
        other => {
            write_handle.abort();
            other
        }
    }
}

fn handle_frame(context: &SessionContext, data: &[u8]) -> Result<(), TransportError> {
    let frame = match StompFrame::decode(data) {
        Ok(Some(frame)) => frame,
        Ok(None) => {
            trace!("[TRANSPORT] Heart-beat");
            return Ok(());
        }
        Err(e) => {
            warn!("[TRANSPORT] Skipping undecodable frame: {}", e);
            return Ok(());
        }
    };
    context.stats.update_stats(StatsEvent::FramesReceived, 1);

    match frame.command {
        StompCommand::Message => {
            match frame.body_str().map_err(TransportError::from).and_then(|body| {
                serde_json::from_str::<Value>(body).map_err(TransportError::from)
            }) {
                Ok(payload) => (context.on_message)(payload),
                Err(e) => warn!("[TRANSPORT] Skipping MESSAGE with malformed body: {}", e),
            }
            Ok(())
        }
        StompCommand::Error => {
            let message = frame.header("message").unwrap_or("no message").to_string();
            error!("[TRANSPORT] Broker sent ERROR: {} {}", message, frame.body_str().unwrap_or_default());
            Err(TransportError::Broker(message))
        }
        StompCommand::Receipt => {
            debug!("[TRANSPORT] Receipt {}", frame.header("receipt-id").unwrap_or_default());
            Ok(())
        }
        other => {
            debug!("[TRANSPORT] Ignoring {} frame", other);
            Ok(())
        }
    }
}

async fn close_session(tx: &tokio::sync::mpsc::UnboundedSender<Message>, write_handle: tokio::task::JoinHandle<()>) {
    let disconnect = StompFrame::disconnect(&format!("disconnect-{}", uuid::Uuid::new_v4()));
    let _ = tx.send(frame_to_message(&disconnect));
    let _ = tx.send(Message::Close(None));
    if timeout(CLOSE_GRACE, write_handle).await.is_err() {
        debug!("[TRANSPORT] Close did not flush within {:?}", CLOSE_GRACE);
    }
}
