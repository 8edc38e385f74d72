use tokio::sync::watch;
use crate::transport::types::OutboundSender;

#[derive(Debug, Default)]
pub struct TransportState {
    /// Set from `connect` until `disconnect`, across reconnects.
    pub active: bool,
    /// Set only while a subscribed STOMP session is up.
    pub connected: bool,
    /// Bumped on every `connect` so a stale session task cannot touch a newer session's flags.
    pub generation: u64,
    pub sender: Option<OutboundSender>,
    pub shutdown: Option<watch::Sender<bool>>,
}
