use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BrokerConfig {
    pub url: String,
    pub subscribe_destination: String,
    pub send_destination: String,
    pub reconnect_delay_ms: u64,
    pub connect_timeout: u64,
    pub heartbeat_outgoing_ms: u64,
    pub heartbeat_incoming_ms: u64,
}
