use std::time::Duration;
use crate::config::structs::broker_config::BrokerConfig;

impl BrokerConfig {
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Value of the STOMP `heart-beat` header, `<outgoing>,<incoming>`.
    pub fn heartbeat_header(&self) -> String {
        format!("{},{}", self.heartbeat_outgoing_ms, self.heartbeat_incoming_ms)
    }

    /// Host part of the broker URL, sent as the STOMP `host` header.
    pub fn host(&self) -> String {
        let without_scheme = self.url.split("://").nth(1).unwrap_or(self.url.as_str());
        without_scheme
            .split(['/', '?'])
            .next()
            .unwrap_or_default()
            .to_string()
    }
}
