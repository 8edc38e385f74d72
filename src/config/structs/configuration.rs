use serde::{Deserialize, Serialize};
use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::broker_config::BrokerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::session_config::SessionConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub broker: BrokerConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub sentry_config: SentryConfig,
}
