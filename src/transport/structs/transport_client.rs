use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::broker_config::BrokerConfig;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::transport::structs::transport_state::TransportState;

#[derive(Debug)]
pub struct TransportClient {
    pub config: Arc<BrokerConfig>,
    pub stats: Arc<StatsAtomics>,
    pub(crate) state: Arc<RwLock<TransportState>>,
}
