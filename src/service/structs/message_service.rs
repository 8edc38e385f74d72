use std::sync::Arc;
use parking_lot::RwLock;
use serde_json::Value;
use crate::events::structs::event_bus::EventBus;
use crate::events::types::ListenerId;
use crate::messaging::structs::message_store::MessageStore;
use crate::rest::traits::message_api::MessageApi;
use crate::session::traits::session_provider::SessionProvider;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::transport::structs::transport_client::TransportClient;

pub struct MessageService {
    pub(crate) session: Arc<dyn SessionProvider>,
    pub(crate) api: Arc<dyn MessageApi>,
    pub(crate) store: Arc<RwLock<MessageStore>>,
    pub(crate) bus: Arc<EventBus<Value>>,
    pub(crate) transport: Arc<TransportClient>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) store_listener: ListenerId,
}
