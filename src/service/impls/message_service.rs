use std::sync::Arc;
use futures_util::future::join_all;
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde_json::Value;
use crate::config::structs::broker_config::BrokerConfig;
use crate::events::structs::event_bus::EventBus;
use crate::messaging::enums::event_outcome::EventOutcome;
use crate::messaging::enums::message_event::MessageEvent;
use crate::messaging::structs::conversation::Conversation;
use crate::messaging::structs::message::Message;
use crate::messaging::structs::message_store::MessageStore;
use crate::rest::traits::message_api::MessageApi;
use crate::service::enums::service_error::ServiceError;
use crate::service::structs::message_service::MessageService;
use crate::service::structs::read_receipt_failure::ReadReceiptFailure;
use crate::session::structs::user_info::UserInfo;
use crate::session::traits::session_provider::SessionProvider;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::transport::structs::transport_client::TransportClient;

impl MessageService {
    pub fn new(broker: BrokerConfig, session: Arc<dyn SessionProvider>, api: Arc<dyn MessageApi>) -> Self {
        let stats = Arc::new(StatsAtomics::new());
        let store = Arc::new(RwLock::new(MessageStore::new(session.clone())));
        let bus: Arc<EventBus<Value>> = Arc::new(EventBus::new());

        let listener_store = store.clone();
        let listener_stats = stats.clone();
        let store_listener = bus.subscribe(move |payload: &Value| {
            apply_payload(&listener_store, &listener_stats, payload);
        });

        let transport = Arc::new(TransportClient::new(broker, stats.clone()));
        Self {
            session,
            api,
            store,
            bus,
            transport,
            stats,
            store_listener,
        }
    }

    fn current_user(&self) -> Result<UserInfo, ServiceError> {
        self.session.current_user().ok_or(ServiceError::NotLoggedIn)
    }

    /// Starts the broker session for the logged-in user. `Ok(false)` means a
    /// session was already active.
    pub fn connect(&self) -> Result<bool, ServiceError> {
        let user = self.current_user()?;
        let bus = self.bus.clone();
        Ok(self.transport.connect(&user.id, user.token, move |payload| {
            bus.dispatch(&payload);
        }))
    }

    pub fn disconnect(&self) -> bool {
        self.transport.disconnect()
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Fetches the conversation list and upserts every entry. Returns how many
    /// conversations the server sent.
    pub async fn load_conversations(&self) -> Result<usize, ServiceError> {
        let conversations = self.api.list_conversations().await?;
        let count = conversations.len();
        let mut store = self.store.write();
        for conversation in conversations {
            store.upsert_conversation(conversation);
        }
        info!("[SERVICE] Loaded {} conversations", count);
        Ok(count)
    }

    /// Loads history, makes the conversation current and sends read receipts
    /// for what that marked read.
    pub async fn open_conversation(&self, conversation_id: &str) -> Result<Vec<ReadReceiptFailure>, ServiceError> {
        let history = self.api.get_conversation_messages(conversation_id).await?;
        let marked = {
            let mut store = self.store.write();
            let added = store.merge_history(conversation_id, history);
            debug!("[SERVICE] Merged {} history messages into {}", added, conversation_id);
            store.set_current_conversation(Some(conversation_id))
        };
        Ok(self.flush_read_receipts(marked).await)
    }

    pub async fn select_conversation(&self, conversation_id: Option<&str>) -> Vec<ReadReceiptFailure> {
        let marked = self.store.write().set_current_conversation(conversation_id);
        self.flush_read_receipts(marked).await
    }

    /// Sends over REST and records the acknowledged message locally.
    pub async fn send_message(&self, receiver_id: &str, content: &str) -> Result<Message, ServiceError> {
        self.current_user()?;
        let message = self.api.send_message(receiver_id, content).await?;
        if self.store.write().add_message(message.clone()).is_none() {
            warn!("[SERVICE] Sent message {} has no local conversation", message.id);
        }
        Ok(message)
    }

    /// Publishes over the broker. Fails with `NotConnected` while the
    /// transport is down.
    pub fn publish_message(&self, receiver_id: &str, content: &str) -> Result<(), ServiceError> {
        let user = self.current_user()?;
        self.transport.send_message(&user.id, receiver_id, content)?;
        Ok(())
    }

    pub async fn start_conversation(&self, participant_id: &str) -> Result<Conversation, ServiceError> {
        let conversation = self.api.create_conversation(participant_id).await?;
        self.store.write().upsert_conversation(conversation.clone());
        Ok(conversation)
    }

    pub async fn flush_read_receipts(&self, message_ids: Vec<String>) -> Vec<ReadReceiptFailure> {
        if message_ids.is_empty() {
            return Vec::new();
        }

        let results = join_all(message_ids.iter().map(|message_id| self.api.mark_read(message_id))).await;

        let mut failures = Vec::new();
        let mut store = self.store.write();
        for (message_id, result) in message_ids.into_iter().zip(results) {
            match result {
                Ok(()) => {
                    store.resolve_read_receipt(&message_id, true);
                    self.stats.update_stats(StatsEvent::ReadReceiptsSent, 1);
                }
                Err(error) => {
                    warn!("[SERVICE] Read receipt for {} failed: {}", message_id, error);
                    store.resolve_read_receipt(&message_id, false);
                    self.stats.update_stats(StatsEvent::ReadReceiptsFailed, 1);
                    failures.push(ReadReceiptFailure { message_id, error });
                }
            }
        }
        failures
    }

    pub async fn retry_failed_read_receipts(&self) -> Vec<ReadReceiptFailure> {
        let failed = self.store.write().take_failed_read_receipts();
        if !failed.is_empty() {
            info!("[SERVICE] Retrying {} read receipts", failed.len());
        }
        self.flush_read_receipts(failed).await
    }

    pub fn store(&self) -> Arc<RwLock<MessageStore>> {
        self.store.clone()
    }

    pub fn bus(&self) -> Arc<EventBus<Value>> {
        self.bus.clone()
    }

    pub fn transport(&self) -> Arc<TransportClient> {
        self.transport.clone()
    }

    pub fn stats(&self) -> Stats {
        self.stats.get_stats()
    }
}

impl Drop for MessageService {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.store_listener);
        self.transport.disconnect();
    }
}

fn apply_payload(store: &RwLock<MessageStore>, stats: &StatsAtomics, payload: &Value) {
    let event = match MessageEvent::from_value(payload) {
        Ok(event) => event,
        Err(e) => {
            warn!("[SERVICE] Ignoring broker payload: {}", e);
            return;
        }
    };
    match store.write().handle_message_event(&event) {
        EventOutcome::Routed(conversation_id) => {
            debug!("[SERVICE] {} routed to {}", event.event_type(), conversation_id);
            stats.update_stats(StatsEvent::MessagesRouted, 1);
        }
        EventOutcome::Dropped => {
            stats.update_stats(StatsEvent::MessagesDropped, 1);
        }
        EventOutcome::ReadApplied | EventOutcome::ReadUnmatched | EventOutcome::Ignored(_) => {}
    }
}
