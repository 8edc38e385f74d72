use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use log::{debug, info, warn};
use crate::messaging::enums::event_outcome::EventOutcome;
use crate::messaging::enums::message_event::MessageEvent;
use crate::messaging::structs::conversation::Conversation;
use crate::messaging::structs::message::Message;
use crate::messaging::structs::message_store::MessageStore;
use crate::messaging::structs::message_store_state::MessageStoreState;
use crate::session::traits::session_provider::SessionProvider;

impl MessageStore {
    pub fn new(session: Arc<dyn SessionProvider>) -> Self {
        Self {
            session,
            state: MessageStoreState::default(),
            pending_read_receipts: BTreeSet::new(),
            failed_read_receipts: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> &MessageStoreState {
        &self.state
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.state.conversations
    }

    pub fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.state.conversations.iter().find(|conversation| conversation.id == conversation_id)
    }

    pub fn messages(&self, conversation_id: &str) -> &[Message] {
        self.state
            .messages
            .get(conversation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn current_conversation(&self) -> Option<&str> {
        self.state.current_conversation.as_deref()
    }

    pub fn total_unread(&self) -> u64 {
        self.state
            .conversations
            .iter()
            .map(|conversation| conversation.unread_count as u64)
            .sum()
    }

    /// Returns `true` when the conversation was new.
    pub fn upsert_conversation(&mut self, conversation: Conversation) -> bool {
        if let Some(existing) = self
            .state
            .conversations
            .iter_mut()
            .find(|existing| existing.id == conversation.id)
        {
            existing.merge(conversation);
            return false;
        }

        self.state.messages.entry(conversation.id.clone()).or_default();
        self.state.conversations.push(conversation);
        true
    }

    /// Routes the message to the conversation whose participant is the
    /// message's counterpart. Unroutable messages leave the store untouched
    /// and yield `None`. Duplicates are appended as-is.
    pub fn add_message(&mut self, message: Message) -> Option<String> {
        let current_user_id = self.session.current_user_id();
        let current_user_id = current_user_id.as_deref();
        let counterpart = message.counterpart(current_user_id);

        let conversation = match self
            .state
            .conversations
            .iter_mut()
            .find(|conversation| conversation.participant_id == counterpart)
        {
            Some(conversation) => conversation,
            None => {
                warn!(
                    "[MESSAGING] Dropping message {}: no conversation with participant {}",
                    message.id, counterpart
                );
                return None;
            }
        };

        if message.is_inbound(current_user_id) && !message.read {
            conversation.unread_count = conversation.unread_count.saturating_add(1);
        }
        conversation.last_message = Some(message.clone());

        let conversation_id = conversation.id.clone();
        self.state
            .messages
            .entry(conversation_id.clone())
            .or_default()
            .push(message);
        Some(conversation_id)
    }

    /// Sets the active conversation. Selecting one marks it read and returns
    /// the ids that need a read receipt.
    pub fn set_current_conversation(&mut self, conversation_id: Option<&str>) -> Vec<String> {
        self.state.current_conversation = conversation_id.map(str::to_string);
        match conversation_id {
            Some(conversation_id) => self.mark_conversation_as_read(conversation_id),
            None => Vec::new(),
        }
    }

    pub fn mark_conversation_as_read(&mut self, conversation_id: &str) -> Vec<String> {
        let current_user_id = self.session.current_user_id();
        let current_user_id = current_user_id.as_deref();

        let conversation = match self
            .state
            .conversations
            .iter_mut()
            .find(|conversation| conversation.id == conversation_id)
        {
            Some(conversation) => conversation,
            None => {
                debug!("[MESSAGING] Cannot mark unknown conversation {} as read", conversation_id);
                return Vec::new();
            }
        };
        conversation.unread_count = 0;

        let mut marked = Vec::new();
        if let Some(messages) = self.state.messages.get_mut(conversation_id) {
            for message in messages.iter_mut() {
                if message.is_inbound(current_user_id) && !message.read {
                    message.read = true;
                    if !marked.contains(&message.id) {
                        marked.push(message.id.clone());
                    }
                }
            }
        }

        if let Some(last_message) = conversation.last_message.as_mut() {
            if marked.contains(&last_message.id) {
                last_message.read = true;
            }
        }

        for message_id in &marked {
            self.failed_read_receipts.remove(message_id);
            self.pending_read_receipts.insert(message_id.clone());
        }
        marked
    }

    pub fn handle_message_event(&mut self, event: &MessageEvent) -> EventOutcome {
        match event {
            MessageEvent::NewMessage(message) => match self.add_message(message.clone()) {
                Some(conversation_id) => EventOutcome::Routed(conversation_id),
                None => EventOutcome::Dropped,
            },
            MessageEvent::MessageRead { message_id } => {
                if self.mark_message_read(message_id) {
                    EventOutcome::ReadApplied
                } else {
                    debug!("[MESSAGING] Read event for unknown message {}", message_id);
                    EventOutcome::ReadUnmatched
                }
            }
            MessageEvent::UserOnline { .. } | MessageEvent::UserOffline { .. } | MessageEvent::Other(_) => {
                info!("[MESSAGING] Unhandled message event type: {}", event.event_type());
                EventOutcome::Ignored(event.event_type().to_string())
            }
        }
    }

    /// Scans every conversation; message volume is expected to stay small.
    pub fn mark_message_read(&mut self, message_id: &str) -> bool {
        let mut found = false;
        for messages in self.state.messages.values_mut() {
            for message in messages.iter_mut().filter(|message| message.id == message_id) {
                message.read = true;
                found = true;
            }
        }
        for conversation in self.state.conversations.iter_mut() {
            if let Some(last_message) = conversation.last_message.as_mut() {
                if last_message.id == message_id {
                    last_message.read = true;
                }
            }
        }
        found
    }

    /// Replays fetched history into a conversation, skipping ids already
    /// held. History comes first, followed by live messages the server did
    /// not return yet. A message read locally stays read. Unread counters
    /// are left alone. Returns how many messages were added.
    pub fn merge_history(&mut self, conversation_id: &str, history: Vec<Message>) -> usize {
        if self.conversation(conversation_id).is_none() {
            warn!("[MESSAGING] History for unknown conversation {} ignored", conversation_id);
            return 0;
        }

        let existing = self.state.messages.remove(conversation_id).unwrap_or_default();
        let existing_ids: HashSet<String> = existing.iter().map(|message| message.id.clone()).collect();
        let locally_read: HashSet<String> = existing
            .iter()
            .filter(|message| message.read)
            .map(|message| message.id.clone())
            .collect();

        let mut seen = HashSet::new();
        let mut added = 0;
        let mut merged = Vec::with_capacity(history.len() + existing.len());
        for mut message in history {
            if !seen.insert(message.id.clone()) {
                continue;
            }
            if locally_read.contains(&message.id) {
                message.read = true;
            }
            if !existing_ids.contains(&message.id) {
                added += 1;
            }
            merged.push(message);
        }
        for message in existing {
            if seen.insert(message.id.clone()) {
                merged.push(message);
            }
        }

        let last_message = merged.last().cloned();
        self.state.messages.insert(conversation_id.to_string(), merged);
        if let (Some(last_message), Some(conversation)) = (
            last_message,
            self.state.conversations.iter_mut().find(|conversation| conversation.id == conversation_id),
        ) {
            conversation.last_message = Some(last_message);
        }
        added
    }

    pub fn read_receipts_pending(&self) -> Vec<String> {
        self.pending_read_receipts.iter().cloned().collect()
    }

    pub fn read_receipts_failed(&self) -> Vec<String> {
        self.failed_read_receipts.iter().cloned().collect()
    }

    /// Records the server's answer for one receipt. Returns `false` when the
    /// id was not pending.
    pub fn resolve_read_receipt(&mut self, message_id: &str, acknowledged: bool) -> bool {
        if !self.pending_read_receipts.remove(message_id) {
            return false;
        }
        if !acknowledged {
            self.failed_read_receipts.insert(message_id.to_string());
        }
        true
    }

    /// Moves failed receipts back to pending and returns them for a retry.
    pub fn take_failed_read_receipts(&mut self) -> Vec<String> {
        let failed: Vec<String> = std::mem::take(&mut self.failed_read_receipts).into_iter().collect();
        for message_id in &failed {
            self.pending_read_receipts.insert(message_id.clone());
        }
        failed
    }
}
