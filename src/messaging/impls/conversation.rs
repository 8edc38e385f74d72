use crate::messaging::structs::conversation::Conversation;

impl Conversation {
    pub fn new(id: &str, participant_id: &str, participant_name: &str) -> Self {
        Self {
            id: id.to_string(),
            participant_id: participant_id.to_string(),
            participant_name: participant_name.to_string(),
            participant_avatar: None,
            last_message: None,
            unread_count: 0,
        }
    }

    /// Shallow merge: required fields are overwritten, optional ones only
    /// when the update carries a value.
    pub fn merge(&mut self, update: Conversation) {
        self.participant_id = update.participant_id;
        self.participant_name = update.participant_name;
        if update.participant_avatar.is_some() {
            self.participant_avatar = update.participant_avatar;
        }
        if update.last_message.is_some() {
            self.last_message = update.last_message;
        }
        self.unread_count = update.unread_count;
    }
}
