use crate::transport::structs::transport_state::TransportState;

impl TransportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.active && self.generation == generation
    }

    /// Drops the outbound handle and the connected flag, but only for the
    /// session that owns them.
    pub fn mark_disconnected(&mut self, generation: u64) {
        if self.generation == generation {
            self.connected = false;
            self.sender = None;
        }
    }
}
