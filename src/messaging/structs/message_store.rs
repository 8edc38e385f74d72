use std::collections::BTreeSet;
use std::sync::Arc;
use crate::messaging::structs::message_store_state::MessageStoreState;
use crate::session::traits::session_provider::SessionProvider;

pub struct MessageStore {
    pub(crate) session: Arc<dyn SessionProvider>,
    pub(crate) state: MessageStoreState,
    pub(crate) pending_read_receipts: BTreeSet<String>,
    pub(crate) failed_read_receipts: BTreeSet<String>,
}
