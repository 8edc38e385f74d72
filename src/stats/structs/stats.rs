use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub frames_received: i64,
    pub frames_sent: i64,
    pub reconnects: i64,
    pub connect_errors: i64,
    pub messages_routed: i64,
    pub messages_dropped: i64,
    pub read_receipts_sent: i64,
    pub read_receipts_failed: i64,
    pub send_rejected: i64,
}
