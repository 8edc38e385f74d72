use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub frames_received: AtomicI64,
    pub frames_sent: AtomicI64,
    pub reconnects: AtomicI64,
    pub connect_errors: AtomicI64,
    pub messages_routed: AtomicI64,
    pub messages_dropped: AtomicI64,
    pub read_receipts_sent: AtomicI64,
    pub read_receipts_failed: AtomicI64,
    pub send_rejected: AtomicI64,
}
