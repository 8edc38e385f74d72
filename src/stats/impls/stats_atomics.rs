use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> Self {
        let stats = Self::default();
        stats.started.store(current_time() as i64, Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            frames_received: self.frames_received.load(Ordering::SeqCst),
            frames_sent: self.frames_sent.load(Ordering::SeqCst),
            reconnects: self.reconnects.load(Ordering::SeqCst),
            connect_errors: self.connect_errors.load(Ordering::SeqCst),
            messages_routed: self.messages_routed.load(Ordering::SeqCst),
            messages_dropped: self.messages_dropped.load(Ordering::SeqCst),
            read_receipts_sent: self.read_receipts_sent.load(Ordering::SeqCst),
            read_receipts_failed: self.read_receipts_failed.load(Ordering::SeqCst),
            send_rejected: self.send_rejected.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::FramesReceived => &self.frames_received,
            StatsEvent::FramesSent => &self.frames_sent,
            StatsEvent::Reconnects => &self.reconnects,
            StatsEvent::ConnectErrors => &self.connect_errors,
            StatsEvent::MessagesRouted => &self.messages_routed,
            StatsEvent::MessagesDropped => &self.messages_dropped,
            StatsEvent::ReadReceiptsSent => &self.read_receipts_sent,
            StatsEvent::ReadReceiptsFailed => &self.read_receipts_failed,
            StatsEvent::SendRejected => &self.send_rejected,
        }
    }
}
