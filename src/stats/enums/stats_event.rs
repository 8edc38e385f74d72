//! Statistics event types for tracking messaging activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `StatsAtomics::update_stats()` to update counters.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    FramesReceived,
    FramesSent,
    Reconnects,
    ConnectErrors,
    MessagesRouted,
    MessagesDropped,
    ReadReceiptsSent,
    ReadReceiptsFailed,
    SendRejected,
}
