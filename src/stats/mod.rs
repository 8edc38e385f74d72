//! Messaging statistics.
//!
//! Atomic counters for transport and store activity. Counters are shared
//! between the transport task and the service through an `Arc`, so updates
//! never take a lock.
//!
//! # Example
//!
//! ```rust,ignore
//! use pt_messenger::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::FramesReceived, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event types.
pub mod enums;

/// Statistics data structures (snapshot and atomics).
pub mod structs;

/// Implementation blocks for statistics.
pub mod impls;
