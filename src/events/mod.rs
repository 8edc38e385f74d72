//! In-process event bridge.
//!
//! Decouples the transport from its consumers: the transport dispatches
//! every inbound payload on an `EventBus`, and any number of listeners react
//! to it. Listeners are called synchronously, in the order they subscribed.
//! Nothing is buffered, so an event dispatched while no listener is attached
//! is lost.
//!
//! # Example
//!
//! ```rust,ignore
//! use pt_messenger::events::structs::event_bus::EventBus;
//!
//! let bus: EventBus<serde_json::Value> = EventBus::new();
//! let id = bus.subscribe(|payload| println!("{}", payload));
//! bus.dispatch(&serde_json::json!({"type": "NEW_MESSAGE"}));
//! bus.unsubscribe(id);
//! ```

/// Event bus structure.
pub mod structs;

/// Event bus implementation.
pub mod impls;

/// Listener handle types.
pub mod types;

mod tests;
