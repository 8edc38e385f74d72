pub mod event_bus;
