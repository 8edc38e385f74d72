//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// REST endpoint configuration.
pub mod api_config;

/// STOMP broker configuration (endpoint, destinations, reconnect delay).
pub mod broker_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Persisted session location.
pub mod session_config;
