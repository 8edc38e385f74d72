//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the client
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: Console log verbosity
//! - **broker**: STOMP broker endpoint, destinations, reconnect delay and heart-beats
//! - **api**: REST base URL and request timeout
//! - **session**: Location of the persisted user-info blob
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use pt_messenger::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

mod tests;
