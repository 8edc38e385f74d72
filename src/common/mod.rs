//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the messaging client.
//!
//! # Utilities
//!
//! - Logging setup (`fern` with colored levels)
//! - Log level parsing
//! - Timestamp utilities
//!
//! # Data Structures
//!
//! - `CustomError` - Boot/initialisation error type
//!
//! # Example
//!
//! ```rust,ignore
//! use pt_messenger::common::common::{setup_logging, current_time};
//!
//! setup_logging(&config)?;
//! let now = current_time();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
