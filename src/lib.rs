//! # PT Messenger
//!
//! Messaging client for a private BitTorrent tracker site.
//!
//! ## Overview
//!
//! The site delivers private messages live over STOMP on a WebSocket and keeps
//! history behind a small REST API. This crate holds the client side of that:
//! a reconnecting STOMP transport, a typed event bus between the transport
//! and its consumers, and an in-memory conversation store with unread
//! bookkeeping and tracked read receipts.
//!
//! ## Features
//!
//! - **STOMP 1.2 codec**: frame encoding/decoding with header escaping and `content-length` bodies
//! - **Transport**: idempotent connect, fixed-interval reconnect, explicit `NotConnected` on send
//! - **Event bus**: in-order fan-out to listeners or async channels
//! - **Store**: routing by counterpart, unread counters, history merge without duplicates
//! - **Read receipts**: pending/failed sets instead of fire-and-forget calls
//! - **Monitoring**: counters for frames, reconnects, routing and receipts, plus Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pt_messenger::config::structs::configuration::Configuration;
//! use pt_messenger::rest::structs::http_message_api::HttpMessageApi;
//! use pt_messenger::service::structs::message_service::MessageService;
//! use pt_messenger::session::structs::file_session::FileSession;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let session = Arc::new(FileSession::new(&config.session.path));
//! let api = Arc::new(HttpMessageApi::new(&config.api, session.clone())?);
//! let service = MessageService::new(config.broker.clone(), session, api);
//! service.connect()?;
//! service.load_conversations().await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, error type and helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`console`] - Stdin commands for the binary
//! - [`events`] - Typed in-process event bus
//! - [`messaging`] - Conversations, messages and the store
//! - [`rest`] - REST client for history, sends and receipts
//! - [`service`] - Glue between transport, bus, store and REST
//! - [`session`] - Logged-in user lookup
//! - [`stats`] - Runtime counters
//! - [`stomp`] - STOMP 1.2 frame codec
//! - [`structs`] - CLI argument parsing
//! - [`transport`] - STOMP-over-WebSocket client

/// Common utilities and shared functionality.
///
/// Contains logging setup, log level parsing, timestamp helpers, the boot
/// error type and the string-or-number id deserializer.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and writing the TOML configuration.
pub mod config;

/// Interactive console commands.
pub mod console;

/// Typed in-process event bus.
///
/// Replaces a global event target: listeners are called in subscription
/// order and nothing is buffered for late subscribers.
pub mod events;

/// Conversation and message store.
pub mod messaging;

/// REST client for the message endpoints.
pub mod rest;

/// Messaging service tying transport, store and REST together.
pub mod service;

/// Local session data.
pub mod session;

/// Statistics tracking.
///
/// Atomic counters for transport frames, reconnects, routed and dropped
/// messages, and read receipts.
pub mod stats;

/// STOMP 1.2 frame codec.
pub mod stomp;

/// CLI argument parsing.
pub mod structs;

/// STOMP-over-WebSocket transport client.
///
/// Holds one broker session at a time and reconnects at a fixed interval
/// until told to disconnect.
pub mod transport;
