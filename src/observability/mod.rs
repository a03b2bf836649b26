// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the service. Message types follow a struct-based pattern with a
//! `Display` implementation so that log text lives in one place instead of being
//! scattered across handlers.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::codec` - strategy fallback and token decoding events
//! * `messages::relayer` - relayer initialisation and self-check events
//! * `messages::server` - startup and request rejection events
//!
//! # Usage
//!
//! ```rust
//! use fhe_text_analytics::observability::messages::relayer::RelayerInitialized;
//!
//! let msg = RelayerInitialized {
//!     endpoint: "https://relayer.sepolia.zama.ai",
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod messages;
