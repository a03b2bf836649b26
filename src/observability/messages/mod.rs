// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `codec` - strategy fallback and token decoding events
//! * `relayer` - relayer lifecycle events
//! * `server` - HTTP boundary events

pub mod codec;
pub mod relayer;
pub mod server;
