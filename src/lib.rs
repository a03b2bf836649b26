// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analytics;  // text analytics, feature reducer, numeric helpers
pub mod backends;   // codec + relayer strategies
pub mod config;     // YAML + env configuration
pub mod errors;     // error handling
pub mod observability;
pub mod server;     // axum router and handlers
pub mod traits;     // cipher and relayer abstractions
