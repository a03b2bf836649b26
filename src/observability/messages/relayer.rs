// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for relayer lifecycle events.

use std::fmt::{Display, Formatter};

/// Relayer gateway became available.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RelayerInitialized<'a> {
    pub endpoint: &'a str,
}

impl Display for RelayerInitialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Relayer available at '{}'", self.endpoint)
    }
}

/// Relayer initialisation failed; the codec will be used.
///
/// # Log Level
/// `warn!` - Degraded behavior
///
/// # Example
/// ```
/// use fhe_text_analytics::errors::GatewayError;
/// use fhe_text_analytics::observability::messages::relayer::RelayerInitFailed;
///
/// let error = GatewayError::Disabled;
/// let msg = RelayerInitFailed {
///     endpoint: "https://relayer.sepolia.zama.ai",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("disabled"));
/// ```
pub struct RelayerInitFailed<'a> {
    pub endpoint: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RelayerInitFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Relayer at '{}' unavailable: {}",
            self.endpoint, self.error
        )
    }
}

/// Outcome of a key round-trip self-check.
///
/// # Log Level
/// `info!` on success, `warn!` on mismatch or failure
pub struct RelayerSelfCheckCompleted<'a> {
    pub endpoint: &'a str,
    pub ok: bool,
}

impl Display for RelayerSelfCheckCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Relayer self-check against '{}' finished: ok={}",
            self.endpoint, self.ok
        )
    }
}
