// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

use crate::backends::relayer::RelayerStatus;

/// HTTP listener bound.
///
/// # Log Level
/// `info!`
pub struct ServerListening<'a> {
    pub address: &'a str,
}

impl Display for ServerListening<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Backend running on {}", self.address)
    }
}

/// Relayer status summary printed at startup.
///
/// # Log Level
/// `info!`
///
/// # Example
/// ```
/// use fhe_text_analytics::backends::relayer::RelayerStatus;
/// use fhe_text_analytics::observability::messages::server::RelayerStartupStatus;
///
/// let status = RelayerStatus {
///     available: false,
///     endpoint: "https://relayer.sepolia.zama.ai".to_string(),
///     init_error: Some("Relayer disabled by configuration".to_string()),
///     module_loaded: false,
/// };
///
/// let line = RelayerStartupStatus { status: &status }.to_string();
/// assert!(line.contains("available=false"));
/// assert!(line.contains("error=Relayer disabled"));
/// ```
pub struct RelayerStartupStatus<'a> {
    pub status: &'a RelayerStatus,
}

impl Display for RelayerStartupStatus<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "[Relayer] available={} endpoint={}",
            self.status.available, self.status.endpoint
        )?;
        if let Some(error) = &self.status.init_error {
            write!(f, " error={}", error)?;
        }
        Ok(())
    }
}

/// A request was rejected with a client error.
///
/// # Log Level
/// `debug!` - Expected for malformed client input
pub struct RequestRejected<'a> {
    pub status: u16,
    pub reason: &'a dyn std::error::Error,
}

impl Display for RequestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected request with HTTP {}: {}", self.status, self.reason)
    }
}
