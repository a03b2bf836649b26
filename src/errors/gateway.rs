// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for the external Relayer service.
//!
//! Every variant is recoverable: request handlers fall back to the local codec
//! whenever one of these surfaces, except in the self-check endpoint.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The relayer is switched off in configuration.
    #[error("Relayer disabled by configuration")]
    Disabled,

    /// The HTTP client for the relayer could not be constructed.
    #[error("Failed to build relayer client: {0}")]
    ClientBuild(String),

    /// The configured endpoint is not a usable URL.
    #[error("Invalid relayer endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The endpoint could not be reached.
    #[error("Relayer at '{endpoint}' unreachable: {reason}")]
    Unreachable { endpoint: String, reason: String },

    /// The call was aborted after the configured timeout.
    #[error("Relayer call timed out after {0:?}")]
    Timeout(Duration),

    /// The relayer answered with a non-success status code.
    #[error("Relayer returned HTTP {status}")]
    Status { status: u16 },

    /// The relayer answered with a body we could not interpret.
    #[error("Invalid relayer response: {0}")]
    InvalidResponse(String),

    /// Any other transport level failure.
    #[error("Relayer request failed: {0}")]
    Request(String),
}

impl GatewayError {
    /// Whether the relayer client itself could be constructed despite this error.
    ///
    /// Drives the `moduleLoaded` flag of the status probe.
    pub fn client_constructed(&self) -> bool {
        !matches!(
            self,
            GatewayError::Disabled
                | GatewayError::ClientBuild(_)
                | GatewayError::InvalidEndpoint { .. }
        )
    }
}
