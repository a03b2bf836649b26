// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::GatewayError;

/// Remote encrypt/decrypt service. Treated as an opaque black box.
#[async_trait]
pub trait RelayerGateway: Send + Sync {
    async fn encrypt(&self, data: &str, public_key: &str) -> Result<String, GatewayError>;

    async fn decrypt(&self, encrypted: &str, private_key: &str) -> Result<String, GatewayError>;
}

/// Produces a ready [`RelayerGateway`] for an endpoint.
///
/// Injected into the relayer handle so tests can simulate available,
/// unavailable and erroring relayers without touching the network.
#[async_trait]
pub trait RelayerConnector: Send + Sync {
    async fn connect(&self, endpoint: &str) -> Result<Arc<dyn RelayerGateway>, GatewayError>;
}
