// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::codec;
use crate::errors::GatewayError;
use crate::traits::{RelayerConnector, RelayerGateway};

const STUB_PREFIX: &str = "stub:";

/// An in-process relayer whose tokens are distinguishable from codec tokens
pub struct StubGateway {
    calls: AtomicUsize,
}

impl StubGateway {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn token_for(data: &str) -> String {
        format!("{}{}", STUB_PREFIX, codec::encode(data))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RelayerGateway for StubGateway {
    async fn encrypt(&self, data: &str, _public_key: &str) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::token_for(data))
    }

    async fn decrypt(&self, encrypted: &str, _private_key: &str) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let inner = encrypted
            .strip_prefix(STUB_PREFIX)
            .ok_or_else(|| GatewayError::InvalidResponse("not a stub token".to_string()))?;
        codec::decode(inner).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

/// A relayer that always fails for testing fallback scenarios
pub struct FailingGateway;

impl FailingGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RelayerGateway for FailingGateway {
    async fn encrypt(&self, _data: &str, _public_key: &str) -> Result<String, GatewayError> {
        Err(GatewayError::Status { status: 502 })
    }

    async fn decrypt(&self, _encrypted: &str, _private_key: &str) -> Result<String, GatewayError> {
        Err(GatewayError::Status { status: 502 })
    }
}

/// A relayer whose decrypt never returns what was encrypted
pub struct LossyGateway;

#[async_trait]
impl RelayerGateway for LossyGateway {
    async fn encrypt(&self, data: &str, _public_key: &str) -> Result<String, GatewayError> {
        Ok(data.to_string())
    }

    async fn decrypt(&self, _encrypted: &str, _private_key: &str) -> Result<String, GatewayError> {
        Ok(String::new())
    }
}

/// Hands out a fixed gateway and counts connection attempts
pub struct StubConnector {
    gateway: Arc<dyn RelayerGateway>,
    connects: AtomicUsize,
}

impl StubConnector {
    pub fn new() -> Self {
        Self::with_gateway(Arc::new(StubGateway::new()))
    }

    pub fn with_gateway(gateway: Arc<dyn RelayerGateway>) -> Self {
        Self {
            gateway,
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RelayerConnector for StubConnector {
    async fn connect(&self, _endpoint: &str) -> Result<Arc<dyn RelayerGateway>, GatewayError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&self.gateway))
    }
}

/// Never connects
pub struct FailingConnector {
    error: GatewayError,
}

impl FailingConnector {
    pub fn new(error: GatewayError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl RelayerConnector for FailingConnector {
    async fn connect(&self, _endpoint: &str) -> Result<Arc<dyn RelayerGateway>, GatewayError> {
        Err(self.error.clone())
    }
}

/// Fails a fixed number of times, then connects
pub struct FlakyConnector {
    remaining_failures: AtomicUsize,
}

impl FlakyConnector {
    pub fn failing_first(failures: usize) -> Self {
        Self {
            remaining_failures: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl RelayerConnector for FlakyConnector {
    async fn connect(&self, endpoint: &str) -> Result<Arc<dyn RelayerGateway>, GatewayError> {
        let left = self.remaining_failures.load(Ordering::SeqCst);
        if left > 0 {
            self.remaining_failures.store(left - 1, Ordering::SeqCst);
            return Err(GatewayError::Unreachable {
                endpoint: endpoint.to_string(),
                reason: "simulated outage".to_string(),
            });
        }
        Ok(Arc::new(StubGateway::new()))
    }
}
