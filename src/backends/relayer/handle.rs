// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::observability::messages::relayer::{RelayerInitFailed, RelayerInitialized};
use crate::traits::{RelayerConnector, RelayerGateway};

enum InitState {
    Pending,
    Ready(Arc<dyn RelayerGateway>),
    Failed { error: String, module_loaded: bool },
}

/// Snapshot returned by the status probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayerStatus {
    #[serde(rename = "relayerAvailable")]
    pub available: bool,
    #[serde(rename = "relayerEndpoint")]
    pub endpoint: String,
    #[serde(rename = "relayerInitError")]
    pub init_error: Option<String>,
    #[serde(rename = "moduleLoaded")]
    pub module_loaded: bool,
}

/// Process-wide relayer availability cache.
///
/// Initialisation runs lazily through the injected [`RelayerConnector`]. Once a
/// gateway is ready it is kept for the life of the process; a failed attempt
/// leaves the handle unavailable until the next [`ensure`](Self::ensure).
/// Concurrent initialisers may race: the last successful one wins.
pub struct RelayerHandle {
    endpoint: String,
    connector: Arc<dyn RelayerConnector>,
    state: RwLock<InitState>,
}

impl RelayerHandle {
    pub fn new(endpoint: impl Into<String>, connector: Arc<dyn RelayerConnector>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connector,
            state: RwLock::new(InitState::Pending),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Make sure a gateway is ready, connecting if it is not. Returns availability.
    pub async fn ensure(&self) -> bool {
        if self.gateway().await.is_some() {
            return true;
        }

        // Connect without holding the lock; network waits never block readers.
        match self.connector.connect(&self.endpoint).await {
            Ok(gateway) => {
                *self.state.write().await = InitState::Ready(gateway);
                tracing::info!("{}", RelayerInitialized { endpoint: &self.endpoint });
                true
            }
            Err(err) => {
                let mut state = self.state.write().await;
                if matches!(*state, InitState::Ready(_)) {
                    return true;
                }
                tracing::warn!(
                    "{}",
                    RelayerInitFailed {
                        endpoint: &self.endpoint,
                        error: &err,
                    }
                );
                *state = InitState::Failed {
                    error: err.to_string(),
                    module_loaded: err.client_constructed(),
                };
                false
            }
        }
    }

    /// The ready gateway, if initialisation has succeeded. Never connects.
    pub async fn gateway(&self) -> Option<Arc<dyn RelayerGateway>> {
        match &*self.state.read().await {
            InitState::Ready(gateway) => Some(Arc::clone(gateway)),
            _ => None,
        }
    }

    pub async fn is_available(&self) -> bool {
        self.gateway().await.is_some()
    }

    pub async fn status(&self) -> RelayerStatus {
        let (available, init_error, module_loaded) = match &*self.state.read().await {
            InitState::Pending => (false, None, false),
            InitState::Ready(_) => (true, None, true),
            InitState::Failed {
                error,
                module_loaded,
            } => (false, Some(error.clone()), *module_loaded),
        };

        RelayerStatus {
            available,
            endpoint: self.endpoint.clone(),
            init_error,
            module_loaded,
        }
    }
}
