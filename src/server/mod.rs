// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP boundary: router, shared state, CORS.

pub mod capabilities;
pub mod error;
pub mod handlers;


use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::analytics::TextAnalyzer;
use crate::backends::relayer::{HttpRelayerConnector, RelayerHandle};
use crate::config::{Config, CorsConfig};

pub use capabilities::{RequestCapabilities, HEADER_PRIVATE_KEY, HEADER_PUBLIC_KEY, HEADER_RELAYER};
pub use error::ApiError;

/// State shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub relayer: Arc<RelayerHandle>,
    pub analyzer: TextAnalyzer,
}

impl AppState {
    pub fn new(relayer: Arc<RelayerHandle>) -> Self {
        Self {
            relayer,
            analyzer: TextAnalyzer::new(),
        }
    }

    /// State backed by the HTTP relayer connector described in `config`.
    pub fn from_config(config: &Config) -> Self {
        let connector = HttpRelayerConnector::from_config(&config.relayer);
        Self::new(Arc::new(RelayerHandle::new(
            config.relayer.endpoint.clone(),
            Arc::new(connector),
        )))
    }
}

/// CORS for the configured origins; `*` allows any origin.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(HEADER_RELAYER),
            HeaderName::from_static(HEADER_PUBLIC_KEY),
            HeaderName::from_static(HEADER_PRIVATE_KEY),
        ])
}

pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/relayer-status", get(handlers::relayer_status))
        .route("/relayer-selfcheck", post(handlers::relayer_selfcheck))
        .route("/api/upload", post(handlers::upload))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/analyze-features", post(handlers::analyze_features))
        .route("/api/sum-array", post(handlers::sum_array))
        .route("/api/add", post(handlers::add))
        .layer(cors_layer(cors))
        .with_state(state)
}
