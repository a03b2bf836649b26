// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fhe_text_analytics::config::consts::ENV_CONFIG_PATH;
use fhe_text_analytics::config::{load_config, validate_config, Config};
use fhe_text_analytics::observability::messages::server::{RelayerStartupStatus, ServerListening};
use fhe_text_analytics::server::{router, AppState};

/// Config file from the first argument, then the environment, else defaults.
fn resolve_config() -> anyhow::Result<Config> {
    let path = env::args().nth(1).or_else(|| env::var(ENV_CONFIG_PATH).ok());

    let mut config = match path {
        Some(path) => {
            load_config(&path).with_context(|| format!("loading configuration from {}", path))?
        }
        None => Config::default(),
    };
    config.apply_env_overrides(|name| env::var(name).ok())?;
    validate_config(&config)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = resolve_config()?;
    let state = AppState::from_config(&config);

    // Initialise eagerly so the first request does not pay for it.
    state.relayer.ensure().await;
    let status = state.relayer.status().await;
    tracing::info!("{}", RelayerStartupStatus { status: &status });

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;
    tracing::info!("{}", ServerListening { address: &address });

    axum::serve(listener, router(state, &config.cors)).await?;
    Ok(())
}
