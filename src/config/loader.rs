// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::*;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for the analytics service.
///
/// Every section is optional in YAML and falls back to built-in defaults.
/// Environment variables are applied on top by [`Config::apply_env_overrides`].
///
/// # Example
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 3001
/// cors:
///   origins: ["http://localhost:3000"]
/// relayer:
///   endpoint: https://relayer.sepolia.zama.ai
///   enabled: true
///   timeout_ms: 10000
///   probe: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub relayer: RelayerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Allowed browser origins.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

/// Relayer gateway settings.
///
/// # Fields
/// * `endpoint` - Base URL of the relayer service
/// * `enabled` - When false the relayer is never initialised
/// * `timeout_ms` - Per-call timeout; an expired call surfaces as a timeout error
/// * `probe` - Issue a reachability request while initialising
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelayerConfig {
    pub endpoint: String,
    pub enabled: bool,
    pub timeout_ms: u64,
    pub probe: bool,
}

impl Default for RelayerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAYER_ENDPOINT.to_string(),
            enabled: true,
            timeout_ms: DEFAULT_RELAYER_TIMEOUT_MS,
            probe: true,
        }
    }
}

impl Config {
    /// Apply environment overrides, reading variables through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(origins) = lookup(ENV_CORS_ORIGIN) {
            self.cors.origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(endpoint) = lookup(ENV_RELAYER_ENDPOINT) {
            self.relayer.endpoint = endpoint;
        }
        if let Some(enabled) = lookup(ENV_RELAYER_ENABLED) {
            self.relayer.enabled = match enabled.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: ENV_RELAYER_ENABLED,
                        value: enabled,
                    })
                }
            };
        }
        if let Some(timeout) = lookup(ENV_RELAYER_TIMEOUT_MS) {
            self.relayer.timeout_ms =
                timeout.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_RELAYER_TIMEOUT_MS,
                    value: timeout.clone(),
                })?;
        }
        Ok(())
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path_str = path.as_ref().display().to_string();
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path_str.clone(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })
}
