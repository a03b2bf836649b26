// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while loading or validating the service configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for our schema.
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// An environment override could not be interpreted.
    #[error("Invalid value for environment variable {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    /// A field failed validation.
    #[error("Invalid configuration for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
