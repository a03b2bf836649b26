// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks run in order and stop at the first failure:
//!
//! 1. **Server**: the port must be non-zero
//! 2. **CORS**: at least one non-empty origin
//! 3. **Relayer**: non-zero timeout and a parsable endpoint URL

use crate::backends::relayer::parse_endpoint;
use crate::config::Config;
use crate::errors::ConfigError;

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::Invalid {
            field: "server.port",
            reason: "port must be non-zero".to_string(),
        });
    }

    if config.cors.origins.iter().all(|o| o.trim().is_empty()) {
        return Err(ConfigError::Invalid {
            field: "cors.origins",
            reason: "at least one origin is required".to_string(),
        });
    }

    if config.relayer.timeout_ms == 0 {
        return Err(ConfigError::Invalid {
            field: "relayer.timeout_ms",
            reason: "timeout must be greater than zero".to_string(),
        });
    }

    parse_endpoint(&config.relayer.endpoint).map_err(|e| ConfigError::Invalid {
        field: "relayer.endpoint",
        reason: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut cfg = Config::default();
        cfg.server.port = 0;
        let err = validate_config(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "server.port", .. }));
    }

    #[test]
    fn test_empty_origins_rejected() {
        let mut cfg = Config::default();
        cfg.cors.origins = vec![];
        assert!(matches!(
            validate_config(&cfg),
            Err(ConfigError::Invalid { field: "cors.origins", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut cfg = Config::default();
        cfg.relayer.timeout_ms = 0;
        assert!(matches!(
            validate_config(&cfg),
            Err(ConfigError::Invalid { field: "relayer.timeout_ms", .. })
        ));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let mut cfg = Config::default();
        cfg.relayer.endpoint = "::nope::".to_string();
        assert!(matches!(
            validate_config(&cfg),
            Err(ConfigError::Invalid { field: "relayer.endpoint", .. })
        ));
    }
}
