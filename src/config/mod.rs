// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

pub mod consts;

pub use loader::{load_config, Config, CorsConfig, RelayerConfig, ServerConfig};
pub use validation::validate_config;
