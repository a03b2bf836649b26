// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod cipher;
mod codec;
mod config;
mod gateway;
mod request;

pub use cipher::CipherError;
pub use codec::CodecError;
pub use config::ConfigError;
pub use gateway::GatewayError;
pub use request::RequestError;
