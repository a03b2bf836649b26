// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod cipher;
pub mod relayer;

pub use cipher::Cipher;
pub use relayer::{RelayerConnector, RelayerGateway};
