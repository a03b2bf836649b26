// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Optional pass-through to an external Relayer encrypt/decrypt service.
//!
//! * `handle` - process-wide, lazily initialised availability cache
//! * `http` - reqwest-backed gateway and connector
//! * `cipher` - per-request [`Cipher`](crate::traits::Cipher) bound to caller keys

mod cipher;
mod handle;
mod http;

pub use cipher::{KeyPair, RelayerCipher};
pub use handle::{RelayerHandle, RelayerStatus};
pub use http::{HttpRelayerConnector, HttpRelayerGateway};
pub(crate) use http::parse_endpoint;
