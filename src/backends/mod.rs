// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Encode/decode strategy backends.
//!
//! # Available Backends
//!
//! ## Codec
//! Local, reversible base64 transform over UTF-8 text:
//! - **Default**: used whenever the caller does not opt into the relayer
//! - **Fallback**: used whenever the relayer fails for any reason
//! - **Security**: none. Tokens are trivially readable.
//!
//! ## Relayer
//! Delegation to an external encrypt/decrypt service over HTTP:
//! - **Selection**: only when available, requested, and both keys are present
//! - **State**: one process-wide [`relayer::RelayerHandle`] caches availability
//!
//! ## Stub Backend (Test-Only)
//! In-process gateways and connectors for handler tests:
//! - **StubGateway**: reversible, distinguishable tokens
//! - **FailingGateway**: every call errors, exercising the fallback
//! - **StubConnector / FailingConnector / FlakyConnector**: init outcomes
//! - **Note**: NOT available in production builds
//!
//! # Architecture
//!
//! ```text
//! Request capabilities → select_cipher → FallbackCipher(Relayer?, Codec) → Handler
//! ```

pub mod codec;
pub mod fallback;
pub mod relayer;
#[cfg(test)]
pub mod stub;

pub use codec::Base64Codec;
pub use fallback::FallbackCipher;
