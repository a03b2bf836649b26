// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::CipherError;

/// A reversible plaintext <-> token transform.
///
/// Handlers only ever talk to this trait, so the local codec and the remote
/// relayer are interchangeable per request. Implementations must satisfy
/// `decode(encode(s)) == s` for their own tokens.
#[async_trait]
pub trait Cipher: Send + Sync {
    async fn encode(&self, plain: &str) -> Result<String, CipherError>;

    async fn decode(&self, token: &str) -> Result<String, CipherError>;

    fn name(&self) -> &'static str;
}
