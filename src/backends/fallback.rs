// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Explicit "try the relayer, else the codec" combinator.

use async_trait::async_trait;

use super::codec::Base64Codec;
use crate::errors::CipherError;
use crate::observability::messages::codec::FallbackToCodec;
use crate::traits::Cipher;

/// Wraps an optional primary strategy with the local codec as fallback.
///
/// Any primary failure is logged and retried once on the codec. Errors from the
/// codec itself are returned to the caller.
pub struct FallbackCipher {
    primary: Option<Box<dyn Cipher>>,
    fallback: Base64Codec,
}

impl FallbackCipher {
    pub fn new(primary: Option<Box<dyn Cipher>>) -> Self {
        Self {
            primary,
            fallback: Base64Codec::new(),
        }
    }

    pub fn codec_only() -> Self {
        Self::new(None)
    }

    pub fn uses_primary(&self) -> bool {
        self.primary.is_some()
    }
}

#[async_trait]
impl Cipher for FallbackCipher {
    async fn encode(&self, plain: &str) -> Result<String, CipherError> {
        if let Some(primary) = &self.primary {
            match primary.encode(plain).await {
                Ok(token) => return Ok(token),
                Err(err) => tracing::warn!(
                    "{}",
                    FallbackToCodec {
                        strategy: primary.name(),
                        operation: "encode",
                        error: &err,
                    }
                ),
            }
        }
        self.fallback.encode(plain).await
    }

    async fn decode(&self, token: &str) -> Result<String, CipherError> {
        if let Some(primary) = &self.primary {
            match primary.decode(token).await {
                Ok(plain) => return Ok(plain),
                Err(err) => tracing::warn!(
                    "{}",
                    FallbackToCodec {
                        strategy: primary.name(),
                        operation: "decode",
                        error: &err,
                    }
                ),
            }
        }
        self.fallback.decode(token).await
    }

    fn name(&self) -> &'static str {
        match &self.primary {
            Some(primary) => primary.name(),
            None => self.fallback.name(),
        }
    }
}
