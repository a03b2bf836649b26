// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CipherError;
use crate::traits::{Cipher, RelayerGateway};

/// Caller-supplied relayer keys. Both must be non-empty to be usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

impl KeyPair {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.public_key.is_empty() && !self.private_key.is_empty()
    }
}

/// Relayer gateway bound to one request's keys.
pub struct RelayerCipher {
    gateway: Arc<dyn RelayerGateway>,
    keys: KeyPair,
}

impl RelayerCipher {
    pub fn new(gateway: Arc<dyn RelayerGateway>, keys: KeyPair) -> Self {
        Self { gateway, keys }
    }
}

#[async_trait]
impl Cipher for RelayerCipher {
    async fn encode(&self, plain: &str) -> Result<String, CipherError> {
        Ok(self.gateway.encrypt(plain, &self.keys.public_key).await?)
    }

    async fn decode(&self, token: &str) -> Result<String, CipherError> {
        Ok(self.gateway.decrypt(token, &self.keys.private_key).await?)
    }

    fn name(&self) -> &'static str {
        "relayer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{FailingGateway, StubGateway};

    #[test]
    fn test_key_pair_completeness() {
        assert!(KeyPair::new("pk", "sk").is_complete());
        assert!(!KeyPair::new("", "sk").is_complete());
        assert!(!KeyPair::new("pk", "").is_complete());
    }

    #[tokio::test]
    async fn test_roundtrip_through_gateway() {
        let cipher = RelayerCipher::new(Arc::new(StubGateway::new()), KeyPair::new("pk", "sk"));
        let token = cipher.encode("42").await.unwrap();
        assert_ne!(token, "42");
        assert_eq!(cipher.decode(&token).await.unwrap(), "42");
    }

    #[tokio::test]
    async fn test_gateway_errors_surface_as_cipher_errors() {
        let cipher = RelayerCipher::new(Arc::new(FailingGateway::new()), KeyPair::new("pk", "sk"));
        assert!(matches!(
            cipher.encode("42").await,
            Err(CipherError::Gateway(_))
        ));
    }
}
