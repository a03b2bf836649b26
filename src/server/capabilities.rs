// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-request strategy selection.

use axum::http::HeaderMap;

use crate::backends::relayer::{KeyPair, RelayerCipher, RelayerHandle};
use crate::backends::FallbackCipher;

/// Opt-in flag; the relayer is only considered when this header is exactly `1`.
pub const HEADER_RELAYER: &str = "x-relayer";
pub const HEADER_PUBLIC_KEY: &str = "x-public-key";
pub const HEADER_PRIVATE_KEY: &str = "x-private-key";

/// What the caller asked for, as read from request headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCapabilities {
    pub relayer_requested: bool,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

impl RequestCapabilities {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            relayer_requested: header_string(headers, HEADER_RELAYER).as_deref() == Some("1"),
            public_key: header_string(headers, HEADER_PUBLIC_KEY),
            private_key: header_string(headers, HEADER_PRIVATE_KEY),
        }
    }

    /// Both keys, if both are present and non-empty.
    pub fn key_pair(&self) -> Option<KeyPair> {
        let keys = KeyPair::new(self.public_key.clone()?, self.private_key.clone()?);
        keys.is_complete().then_some(keys)
    }
}

/// Selection rule: relayer only when available, requested, and fully keyed.
pub fn wants_relayer(available: bool, caps: &RequestCapabilities) -> bool {
    available && caps.relayer_requested && caps.key_pair().is_some()
}

/// Build the strategy for one request: relayer-with-codec-fallback, or codec alone.
///
/// Never triggers relayer initialisation.
pub async fn select_cipher(relayer: &RelayerHandle, caps: &RequestCapabilities) -> FallbackCipher {
    let gateway = relayer.gateway().await;
    if !wants_relayer(gateway.is_some(), caps) {
        return FallbackCipher::codec_only();
    }

    match (gateway, caps.key_pair()) {
        (Some(gateway), Some(keys)) => {
            FallbackCipher::new(Some(Box::new(RelayerCipher::new(gateway, keys))))
        }
        _ => FallbackCipher::codec_only(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::StubConnector;
    use axum::http::HeaderValue;
    use std::sync::Arc;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    fn full() -> RequestCapabilities {
        RequestCapabilities::from_headers(&headers(&[
            (HEADER_RELAYER, "1"),
            (HEADER_PUBLIC_KEY, "pk"),
            (HEADER_PRIVATE_KEY, "sk"),
        ]))
    }

    #[test]
    fn test_from_headers() {
        let caps = full();
        assert!(caps.relayer_requested);
        assert_eq!(caps.key_pair(), Some(KeyPair::new("pk", "sk")));

        let caps = RequestCapabilities::from_headers(&headers(&[(HEADER_RELAYER, "true")]));
        assert!(!caps.relayer_requested);
        assert_eq!(caps.key_pair(), None);
    }

    #[test]
    fn test_selection_rule() {
        assert!(wants_relayer(true, &full()));
        assert!(!wants_relayer(false, &full()));

        let mut caps = full();
        caps.relayer_requested = false;
        assert!(!wants_relayer(true, &caps));

        let mut caps = full();
        caps.private_key = Some(String::new());
        assert!(!wants_relayer(true, &caps));

        let mut caps = full();
        caps.public_key = None;
        assert!(!wants_relayer(true, &caps));
    }

    #[tokio::test]
    async fn test_select_cipher_requires_initialised_relayer() {
        let handle = RelayerHandle::new("https://relayer.test", Arc::new(StubConnector::new()));
        assert!(!select_cipher(&handle, &full()).await.uses_primary());

        handle.ensure().await;
        assert!(select_cipher(&handle, &full()).await.uses_primary());
        assert!(!select_cipher(&handle, &RequestCapabilities::default())
            .await
            .uses_primary());
    }
}
