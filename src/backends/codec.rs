// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Demo-grade token codec: standard base64 over the UTF-8 bytes of the text.
//!
//! This is a format transform, not encryption. Anyone holding a token can read
//! the plaintext. It is the default strategy and the fallback for every relayer
//! failure.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::{CipherError, CodecError};
use crate::traits::Cipher;

/// Encode plaintext into a token. Total over every string, including `""`.
pub fn encode(plain: &str) -> String {
    STANDARD.encode(plain.as_bytes())
}

/// Decode a token back into plaintext.
///
/// Fails on invalid base64 or on bytes that are not UTF-8.
pub fn decode(token: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(token.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// [`Cipher`] wrapper around [`encode`] / [`decode`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Codec;

impl Base64Codec {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Cipher for Base64Codec {
    async fn encode(&self, plain: &str) -> Result<String, CipherError> {
        Ok(encode(plain))
    }

    async fn decode(&self, token: &str) -> Result<String, CipherError> {
        Ok(decode(token)?)
    }

    fn name(&self) -> &'static str {
        "base64_codec"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_text() {
        let samples = [
            "",
            "hello hello world",
            "a,b,c\n1,2,3\n4,5,6",
            "çok güzel şey ığü",
            "日本語テキスト",
            "emoji 🦀 and \u{0000} nul",
        ];
        for sample in samples {
            assert_eq!(decode(&encode(sample)).unwrap(), sample, "roundtrip of {:?}", sample);
        }
    }

    #[test]
    fn test_encode_is_standard_base64() {
        assert_eq!(encode("7"), "Nw==");
        assert_eq!(encode(""), "");
        assert_eq!(encode("hello"), "aGVsbG8=");
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = decode("not base64!!").unwrap_err();
        assert!(matches!(err, CodecError::InvalidBase64(_)));
    }

    #[test]
    fn test_decode_rejects_non_utf8_bytes() {
        // 0xFF 0xFE is never valid UTF-8
        let token = STANDARD.encode([0xFFu8, 0xFE]);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8(_)));
    }

    #[tokio::test]
    async fn test_cipher_impl_matches_free_functions() {
        let codec = Base64Codec::new();
        let token = Cipher::encode(&codec, "3").await.unwrap();
        assert_eq!(token, encode("3"));
        assert_eq!(Cipher::decode(&codec, &token).await.unwrap(), "3");
        assert_eq!(codec.name(), "base64_codec");
    }
}
