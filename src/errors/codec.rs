// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised when a token cannot be turned back into plaintext.

use thiserror::Error;

/// Failure to decode a token produced by a [`Cipher`](crate::traits::Cipher).
///
/// Decoding is strict: a malformed token never yields best-effort text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The token is not valid standard base64.
    #[error("Token is not valid base64: {0}")]
    InvalidBase64(String),

    /// The decoded bytes are not valid UTF-8.
    #[error("Decoded token is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        CodecError::InvalidBase64(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CodecError::InvalidUtf8(err.to_string())
    }
}
