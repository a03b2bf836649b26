// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

/// A primary strategy failed and the local codec took over.
///
/// # Log Level
/// `warn!` - Degraded behavior, request still succeeds
///
/// # Example
/// ```
/// use fhe_text_analytics::observability::messages::codec::FallbackToCodec;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "502");
/// let msg = FallbackToCodec {
///     strategy: "relayer",
///     operation: "decode",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct FallbackToCodec<'a> {
    pub strategy: &'a str,
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FallbackToCodec<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Strategy '{}' failed to {}, falling back to base64 codec: {}",
            self.strategy, self.operation, self.error
        )
    }
}

/// A token could not be decoded by any strategy and is treated as empty text.
///
/// # Log Level
/// `warn!` - Malformed client input
pub struct TokenTreatedAsEmpty<'a> {
    pub endpoint: &'a str,
    pub token_len: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for TokenTreatedAsEmpty<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Undecodable token on '{}' ({} bytes) treated as empty input: {}",
            self.endpoint, self.token_len, self.error
        )
    }
}
