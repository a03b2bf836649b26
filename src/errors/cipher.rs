// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{CodecError, GatewayError};

/// Failure of either encode/decode strategy behind the [`Cipher`](crate::traits::Cipher) trait.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
