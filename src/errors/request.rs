// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Client-facing request errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Errors surfaced directly to the caller as a JSON `{ "error": ... }` body.
///
/// These are never retried and never fall back to another code path.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The encrypted features blob could not be decoded or parsed.
    InvalidEncryptedFeatures,
    /// Neither `features` nor a decodable `encryptedFeatures` object was supplied.
    MissingFeatures,
    /// An `encItems` entry was not a string.
    InvalidEncItemsEntry,
    /// An `encItems` entry did not decode to a finite number.
    InvalidEncItemsPayload,
    /// A plaintext `numbers` entry was not a finite number.
    InvalidNumbersEntry {
        /// Position of the offending entry
        index: usize,
    },
    /// Neither `numbers` nor `encItems` was supplied as an array.
    MissingNumbers,
    /// An add operand could not be decoded.
    InvalidInput,
    /// An add operand did not parse to a finite number.
    NotANumber,
    /// Finite operands overflowed to a non-finite result.
    NonFiniteResult,
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidEncryptedFeatures => {
                write!(f, "Invalid encryptedFeatures payload")
            }
            RequestError::MissingFeatures => write!(f, "Missing features object"),
            RequestError::InvalidEncItemsEntry => write!(f, "Invalid encItems entry"),
            RequestError::InvalidEncItemsPayload => write!(f, "Invalid encItems payload"),
            RequestError::InvalidNumbersEntry { index } => {
                write!(f, "Invalid numbers entry at index {}", index)
            }
            RequestError::MissingNumbers => write!(f, "Missing numbers array"),
            RequestError::InvalidInput => write!(f, "Invalid input"),
            RequestError::NotANumber => write!(f, "Inputs must be numbers"),
            RequestError::NonFiniteResult => write!(f, "Result is not a finite number"),
        }
    }
}

impl std::error::Error for RequestError {}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
