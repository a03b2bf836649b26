// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::errors::RequestError;
use crate::observability::messages::server::RequestRejected;

/// Everything a data endpoint can fail with.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The body was missing, not JSON, or not the expected shape.
    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Request(err) => {
                tracing::debug!(
                    "{}",
                    RequestRejected {
                        status: err.status().as_u16(),
                        reason: &err,
                    }
                );
                err.into_response()
            }
            ApiError::Body(rejection) => {
                let status = rejection.status();
                let reason = rejection.body_text();
                tracing::debug!(
                    "{}",
                    RequestRejected {
                        status: status.as_u16(),
                        reason: &rejection,
                    }
                );
                (status, Json(json!({ "error": reason }))).into_response()
            }
            ApiError::Serialize(err) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
