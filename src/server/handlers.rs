// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Endpoint handlers.
//!
//! Every data endpoint follows the same shape: pick a strategy from the
//! request headers, decode the input, compute, serialize, encode the result
//! with the same strategy. Relayer failures never reach the caller here; the
//! [`FallbackCipher`] absorbs them.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::capabilities::{select_cipher, wants_relayer, RequestCapabilities};
use super::error::ApiError;
use super::AppState;
use crate::analytics::numeric::{format_number, number_from_value, parse_number};
use crate::analytics::{reduce, FeatureRecord};
use crate::backends::relayer::RelayerStatus;
use crate::backends::{codec, FallbackCipher};
use crate::errors::RequestError;
use crate::observability::messages::codec::TokenTreatedAsEmpty;
use crate::observability::messages::relayer::RelayerSelfCheckCompleted;
use crate::traits::Cipher;

pub const UPLOAD_ACK: &str = "Encrypted data received.";
/// Plaintext round-tripped by the self-check.
pub const SELF_CHECK_MESSAGE: &str = "42";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfCheckResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DataRequest {
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeaturesRequest {
    #[serde(default)]
    pub features: Value,
    #[serde(default, rename = "encryptedFeatures")]
    pub encrypted_features: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct SumArrayRequest {
    #[serde(default)]
    pub numbers: Value,
    #[serde(default, rename = "encItems")]
    pub enc_items: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddRequest {
    #[serde(default, rename = "encA")]
    pub enc_a: Value,
    #[serde(default, rename = "encB")]
    pub enc_b: Value,
    #[serde(default)]
    pub a: Value,
    #[serde(default)]
    pub b: Value,
}

/// Encode the serialized result with the request's strategy.
async fn encode_result(cipher: &FallbackCipher, payload: &str) -> Json<ResultResponse> {
    let result = match cipher.encode(payload).await {
        Ok(token) => token,
        Err(_) => codec::encode(payload),
    };
    Json(ResultResponse { result })
}

pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub async fn relayer_status(State(state): State<AppState>) -> Json<RelayerStatus> {
    state.relayer.ensure().await;
    Json(state.relayer.status().await)
}

fn self_check_failure(status: StatusCode, error: &str) -> (StatusCode, Json<SelfCheckResponse>) {
    (
        status,
        Json(SelfCheckResponse {
            ok: false,
            error: Some(error.to_string()),
        }),
    )
}

/// Round-trip a fixed value through the relayer with the caller's keys.
///
/// The only endpoint that reports relayer errors instead of falling back.
pub async fn relayer_selfcheck(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<SelfCheckResponse>) {
    if !state.relayer.ensure().await {
        return self_check_failure(StatusCode::SERVICE_UNAVAILABLE, "Relayer unavailable");
    }

    let caps = RequestCapabilities::from_headers(&headers);
    let keys = match caps.key_pair() {
        Some(keys) => keys,
        None => return self_check_failure(StatusCode::BAD_REQUEST, "Missing keys"),
    };

    let gateway = match state.relayer.gateway().await {
        Some(gateway) => gateway,
        None => return self_check_failure(StatusCode::SERVICE_UNAVAILABLE, "Relayer unavailable"),
    };

    let roundtrip = async {
        let token = gateway.encrypt(SELF_CHECK_MESSAGE, &keys.public_key).await?;
        gateway.decrypt(&token, &keys.private_key).await
    };

    match roundtrip.await {
        Ok(decrypted) => {
            let ok = decrypted == SELF_CHECK_MESSAGE;
            let msg = RelayerSelfCheckCompleted {
                endpoint: state.relayer.endpoint(),
                ok,
            };
            if ok {
                tracing::info!("{}", msg);
            } else {
                tracing::warn!("{}", msg);
            }
            (StatusCode::OK, Json(SelfCheckResponse { ok, error: None }))
        }
        Err(err) => {
            tracing::warn!("Relayer self-check failed: {}", err);
            self_check_failure(StatusCode::INTERNAL_SERVER_ERROR, "Relayer roundtrip failed")
        }
    }
}

/// Acknowledge an uploaded token. With relayer capabilities, attempts a remote
/// decrypt as a connectivity check and ignores the outcome.
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<DataRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = body?;
    let caps = RequestCapabilities::from_headers(&headers);
    let gateway = state.relayer.gateway().await;

    if let (Some(gateway), Some(keys), Some(token)) = (gateway, caps.key_pair(), body.data.as_str()) {
        if wants_relayer(true, &caps) {
            if let Err(err) = gateway.decrypt(token, &keys.private_key).await {
                tracing::debug!("Ignoring relayer decrypt failure on upload: {}", err);
            }
        }
    }

    Ok(Json(MessageResponse {
        message: UPLOAD_ACK.to_string(),
    }))
}

pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<DataRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Json(body) = body?;
    let caps = RequestCapabilities::from_headers(&headers);
    let cipher = select_cipher(&state.relayer, &caps).await;

    let plain = match body.data.as_str() {
        Some(token) => match cipher.decode(token).await {
            Ok(plain) => plain,
            Err(err) => {
                tracing::warn!(
                    "{}",
                    TokenTreatedAsEmpty {
                        endpoint: "/api/analyze",
                        token_len: token.len(),
                        error: &err,
                    }
                );
                String::new()
            }
        },
        None => String::new(),
    };

    let result = state.analyzer.analyze(&plain);
    let payload = serde_json::to_string(&result)?;
    Ok(encode_result(&cipher, &payload).await)
}

pub async fn analyze_features(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<FeaturesRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Json(body) = body?;
    let caps = RequestCapabilities::from_headers(&headers);
    let cipher = select_cipher(&state.relayer, &caps).await;

    let features = if !body.features.is_null() {
        body.features
    } else if !body.encrypted_features.is_null() {
        let token = body
            .encrypted_features
            .as_str()
            .ok_or(RequestError::InvalidEncryptedFeatures)?;
        let decrypted = cipher
            .decode(token)
            .await
            .map_err(|_| RequestError::InvalidEncryptedFeatures)?;
        serde_json::from_str(&decrypted).map_err(|_| RequestError::InvalidEncryptedFeatures)?
    } else {
        Value::Null
    };

    let record = FeatureRecord::from_value(&features).ok_or(RequestError::MissingFeatures)?;
    let payload = serde_json::to_string(&reduce(&record))?;
    Ok(encode_result(&cipher, &payload).await)
}

pub async fn sum_array(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SumArrayRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Json(body) = body?;
    let caps = RequestCapabilities::from_headers(&headers);
    let cipher = select_cipher(&state.relayer, &caps).await;

    let values: Vec<f64> = if !body.numbers.is_null() {
        let numbers = body.numbers.as_array().ok_or(RequestError::MissingNumbers)?;
        numbers
            .iter()
            .enumerate()
            .map(|(index, n)| {
                number_from_value(Some(n)).ok_or(RequestError::InvalidNumbersEntry { index })
            })
            .collect::<Result<_, _>>()?
    } else if let Some(items) = body.enc_items.as_array() {
        // Validate every entry before any decode so no partial work is done.
        let tokens = items
            .iter()
            .map(|item| item.as_str().ok_or(RequestError::InvalidEncItemsEntry))
            .collect::<Result<Vec<_>, _>>()?;

        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            let plain = cipher
                .decode(token)
                .await
                .map_err(|_| RequestError::InvalidEncItemsPayload)?;
            values.push(parse_number(&plain).ok_or(RequestError::InvalidEncItemsPayload)?);
        }
        values
    } else {
        return Err(RequestError::MissingNumbers.into());
    };

    let sum: f64 = values.iter().sum();
    if !sum.is_finite() {
        return Err(RequestError::NonFiniteResult.into());
    }
    Ok(encode_result(&cipher, &format_number(sum)).await)
}

pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<AddRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Json(body) = body?;
    let caps = RequestCapabilities::from_headers(&headers);
    let cipher = select_cipher(&state.relayer, &caps).await;

    let (n1, n2) = match (body.enc_a.as_str(), body.enc_b.as_str()) {
        (Some(enc_a), Some(enc_b)) => {
            let d1 = cipher.decode(enc_a).await.map_err(|_| RequestError::InvalidInput)?;
            let d2 = cipher.decode(enc_b).await.map_err(|_| RequestError::InvalidInput)?;
            (parse_number(&d1), parse_number(&d2))
        }
        _ => (number_from_value(Some(&body.a)), number_from_value(Some(&body.b))),
    };

    let (n1, n2) = match (n1, n2) {
        (Some(n1), Some(n2)) => (n1, n2),
        _ => return Err(RequestError::NotANumber.into()),
    };

    let sum = n1 + n2;
    if !sum.is_finite() {
        return Err(RequestError::NonFiniteResult.into());
    }
    Ok(encode_result(&cipher, &format_number(sum)).await)
}
