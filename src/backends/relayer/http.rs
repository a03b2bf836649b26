// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::RelayerConfig;
use crate::errors::GatewayError;
use crate::traits::{RelayerConnector, RelayerGateway};

const ENCRYPT_PATH: &str = "v1/encrypt";
const DECRYPT_PATH: &str = "v1/decrypt";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EncryptRequest<'a> {
    data: &'a str,
    public_key: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EncryptResponse {
    encrypted_data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DecryptRequest<'a> {
    encrypted_data: &'a str,
    private_key: &'a str,
}

#[derive(Deserialize)]
struct DecryptResponse {
    data: String,
}

/// Relayer reached over HTTP with JSON bodies.
pub struct HttpRelayerGateway {
    client: Client,
    base: Url,
    timeout: Duration,
}

impl HttpRelayerGateway {
    pub fn new(client: Client, base: Url, timeout: Duration) -> Self {
        Self { client, base, timeout }
    }

    fn url(&self, path: &str) -> Result<Url, GatewayError> {
        self.base
            .join(path)
            .map_err(|e| GatewayError::InvalidEndpoint {
                endpoint: self.base.to_string(),
                reason: e.to_string(),
            })
    }

    fn map_transport(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else if err.is_connect() {
            GatewayError::Unreachable {
                endpoint: self.base.to_string(),
                reason: err.to_string(),
            }
        } else {
            GatewayError::Request(err.to_string())
        }
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(self.url(path)?)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<R>().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout(self.timeout)
            } else {
                GatewayError::InvalidResponse(e.to_string())
            }
        })
    }
}

#[async_trait]
impl RelayerGateway for HttpRelayerGateway {
    async fn encrypt(&self, data: &str, public_key: &str) -> Result<String, GatewayError> {
        let body = EncryptRequest { data, public_key };
        let response: EncryptResponse = self.post(ENCRYPT_PATH, &body).await?;
        Ok(response.encrypted_data)
    }

    async fn decrypt(&self, encrypted: &str, private_key: &str) -> Result<String, GatewayError> {
        let body = DecryptRequest {
            encrypted_data: encrypted,
            private_key,
        };
        let response: DecryptResponse = self.post(DECRYPT_PATH, &body).await?;
        Ok(response.data)
    }
}

/// Builds an [`HttpRelayerGateway`] from [`RelayerConfig`].
///
/// With `probe` enabled, one `GET` against the endpoint must complete at the
/// transport level. Any HTTP status counts as reachable.
pub struct HttpRelayerConnector {
    enabled: bool,
    probe: bool,
    timeout: Duration,
}

impl HttpRelayerConnector {
    pub fn from_config(config: &RelayerConfig) -> Self {
        Self {
            enabled: config.enabled,
            probe: config.probe,
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }
}

/// Parses the endpoint, forcing a trailing slash so relative joins keep any base path.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, GatewayError> {
    let normalized = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    };
    Url::parse(&normalized).map_err(|e| GatewayError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl RelayerConnector for HttpRelayerConnector {
    async fn connect(&self, endpoint: &str) -> Result<Arc<dyn RelayerGateway>, GatewayError> {
        if !self.enabled {
            return Err(GatewayError::Disabled);
        }

        let base = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| GatewayError::ClientBuild(e.to_string()))?;

        let gateway = HttpRelayerGateway::new(client, base.clone(), self.timeout);

        if self.probe {
            gateway
                .client
                .get(base)
                .send()
                .await
                .map_err(|e| gateway.map_transport(e))?;
        }

        Ok(Arc::new(gateway))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool) -> RelayerConfig {
        RelayerConfig {
            enabled,
            probe: false,
            ..RelayerConfig::default()
        }
    }

    #[test]
    fn test_parse_endpoint_appends_slash() {
        let url = parse_endpoint("https://relayer.example.com/api").unwrap();
        assert_eq!(url.as_str(), "https://relayer.example.com/api/");
        assert_eq!(
            url.join(ENCRYPT_PATH).unwrap().as_str(),
            "https://relayer.example.com/api/v1/encrypt"
        );
    }

    #[test]
    fn test_parse_endpoint_rejects_garbage() {
        let err = parse_endpoint("not a url").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidEndpoint { .. }));
    }

    #[tokio::test]
    async fn test_disabled_connector_refuses() {
        let connector = HttpRelayerConnector::from_config(&config(false));
        let err = connector.connect("https://relayer.example.com").await.err().unwrap();
        assert_eq!(err, GatewayError::Disabled);
    }

    #[tokio::test]
    async fn test_connect_without_probe_builds_gateway() {
        let connector = HttpRelayerConnector::from_config(&config(true));
        assert!(connector.connect("https://relayer.example.com").await.is_ok());
    }

    #[test]
    fn test_wire_bodies_use_camel_case() {
        let body = serde_json::to_value(EncryptRequest {
            data: "42",
            public_key: "pk",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "data": "42", "publicKey": "pk" }));

        let body = serde_json::to_value(DecryptRequest {
            encrypted_data: "tok",
            private_key: "sk",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "encryptedData": "tok", "privateKey": "sk" })
        );
    }
}
