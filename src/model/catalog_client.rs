//! Catalogue HTTP client and the source abstraction sections fetch through

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::HttpSettings;

/// Why a fetch failed. Cloneable so it can be held inside a `LoadState`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {detail}")]
    Transport { endpoint: String, detail: String },

    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode response from {endpoint}: {detail}")]
    Decode { endpoint: String, detail: String },
}

impl FetchError {
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Timeout { endpoint }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Anything that can resolve an endpoint to a JSON document
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError>;
}

/// reqwest-backed catalogue source
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
}

impl HttpCatalog {
    pub fn new(settings: &HttpSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        tracing::debug!(
            connect_timeout_secs = settings.connect_timeout_secs,
            request_timeout_secs = settings.request_timeout_secs,
            "HTTP catalogue client initialized"
        );
        Ok(Self { client })
    }

    async fn get(&self, endpoint: &str) -> Result<Value, FetchError> {
        let response = self.client.get(endpoint).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { endpoint: endpoint.to_string() }
            } else {
                FetchError::Transport {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        })?;

        parse_body(endpoint, &body)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        crate::log_fetch_request!("GET", endpoint = %endpoint);
        let result = self.get(endpoint).await;
        crate::log_fetch_result!("GET", endpoint, result);
        result
    }
}

/// An empty body is an absent payload, not a decode failure.
fn parse_body(endpoint: &str, body: &[u8]) -> Result<Value, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| FetchError::Decode {
        endpoint: endpoint.to_string(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_null() {
        assert_eq!(parse_body("/x", b"").unwrap(), Value::Null);
        assert_eq!(parse_body("/x", b"  \n").unwrap(), Value::Null);
    }

    #[test]
    fn json_body_is_parsed() {
        assert_eq!(parse_body("/x", br#"[{"id":1}]"#).unwrap(), json!([{"id": 1}]));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = parse_body("/albums/top", b"<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
        assert_eq!(err.endpoint(), "/albums/top");
    }

    #[test]
    fn timeout_is_reported_apart_from_transport() {
        let err = FetchError::Timeout { endpoint: "/albums/new".into() };
        assert_eq!(err.to_string(), "request to /albums/new timed out");
        assert_eq!(err.endpoint(), "/albums/new");
        assert_ne!(err, FetchError::Transport { endpoint: "/albums/new".into(), detail: "timed out".into() });
    }

    #[test]
    fn status_error_message_names_endpoint() {
        let err = FetchError::Status { endpoint: "/songs".into(), status: 503 };
        assert_eq!(err.to_string(), "/songs responded with HTTP 503");
    }
}
