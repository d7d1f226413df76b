//! API client module for the Tracsis backend.
//!
//! Exposes the [`Tracsis`] client together with the pieces every endpoint
//! method is built from: the [`Transport`] seam that carries a prepared
//! request onto the wire, and the [`ApiResponse`] envelope that every call
//! resolves to. Endpoint methods never return `Err` across the client
//! boundary; transport and decoding failures are folded into the envelope
//! so callers branch on `error`/`status_code` alone.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod tracsis;

pub use tracsis::{Session, Tracsis};

/// Failure raised below the JSON layer: connection errors, timeouts, and
/// non-success HTTP statuses reported by the transport itself.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub status_code: Option<u16>,
}

/// Raw reply from the wire before JSON decoding.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

/// Seam between the API client and the HTTP stack.
///
/// The client prepares URL, headers, and JSON body; the transport only
/// moves them. Tests substitute a recording implementation here.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, headers: &HeaderMap, body: &Value) -> Result<RawReply, TransportError>;
}

/// Production transport backed by a [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, headers: &HeaderMap, body: &Value) -> Result<RawReply, TransportError> {
        let res = self.client.post(url).headers(headers.clone()).json(body).send().await.map_err(|e| TransportError {
            message: format!("Request failed: {}", e),
            status_code: e.status().map(|status| status.as_u16()),
        })?;

        let status = res.status().as_u16();
        let body = res.text().await.map_err(|e| TransportError {
            message: format!("Request failed: {}", e),
            status_code: Some(status),
        })?;

        Ok(RawReply { status, body })
    }
}

/// Uniform result envelope returned by every endpoint method.
///
/// Successful 2xx bodies are decoded into this shape verbatim; fields the
/// server adds beyond the known ones survive in `rest` so the envelope can
/// be printed back without loss. Failures synthesized on the client side
/// use the constructors below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

impl ApiResponse {
    /// Transport-level failure: network error or reported HTTP status.
    pub fn request_failed(err: &TransportError) -> Self {
        ApiResponse {
            error: true,
            message: Some(err.message.clone()),
            status_code: err.status_code,
            ..Default::default()
        }
    }

    /// Non-2xx reply that reached us with a readable body.
    pub fn http_error(status: u16) -> Self {
        ApiResponse {
            error: true,
            message: Some(format!("Request failed: HTTP status {}", status)),
            status_code: Some(status),
            ..Default::default()
        }
    }

    /// 2xx reply whose body is not JSON; the raw body is preserved for
    /// diagnostics.
    pub fn invalid_json(status: u16, raw: &str) -> Self {
        ApiResponse {
            error: true,
            message: Some("Invalid JSON response from server".to_string()),
            status_code: Some(status),
            raw_response: Some(raw.to_string()),
            ..Default::default()
        }
    }

    /// Client-side precondition failure; no network round-trip was made.
    pub fn unauthenticated() -> Self {
        ApiResponse {
            error: true,
            message: Some("Not authenticated. Please login first.".to_string()),
            status_code: Some(401),
            ..Default::default()
        }
    }

    /// The `data.items` array of a grid reply, empty when absent.
    pub fn items(&self) -> Vec<Value> {
        self.data
            .as_ref()
            .and_then(|data| data.get("items"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}
