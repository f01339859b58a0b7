//! The single outbound call: POST a JSON body, get a JSON body back.

use std::time::Instant;

use connector_core::error::{ConnectorError, Result};
use log::{debug, warn};
use reqwest::header::{HeaderValue, ACCEPT};
use serde_json::Value;

use crate::config::{ConnectorConfig, Credentials};

/// What the connector needs from an HTTP client.
///
/// Implementations own TLS, connection reuse and deadlines. Any failure on
/// the way (refused connection, timeout, non-2xx status, body that is not
/// JSON) is reported as [`ConnectorError::Transport`].
pub trait Transport: Send + Sync {
    fn post(&self, endpoint: &str, credentials: &Credentials, body: &Value) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, endpoint: &str, credentials: &Credentials, body: &Value) -> Result<Value> {
        (**self).post(endpoint, credentials, body)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn post(&self, endpoint: &str, credentials: &Credentials, body: &Value) -> Result<Value> {
        (**self).post(endpoint, credentials, body)
    }
}

/// Blocking [`reqwest`] transport with HTTP basic auth.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConnectorError::invalid_configuration(format!("http client: {e}")))?;
        Ok(Self { client })
    }

    /// Use an already configured client.
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn post(&self, endpoint: &str, credentials: &Credentials, body: &Value) -> Result<Value> {
        let start = Instant::now();

        let response = self
            .client
            .post(endpoint)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(body)
            .send()
            .map_err(|e| {
                warn!("[CONNECTOR_HTTP] POST {} failed: {}", endpoint, e);
                ConnectorError::transport(e)
            })?;

        let status = response.status();
        debug!(
            "[CONNECTOR_HTTP] Response received: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        let response = response.error_for_status().map_err(|e| {
            warn!("[CONNECTOR_HTTP] Non-success status {} from {}", status, endpoint);
            ConnectorError::transport(e)
        })?;

        response.json::<Value>().map_err(ConnectorError::transport)
    }
}
