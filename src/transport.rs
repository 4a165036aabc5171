//! Blocking HTTP transport for the hosted API.

use reqwest::{
    blocking::{Client, RequestBuilder},
    StatusCode,
};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::{
    client::{HttpClient, Method},
    config::{Config, ConfigError},
};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{method} {url} failed: {source}")]
    Http {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} returned status {status}: {body}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("{method} {url} returned invalid json: {source}")]
    Decode {
        method: Method,
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Sends requests to `base_url + path` with basic auth and decodes the reply
/// as JSON. An empty reply decodes to `Value::Null`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    email: String,
    password: String,
}

impl HttpTransport {
    pub fn new(config: Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Uses a preconfigured client, e.g. one with timeouts or a proxy.
    pub fn with_client(client: Client, config: Config) -> Self {
        Self {
            client,
            base_url: config.base_url,
            email: config.email,
            password: config.password,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_env().map(Self::new)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send(&self, method: Method, url: String, req: RequestBuilder) -> Result<Value, TransportError> {
        let resp = req
            .basic_auth(&self.email, Some(&self.password))
            .send()
            .map_err(|e| http_error(method, &url, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            warn!(%method, %url, %status, "request rejected");
            return Err(TransportError::Status {
                method,
                url,
                status,
                body,
            });
        }

        let body = resp.text().map_err(|e| http_error(method, &url, e))?;
        decode(&body).map_err(|source| TransportError::Decode { method, url, source })
    }
}

impl HttpClient for HttpTransport {
    type Response = Value;
    type Error = TransportError;

    fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url(path);
        let req = self.client.get(&url);
        self.send(Method::Get, url, req)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.url(path);
        let req = self.client.post(&url).json(body);
        self.send(Method::Post, url, req)
    }
}

fn http_error(method: Method, url: &str, source: reqwest::Error) -> TransportError {
    TransportError::Http {
        method,
        url: url.to_string(),
        source,
    }
}

fn decode(body: &str) -> Result<Value, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
}
