//! HTTP transport: builds and executes one request, no domain interpretation.

use async_trait::async_trait;
use thiserror::Error;

/// The HTTP methods the service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One request to the service, relative to the fixed base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path joined against the base endpoint, e.g. `animals/all`.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Any response the server produced, 4xx/5xx included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A failure occurring before any HTTP status was received
/// (connectivity, resolution, timeout).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Executes one HTTP request and hands back raw status and body.
///
/// Received responses are always `Ok`, whatever the status; only failures
/// without a status are `Err`. Implementations make exactly one network
/// call per invocation and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes a request whose path is joined against the base endpoint.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;

    /// Issues a bare GET to an arbitrary absolute URL (image downloads).
    async fn fetch_raw(&self, url: &str) -> Result<ApiResponse, TransportError>;
}

/// The production [`Transport`], backed by a shared `reqwest` client.
///
/// No explicit timeout is configured; reqwest's defaults apply.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, TransportError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path);
        tracing::debug!("Issuing {:?} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        self.send(builder).await
    }

    async fn fetch_raw(&self, url: &str) -> Result<ApiResponse, TransportError> {
        tracing::debug!("Issuing GET {}", url);
        self.send(self.client.get(url)).await
    }
}
