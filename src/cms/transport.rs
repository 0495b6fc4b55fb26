//! HTTP transport seam.
//!
//! Requests and responses are plain data so the client can be driven by any
//! HTTP stack. [`ReqwestTransport`] is the default; tests substitute a
//! recording fake.

use std::time::Duration;

use async_trait::async_trait;

use super::error::{Error, Result};

/// An outbound GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
  /// Fully formed URL including the query string.
  pub url: String,
  pub headers: Vec<(String, String)>,
}

impl HttpRequest {
  /// Value of the first header named `name` (case-insensitive).
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  pub status: u16,
  pub body: String,
}

impl HttpResponse {
  pub fn new(status: u16, body: impl Into<String>) -> Self {
    Self {
      status,
      body: body.into(),
    }
  }

  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Capability to perform a single HTTP GET.
#[async_trait]
pub trait HttpTransport: Send + Sync {
  /// Execute `request` and return the status and body text.
  ///
  /// # Errors
  /// Returns [`Error::Transport`] only when no response was received. Non-2xx
  /// statuses are a successful exchange at this layer.
  async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  client: reqwest::Client,
}

impl ReqwestTransport {
  /// Transport without a request timeout.
  ///
  /// # Errors
  /// Returns [`Error::Transport`] if the TLS backend cannot be initialised.
  pub fn new() -> Result<Self> {
    Self::build(None)
  }

  /// Transport that aborts each request after `timeout`.
  pub fn with_timeout(timeout: Duration) -> Result<Self> {
    Self::build(Some(timeout))
  }

  fn build(timeout: Option<Duration>) -> Result<Self> {
    let mut builder = reqwest::Client::builder().user_agent(format!(
      "justcms-rs/{} ({})",
      env!("CARGO_PKG_VERSION"),
      env!("TARGET")
    ));
    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }

    let client = builder
      .build()
      .map_err(|e| Error::Transport(format!("failed to create HTTP client: {e}")))?;

    Ok(Self { client })
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
    let mut builder = self.client.get(&request.url);
    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }

    let response = builder.send().await.map_err(|e| Error::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
      .text()
      .await
      .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;

    Ok(HttpResponse { status, body })
  }
}
