//! Fake HTTP transport for testing
//!
//! Serves canned responses keyed by request path and records every request so
//! tests can assert on the URLs and headers the client produced.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use justcms::{ClientConfig, Error, HttpRequest, HttpResponse, HttpTransport, JustCmsClient};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_PROJECT: &str = "test-project";
pub const BASE: &str = "https://api.justcms.co/public/test-project";

/// A transport that answers from a path → response table.
pub struct FakeTransport {
  routes: HashMap<String, HttpResponse>,
  fallback: HttpResponse,
  failure: Option<String>,
  requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
  /// Transport that answers every unknown path with 404.
  pub fn new() -> Self {
    Self {
      routes: HashMap::new(),
      fallback: HttpResponse::new(404, r#"{"message":"Not found"}"#),
      failure: None,
      requests: Mutex::new(Vec::new()),
    }
  }

  /// Answer every request with `status` and `body`.
  pub fn always(status: u16, body: &str) -> Self {
    Self {
      fallback: HttpResponse::new(status, body),
      ..Self::new()
    }
  }

  /// Fail every request at the transport level, as if the connection broke.
  pub fn failing(message: &str) -> Self {
    Self {
      failure: Some(message.to_string()),
      ..Self::new()
    }
  }

  /// Answer requests whose path (without query) is `path` with a 200 JSON
  /// body. `path` is relative to the project root; `""` is the root itself.
  pub fn with_json(mut self, path: &str, body: serde_json::Value) -> Self {
    self.routes.insert(path.to_string(), HttpResponse::new(200, body.to_string()));
    self
  }

  /// Build a client bound to the test project that uses this transport.
  pub fn into_client(self) -> (JustCmsClient, Arc<FakeTransport>) {
    let transport = Arc::new(self);
    let config = ClientConfig::new(TEST_TOKEN, TEST_PROJECT).expect("test config is valid");
    (JustCmsClient::with_transport(config, transport.clone()), transport)
  }

  pub fn requests(&self) -> Vec<HttpRequest> {
    self.requests.lock().unwrap().clone()
  }

  pub fn last_url(&self) -> String {
    self.requests().last().map(|r| r.url.clone()).unwrap_or_default()
  }
}

impl Default for FakeTransport {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl HttpTransport for FakeTransport {
  async fn get(&self, request: &HttpRequest) -> justcms::Result<HttpResponse> {
    self.requests.lock().unwrap().push(request.clone());

    if let Some(message) = &self.failure {
      return Err(Error::Transport(message.clone()));
    }

    let without_query = request.url.split('?').next().unwrap_or_default();
    let path = without_query
      .strip_prefix(BASE)
      .unwrap_or(without_query)
      .trim_start_matches('/');

    Ok(self.routes.get(path).cloned().unwrap_or_else(|| self.fallback.clone()))
  }
}
