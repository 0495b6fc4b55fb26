//! Client configuration and credential resolution.
//!
//! The client never reads the process environment on its own. Callers resolve
//! a [`ClientConfig`] once, either from explicit values or through
//! [`ClientConfig::from_env`], and hand it to
//! [`JustCmsClient::new`](super::JustCmsClient::new).

use std::fmt;

use super::error::{Error, Result};

/// Environment key holding the API token.
pub const TOKEN_ENV: &str = "JUSTCMS_TOKEN";
/// Environment key holding the project identifier.
pub const PROJECT_ENV: &str = "JUSTCMS_PROJECT";
/// Public API root; the project id is appended as the first path segment.
pub const DEFAULT_BASE_URL: &str = "https://api.justcms.co/public";

/// Immutable settings a client is bound to.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
  token: String,
  project_id: String,
  base_url: String,
}

impl ClientConfig {
  /// Build a configuration from explicit values.
  ///
  /// Surrounding whitespace is trimmed from both values.
  ///
  /// # Errors
  /// Returns [`Error::Config`] when either value is empty or whitespace.
  pub fn new(token: impl Into<String>, project_id: impl Into<String>) -> Result<Self> {
    let token = non_empty(Some(token.into())).ok_or_else(|| missing("API token", TOKEN_ENV))?;
    let project_id = non_empty(Some(project_id.into())).ok_or_else(|| missing("project id", PROJECT_ENV))?;

    Ok(Self {
      token,
      project_id,
      base_url: DEFAULT_BASE_URL.to_string(),
    })
  }

  /// Resolve each value from its explicit argument, falling back to `lookup`.
  ///
  /// `lookup` receives [`TOKEN_ENV`] or [`PROJECT_ENV`] and returns the
  /// fallback value if one exists. Values are trimmed of surrounding
  /// whitespace, and empty or whitespace-only strings count as absent on both
  /// sides.
  ///
  /// # Errors
  /// Returns [`Error::Config`] naming the first value neither source provides.
  pub fn resolve<F>(token: Option<&str>, project_id: Option<&str>, lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let token = non_empty(token.map(str::to_string))
      .or_else(|| non_empty(lookup(TOKEN_ENV)))
      .ok_or_else(|| missing("API token", TOKEN_ENV))?;
    let project_id = non_empty(project_id.map(str::to_string))
      .or_else(|| non_empty(lookup(PROJECT_ENV)))
      .ok_or_else(|| missing("project id", PROJECT_ENV))?;

    Self::new(token, project_id)
  }

  /// [`ClientConfig::resolve`] against the process environment.
  pub fn from_env(token: Option<&str>, project_id: Option<&str>) -> Result<Self> {
    Self::resolve(token, project_id, |key| std::env::var(key).ok())
  }

  /// Point the client at a different API root (proxies, local stubs).
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  pub fn token(&self) -> &str {
    &self.token
  }

  pub fn project_id(&self) -> &str {
    &self.project_id
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl fmt::Debug for ClientConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClientConfig")
      .field("token", &"<redacted>")
      .field("project_id", &self.project_id)
      .field("base_url", &self.base_url)
      .finish()
  }
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn missing(what: &str, key: &str) -> Error {
  Error::Config(format!("{what} is required: pass it explicitly or set {key}"))
}
