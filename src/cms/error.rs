//! Error type shared by every JustCMS client operation.

use thiserror::Error;

/// Errors surfaced by [`JustCmsClient`](super::JustCmsClient) and
/// [`ClientConfig`](super::ClientConfig).
#[derive(Debug, Error)]
pub enum Error {
  /// The API token or project id could not be resolved at construction time.
  #[error("configuration error: {0}")]
  Config(String),

  /// The API answered with a non-success status. The body is kept verbatim.
  #[error("JustCMS API returned error {status}: {body}")]
  Api { status: u16, body: String },

  /// The request never produced a response (DNS, TLS, connection reset, ...).
  #[error("failed to reach JustCMS API: {0}")]
  Transport(String),

  /// A success response whose body did not match the expected shape.
  #[error("failed to parse JustCMS API response: {0}")]
  Decode(#[from] serde_json::Error),
}

impl Error {
  /// HTTP status code for [`Error::Api`], `None` for every other variant.
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Api { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Whether this error came from configuration resolution.
  pub fn is_config(&self) -> bool {
    matches!(self, Self::Config(_))
  }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
