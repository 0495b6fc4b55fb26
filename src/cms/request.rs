//! URL and query construction for JustCMS endpoints.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::config::ClientConfig;
use super::transport::HttpRequest;

/// Separator used to request several layouts in one path segment.
pub const LAYOUT_ID_SEPARATOR: &str = ";";

/// Ordered query pairs; `None` values are dropped when the URL is built.
pub type Query = Vec<(&'static str, Option<String>)>;

/// Criteria accepted by the pages listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFilters {
  pub category: Option<CategoryFilter>,
}

impl PageFilters {
  /// Filter pages to a single category slug.
  pub fn category(slug: impl Into<String>) -> Self {
    Self {
      category: Some(CategoryFilter { slug: slug.into() }),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
  pub slug: String,
}

/// Arguments for [`JustCmsApi::get_pages`](super::JustCmsApi::get_pages).
///
/// Every field is optional; the service applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPagesParams {
  pub filters: Option<PageFilters>,
  pub start: Option<u64>,
  pub offset: Option<u64>,
}

impl GetPagesParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn filters(mut self, filters: PageFilters) -> Self {
    self.filters = Some(filters);
    self
  }

  pub fn start(mut self, start: u64) -> Self {
    self.start = Some(start);
    self
  }

  pub fn offset(mut self, offset: u64) -> Self {
    self.offset = Some(offset);
    self
  }

  pub(crate) fn to_query(&self) -> Query {
    let category_slug = self
      .filters
      .as_ref()
      .and_then(|filters| filters.category.as_ref())
      .map(|category| category.slug.clone());

    vec![
      ("filter.category.slug", category_slug),
      ("start", self.start.map(|start| start.to_string())),
      ("offset", self.offset.map(|offset| offset.to_string())),
    ]
  }
}

/// Build `{base}/{project}[/{endpoint}][?query]`.
///
/// Query pairs without a value are omitted. Values are form-urlencoded.
pub fn build_url(config: &ClientConfig, endpoint: &str, query: &[(&str, Option<String>)]) -> String {
  let mut url = format!("{}/{}", config.base_url(), config.project_id());

  let endpoint = endpoint.trim_start_matches('/');
  if !endpoint.is_empty() {
    url.push('/');
    url.push_str(endpoint);
  }

  let mut serializer = form_urlencoded::Serializer::new(String::new());
  let mut has_pairs = false;
  for (key, value) in query {
    if let Some(value) = value {
      serializer.append_pair(key, value);
      has_pairs = true;
    }
  }

  if has_pairs {
    url.push('?');
    url.push_str(&serializer.finish());
  }

  url
}

/// Build the authorised GET request for `endpoint`.
pub fn build_request(config: &ClientConfig, endpoint: &str, query: &[(&str, Option<String>)]) -> HttpRequest {
  HttpRequest {
    url: build_url(config, endpoint, query),
    headers: vec![
      ("Authorization".to_string(), format!("Bearer {}", config.token())),
      ("Accept".to_string(), "application/json".to_string()),
    ],
  }
}

pub(crate) fn page_endpoint(slug: &str) -> String {
  format!("pages/{slug}")
}

pub(crate) fn menu_endpoint(id: &str) -> String {
  format!("menus/{id}")
}

pub(crate) fn layouts_endpoint<S: AsRef<str>>(ids: &[S]) -> String {
  let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(LAYOUT_ID_SEPARATOR);
  format!("layouts/{joined}")
}
