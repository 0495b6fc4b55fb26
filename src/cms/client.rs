//! HTTP client implementation for the JustCMS public API.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::api::JustCmsApi;
use super::config::ClientConfig;
use super::error::{Error, Result};
use super::models::{CategoriesResponse, Category, Layout, Menu, PageDetail, PagesResponse};
use super::request::{self, GetPagesParams};
use super::transport::{HttpTransport, ReqwestTransport};

/// JustCMS API client.
///
/// Holds only the immutable configuration and a shared transport, so clones
/// are cheap and the client can be used from many tasks at once.
#[derive(Clone)]
pub struct JustCmsClient {
  config: ClientConfig,
  transport: Arc<dyn HttpTransport>,
}

impl JustCmsClient {
  /// Create a client using the default `reqwest` transport.
  ///
  /// # Errors
  /// Returns [`Error::Transport`] if the HTTP client cannot be built.
  pub fn new(config: ClientConfig) -> Result<Self> {
    Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
  }

  /// Create a client that sends requests through `transport`.
  pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
    Self { config, transport }
  }

  /// Resolve configuration from explicit values or the environment and build
  /// a client.
  ///
  /// # Errors
  /// Returns [`Error::Config`] when the token or project id is missing from
  /// both sources.
  pub fn from_env(token: Option<&str>, project_id: Option<&str>) -> Result<Self> {
    Self::new(ClientConfig::from_env(token, project_id)?)
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Issue one GET for `endpoint` and decode the JSON body into `T`.
  async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, Option<String>)]) -> Result<T> {
    let request = request::build_request(&self.config, endpoint, query);
    debug!(url = %request.url, "GET");

    let response = self.transport.get(&request).await?;

    if !response.is_success() {
      warn!(url = %request.url, status = response.status, "JustCMS API request failed");
      return Err(Error::Api {
        status: response.status,
        body: response.body,
      });
    }

    Ok(serde_json::from_str(&response.body)?)
  }
}

impl fmt::Debug for JustCmsClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JustCmsClient").field("config", &self.config).finish_non_exhaustive()
  }
}

#[async_trait]
impl JustCmsApi for JustCmsClient {
  async fn get_categories(&self) -> Result<Vec<Category>> {
    let response: CategoriesResponse = self.fetch("", &[]).await?;
    Ok(response.categories)
  }

  async fn get_pages(&self, params: &GetPagesParams) -> Result<PagesResponse> {
    self.fetch("pages", &params.to_query()).await
  }

  async fn get_page_by_slug(&self, slug: &str, version: Option<&str>) -> Result<PageDetail> {
    let query = [("v", version.map(str::to_string))];
    self.fetch(&request::page_endpoint(slug), &query).await
  }

  async fn get_menu_by_id(&self, id: &str) -> Result<Menu> {
    self.fetch(&request::menu_endpoint(id), &[]).await
  }

  async fn get_layout_by_id(&self, id: &str) -> Result<Layout> {
    self.fetch(&request::layouts_endpoint(&[id]), &[]).await
  }

  async fn get_layouts_by_ids(&self, ids: &[String]) -> Result<Vec<Layout>> {
    self.fetch(&request::layouts_endpoint(ids), &[]).await
  }
}
