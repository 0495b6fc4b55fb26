//! Trait definitions for interacting with JustCMS.

use async_trait::async_trait;

use super::error::Result;
use super::models::{Category, Layout, Menu, PageDetail, PagesResponse};
use super::request::GetPagesParams;

/// Retrieval operations of the JustCMS public API (enables testing with fake
/// implementations).
#[async_trait]
pub trait JustCmsApi: Send + Sync {
  /// Fetch every category of the project.
  async fn get_categories(&self) -> Result<Vec<Category>>;

  /// List pages, optionally filtered by category and windowed by
  /// `start`/`offset`.
  ///
  /// # Returns
  /// The page window plus the total number of matching pages.
  async fn get_pages(&self, params: &GetPagesParams) -> Result<PagesResponse>;

  /// Fetch a full page by slug.
  ///
  /// # Arguments
  /// * `slug` - Page slug, e.g. `"about-us"`.
  /// * `version` - Optional version tag such as `"draft"`, sent as `v`.
  async fn get_page_by_slug(&self, slug: &str, version: Option<&str>) -> Result<PageDetail>;

  /// Fetch a menu tree by id.
  async fn get_menu_by_id(&self, id: &str) -> Result<Menu>;

  /// Fetch a single layout by id.
  async fn get_layout_by_id(&self, id: &str) -> Result<Layout>;

  /// Fetch several layouts in one request, in the order of `ids`.
  async fn get_layouts_by_ids(&self, ids: &[String]) -> Result<Vec<Layout>>;
}
