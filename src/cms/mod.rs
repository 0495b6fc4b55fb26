//! JustCMS module providing the API trait, the HTTP client, configuration,
//! data models, request building, and pure content helpers.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod request;
pub mod transport;

pub use api::JustCmsApi;
pub use client::JustCmsClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, PROJECT_ENV, TOKEN_ENV};
pub use error::{Error, Result};
pub use helpers::{HasCategories, Styled, get_first_image, get_large_image_variant, has_category, is_block_has_style};
pub use models::{
  CategoriesResponse, Category, CodeBlock, ContentBlock, CtaBlock, CustomBlock, EmbedBlock, HeaderBlock, Image,
  ImageBlock, ImageVariant, Layout, LayoutItem, LayoutValue, ListBlock, ListOption, Menu, MenuItem, PageDetail, PageMeta,
  PageSummary, PagesResponse, TextBlock,
};
pub use request::{CategoryFilter, GetPagesParams, PageFilters};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
