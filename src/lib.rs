//! JustCMS client library
//!
//! Typed access to the JustCMS public content API: categories, pages, menus
//! and layouts, plus helpers for working with page content.
//!
//! ```no_run
//! use justcms::{ClientConfig, JustCmsApi, JustCmsClient};
//!
//! # async fn run() -> justcms::Result<()> {
//! let client = JustCmsClient::new(ClientConfig::from_env(None, None)?)?;
//! let page = client.get_page_by_slug("about-us", None).await?;
//! println!("{}", page.title());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod cms;
pub mod color;
pub mod commands;

pub use cms::*;
