//! CLI subcommand handlers.
//!
//! Each handler fetches through [`JustCmsApi`] and renders either styled text
//! or pretty JSON. Rendering is split into pure `render_*` functions so the
//! output can be tested without a terminal.

pub mod categories;
pub mod completions;
pub mod layout;
pub mod menu;
pub mod pages;
pub mod version;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{AuthOptions, Command, OutputOptions};
use crate::cms::{self, ClientConfig, JustCmsApi, JustCmsClient, ReqwestTransport};
use crate::color::ColorScheme;

/// Build a client from the parsed authentication options.
///
/// clap has already merged `JUSTCMS_TOKEN`/`JUSTCMS_PROJECT` into the
/// options, so no second environment lookup happens here.
///
/// # Errors
/// Returns [`cms::Error::Config`] when the token or project is missing, or
/// [`cms::Error::Transport`] when the HTTP client cannot be built.
pub fn connect(auth: &AuthOptions) -> cms::Result<JustCmsClient> {
  let mut config = ClientConfig::resolve(auth.token.as_deref(), auth.project.as_deref(), |_| None)?;
  if let Some(base_url) = &auth.base_url {
    config = config.with_base_url(base_url);
  }

  let transport = ReqwestTransport::with_timeout(Duration::from_secs(auth.timeout))?;
  Ok(JustCmsClient::with_transport(config, Arc::new(transport)))
}

/// Run an API-backed subcommand.
pub async fn dispatch(command: &Command, api: &dyn JustCmsApi, output: &OutputOptions, colors: &ColorScheme) -> Result<()> {
  match command {
    Command::Categories => categories::handle_categories_command(api, output.json, colors).await,
    Command::Pages {
      category,
      start,
      offset,
    } => pages::handle_pages_command(api, category.as_deref(), *start, *offset, output.json, colors).await,
    Command::Page { slug, version } => {
      pages::handle_page_command(api, slug, version.as_deref(), output.json, colors).await
    }
    Command::Menu { id } => menu::handle_menu_command(api, id, output.json, colors).await,
    Command::Layout { ids } => layout::handle_layout_command(api, ids, output.json, colors).await,
    // Handled in `cli::run` without a client.
    Command::Version { .. } | Command::Completions { .. } => Ok(()),
  }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize response as JSON")?;
  println!("{json}");
  Ok(())
}

pub(crate) fn print_lines(lines: &[String]) {
  for line in lines {
    println!("{line}");
  }
}

/// Shorten `text` to at most `max` characters, appending `…` when cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
  let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
  if single_line.chars().count() <= max {
    return single_line;
  }
  let mut cut: String = single_line.chars().take(max.saturating_sub(1)).collect();
  cut.push('…');
  cut
}
