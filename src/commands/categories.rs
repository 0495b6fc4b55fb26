//! `categories` subcommand.

use anyhow::{Context, Result};

use super::{print_json, print_lines};
use crate::cms::{Category, JustCmsApi};
use crate::color::ColorScheme;

/// Fetch and print every category of the project.
pub(crate) async fn handle_categories_command(api: &dyn JustCmsApi, json: bool, colors: &ColorScheme) -> Result<()> {
  let categories = api.get_categories().await.context("Failed to fetch categories")?;

  if json {
    return print_json(&categories);
  }

  print_lines(&render_categories(&categories, colors));
  Ok(())
}

pub(crate) fn render_categories(categories: &[Category], colors: &ColorScheme) -> Vec<String> {
  if categories.is_empty() {
    return vec![colors.dimmed("No categories")];
  }

  let mut lines = vec![format!(
    "{} {}",
    colors.number(categories.len()),
    colors.emphasis(if categories.len() == 1 { "category" } else { "categories" })
  )];
  lines.extend(
    categories
      .iter()
      .map(|category| format!("  {} ({})", category.name, colors.code(&category.slug))),
  );
  lines
}
