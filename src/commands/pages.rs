//! `pages` and `page` subcommands.

use anyhow::{Context, Result};

use super::{print_json, print_lines, truncate};
use crate::cms::{
  ContentBlock, GetPagesParams, JustCmsApi, PageDetail, PageFilters, PagesResponse, get_first_image,
  get_large_image_variant,
};
use crate::color::ColorScheme;

/// List pages with optional category filter and window.
pub(crate) async fn handle_pages_command(
  api: &dyn JustCmsApi,
  category: Option<&str>,
  start: Option<u64>,
  offset: Option<u64>,
  json: bool,
  colors: &ColorScheme,
) -> Result<()> {
  let params = GetPagesParams {
    filters: category.map(PageFilters::category),
    start,
    offset,
  };
  let pages = api.get_pages(&params).await.context("Failed to fetch pages")?;

  if json {
    return print_json(&pages);
  }

  print_lines(&render_pages(&pages, start.unwrap_or(0), colors));
  Ok(())
}

/// Fetch a single page and print its metadata and content outline.
pub(crate) async fn handle_page_command(
  api: &dyn JustCmsApi,
  slug: &str,
  version: Option<&str>,
  json: bool,
  colors: &ColorScheme,
) -> Result<()> {
  let page = api
    .get_page_by_slug(slug, version)
    .await
    .with_context(|| format!("Failed to fetch page `{slug}`"))?;

  if json {
    return print_json(&page);
  }

  print_lines(&render_page(&page, colors));
  Ok(())
}

pub(crate) fn render_pages(pages: &PagesResponse, start: u64, colors: &ColorScheme) -> Vec<String> {
  if pages.items.is_empty() {
    return vec![format!(
      "{} (total {})",
      colors.dimmed("No pages in this window"),
      colors.number(pages.total)
    )];
  }

  let first = start.saturating_add(1);
  let last = start.saturating_add(pages.items.len() as u64);
  let mut lines = vec![format!(
    "Pages {}-{} of {}",
    colors.number(first),
    colors.number(last),
    colors.number(pages.total)
  )];

  for page in &pages.items {
    let categories = page
      .categories
      .iter()
      .map(|category| category.slug.as_str())
      .collect::<Vec<_>>()
      .join(", ");
    let categories = if categories.is_empty() { "-".to_string() } else { categories };

    lines.push(format!(
      "  {} [slug {} | categories {} | updated {}]",
      colors.emphasis(&page.title),
      colors.code(&page.slug),
      colors.dimmed(categories),
      colors.dimmed(&page.updated_at)
    ));
  }

  lines
}

pub(crate) fn render_page(page: &PageDetail, colors: &ColorScheme) -> Vec<String> {
  let summary = &page.summary;
  let mut lines = vec![colors.emphasis(&summary.title)];

  if !summary.subtitle.is_empty() {
    lines.push(format!("  {}", summary.subtitle));
  }
  lines.push(format!("  {}: {}", colors.emphasis("Slug"), colors.code(&summary.slug)));

  if !summary.categories.is_empty() {
    let names = summary
      .categories
      .iter()
      .map(|category| category.name.as_str())
      .collect::<Vec<_>>()
      .join(", ");
    lines.push(format!("  {}: {}", colors.emphasis("Categories"), names));
  }

  lines.push(format!(
    "  {}: {} ({} {})",
    colors.emphasis("Updated"),
    summary.updated_at,
    colors.dimmed("created"),
    colors.dimmed(&summary.created_at)
  ));

  if let Some(cover) = &summary.cover_image
    && let Some(variant) = get_large_image_variant(cover).or_else(|| cover.variants.first())
  {
    lines.push(format!("  {}: {}", colors.emphasis("Cover"), colors.link(&variant.url)));
  }

  if !page.meta.title.is_empty() || !page.meta.description.is_empty() {
    lines.push(format!(
      "  {}: {} {}",
      colors.emphasis("Meta"),
      page.meta.title,
      colors.dimmed(truncate(&page.meta.description, 80))
    ));
  }

  lines.push(String::new());
  lines.push(format!(
    "{} ({} blocks)",
    colors.emphasis("Content"),
    colors.number(page.content.len())
  ));
  for (idx, block) in page.content.iter().enumerate() {
    let styles = if block.styles().is_empty() {
      String::new()
    } else {
      format!(" {}", colors.dimmed(format!("[{}]", block.styles().join(", "))))
    };
    lines.push(format!(
      "  {}. {}: {}{}",
      idx + 1,
      colors.code(block.kind()),
      describe_block(block),
      styles
    ));
  }

  lines
}

/// One-line description of a content block.
fn describe_block(block: &ContentBlock) -> String {
  match block {
    ContentBlock::Header(header) => match &header.subheader {
      Some(sub) if !sub.is_empty() => format!("{} - {}", truncate(&header.header, 60), truncate(sub, 40)),
      _ => truncate(&header.header, 60),
    },
    ContentBlock::List(list) => {
      let noun = if list.options.len() == 1 { "item" } else { "items" };
      format!("{} {noun}", list.options.len())
    }
    ContentBlock::Embed(embed) => embed.url.clone(),
    ContentBlock::Image(images) => match get_first_image(images) {
      Some(image) if !image.alt.is_empty() => format!("{} ({} total)", truncate(&image.alt, 60), images.images.len()),
      Some(_) => format!("{} total", images.images.len()),
      None => "no images".to_string(),
    },
    ContentBlock::Code(code) => format!("{} lines", code.code.lines().count()),
    ContentBlock::Text(text) => truncate(&text.text, 60),
    ContentBlock::Cta(cta) => format!("{} -> {}", cta.text, cta.url),
    ContentBlock::Custom(custom) => {
      let mut keys: Vec<_> = custom.fields.keys().map(String::as_str).collect();
      keys.sort_unstable();
      if keys.is_empty() {
        custom.block_id.clone()
      } else {
        format!("{} {{{}}}", custom.block_id, keys.join(", "))
      }
    }
  }
}
