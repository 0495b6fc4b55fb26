//! `layout` subcommand.

use anyhow::{Context, Result};

use super::{print_json, print_lines, truncate};
use crate::cms::{JustCmsApi, Layout, LayoutValue};
use crate::color::ColorScheme;

/// Fetch one layout, or several in a single request, and print their items.
pub(crate) async fn handle_layout_command(
  api: &dyn JustCmsApi,
  ids: &[String],
  json: bool,
  colors: &ColorScheme,
) -> Result<()> {
  let layouts = match ids {
    [id] => vec![
      api
        .get_layout_by_id(id)
        .await
        .with_context(|| format!("Failed to fetch layout `{id}`"))?,
    ],
    _ => api
      .get_layouts_by_ids(ids)
      .await
      .with_context(|| format!("Failed to fetch layouts `{}`", ids.join(", ")))?,
  };

  if json {
    return match layouts.as_slice() {
      [layout] => print_json(layout),
      _ => print_json(&layouts),
    };
  }

  for (idx, layout) in layouts.iter().enumerate() {
    if idx > 0 {
      println!();
    }
    print_lines(&render_layout(layout, colors));
  }
  Ok(())
}

pub(crate) fn render_layout(layout: &Layout, colors: &ColorScheme) -> Vec<String> {
  let mut lines = vec![format!("{} [id {}]", colors.emphasis(&layout.name), colors.code(&layout.id))];

  for item in &layout.items {
    lines.push(format!(
      "  {} {} = {}",
      colors.code(&item.uid),
      colors.dimmed(format!("({})", item.value.kind())),
      format_value(&item.value, colors)
    ));
    if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
      lines.push(format!("      {}", colors.dimmed(truncate(description, 80))));
    }
  }

  lines
}

fn format_value(value: &LayoutValue, colors: &ColorScheme) -> String {
  match value {
    LayoutValue::Boolean(flag) => colors.number(flag),
    LayoutValue::Text(text) | LayoutValue::Html(text) | LayoutValue::Svg(text) => truncate(text, 60),
    LayoutValue::Other { value, .. } => truncate(&value.to_string(), 60),
  }
}
