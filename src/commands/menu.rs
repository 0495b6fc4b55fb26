//! `menu` subcommand for printing menu trees.
//!
//! Renders the nested menu items as an ASCII tree, one line per item.

use anyhow::{Context, Result};

use super::{print_json, print_lines};
use crate::cms::{JustCmsApi, Menu, MenuItem};
use crate::color::ColorScheme;

/// Fetch a menu and print it as a tree.
pub(crate) async fn handle_menu_command(api: &dyn JustCmsApi, id: &str, json: bool, colors: &ColorScheme) -> Result<()> {
  let menu = api
    .get_menu_by_id(id)
    .await
    .with_context(|| format!("Failed to fetch menu `{id}`"))?;

  if json {
    return print_json(&menu);
  }

  let total = menu.walk().count();
  println!(
    "{} {}",
    colors.success("✓"),
    colors.info(format!(
      "Menu has {} {}",
      colors.number(total),
      if total == 1 { "item" } else { "items" }
    ))
  );
  print_lines(&format_menu_lines(&menu, colors));
  Ok(())
}

pub(crate) fn format_menu_lines(menu: &Menu, colors: &ColorScheme) -> Vec<String> {
  let mut lines = vec![format!("{} [id {}]", colors.emphasis(&menu.name), colors.code(&menu.id))];
  for (idx, item) in menu.items.iter().enumerate() {
    let is_last = idx + 1 == menu.items.len();
    format_item_lines(item, "", is_last, colors, &mut lines);
  }
  lines
}

fn format_item_lines(item: &MenuItem, prefix: &str, is_last: bool, colors: &ColorScheme, lines: &mut Vec<String>) {
  let connector = if is_last { "└── " } else { "├── " };
  lines.push(format!("{prefix}{connector}{}", format_item(item, colors)));

  let next_prefix = if is_last {
    format!("{prefix}    ")
  } else {
    format!("{prefix}│   ")
  };

  for (idx, child) in item.children.iter().enumerate() {
    let child_is_last = idx + 1 == item.children.len();
    format_item_lines(child, &next_prefix, child_is_last, colors, lines);
  }
}

fn format_item(item: &MenuItem, colors: &ColorScheme) -> String {
  let mut line = format!("{} {}", colors.emphasis(&item.title), colors.link(&item.url));
  if let Some(subtitle) = item.subtitle.as_deref().filter(|s| !s.is_empty()) {
    line.push_str(&format!(" - {subtitle}"));
  }
  if !item.icon.is_empty() {
    line.push_str(&format!(" {}", colors.dimmed(format!("icon {}", item.icon))));
  }
  if !item.styles.is_empty() {
    line.push_str(&format!(" {}", colors.dimmed(format!("[{}]", item.styles.join(", ")))));
  }
  line
}
