//! Data transfer objects returned by the JustCMS public API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub name: String,
  /// Unique within a project.
  pub slug: String,
}

/// Wrapper returned by the project root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
  pub categories: Vec<Category>,
}

/// One rendition of a source image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
  pub url: String,
  pub width: u32,
  pub height: u32,
  pub filename: String,
}

/// An image and its renditions.
///
/// By convention the first variant is the thumbnail and the second the large
/// rendition. The API does not guarantee this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
  #[serde(default)]
  pub alt: String,
  pub variants: Vec<ImageVariant>,
}

/// Lightweight page representation used in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
  pub title: String,
  #[serde(default)]
  pub subtitle: String,
  pub cover_image: Option<Image>,
  pub slug: String,
  #[serde(default)]
  pub categories: Vec<Category>,
  /// ISO-8601 timestamp as sent by the API.
  pub created_at: String,
  pub updated_at: String,
}

/// Response of the pages listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagesResponse {
  pub items: Vec<PageSummary>,
  /// Count of all matching pages, ignoring `start`/`offset`.
  pub total: u64,
}

/// SEO metadata attached to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
}

/// Full page including body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDetail {
  #[serde(flatten)]
  pub summary: PageSummary,
  #[serde(default)]
  pub meta: PageMeta,
  #[serde(default)]
  pub content: Vec<ContentBlock>,
}

impl PageDetail {
  pub fn title(&self) -> &str {
    &self.summary.title
  }

  pub fn slug(&self) -> &str {
    &self.summary.slug
  }

  /// Blocks of the given `type` tag, in document order.
  pub fn blocks_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a ContentBlock> + 'a {
    self.content.iter().filter(move |block| block.kind() == kind)
  }
}

/// One unit of structured page content, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
  Header(HeaderBlock),
  List(ListBlock),
  Embed(EmbedBlock),
  Image(ImageBlock),
  Code(CodeBlock),
  Text(TextBlock),
  Cta(CtaBlock),
  Custom(CustomBlock),
}

impl ContentBlock {
  /// The wire `type` tag of this block.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Header(_) => "header",
      Self::List(_) => "list",
      Self::Embed(_) => "embed",
      Self::Image(_) => "image",
      Self::Code(_) => "code",
      Self::Text(_) => "text",
      Self::Cta(_) => "cta",
      Self::Custom(_) => "custom",
    }
  }

  /// Style markers applied in the CMS editor.
  pub fn styles(&self) -> &[String] {
    match self {
      Self::Header(block) => &block.styles,
      Self::List(block) => &block.styles,
      Self::Embed(block) => &block.styles,
      Self::Image(block) => &block.styles,
      Self::Code(block) => &block.styles,
      Self::Text(block) => &block.styles,
      Self::Cta(block) => &block.styles,
      Self::Custom(block) => &block.styles,
    }
  }

  pub fn as_image(&self) -> Option<&ImageBlock> {
    match self {
      Self::Image(block) => Some(block),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  pub header: String,
  pub subheader: Option<String>,
  /// Heading level as authored, e.g. `"h2"`.
  #[serde(default)]
  pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  pub options: Vec<ListOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOption {
  pub title: String,
  pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  pub text: String,
}

/// Call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  pub text: String,
  pub url: String,
  pub description: Option<String>,
}

/// Project-defined block. Fields beyond `blockId` are kept in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBlock {
  #[serde(default)]
  pub styles: Vec<String>,
  #[serde(rename = "blockId")]
  pub block_id: String,
  #[serde(flatten)]
  pub fields: Map<String, Value>,
}

impl CustomBlock {
  pub fn field(&self, name: &str) -> Option<&Value> {
    self.fields.get(name)
  }
}

/// Navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub items: Vec<MenuItem>,
}

impl Menu {
  /// Depth-first, pre-order walk over every item with its depth (roots at 0).
  pub fn walk(&self) -> MenuWalk<'_> {
    MenuWalk {
      stack: self.items.iter().rev().map(|item| (0, item)).collect(),
    }
  }
}

/// Iterator returned by [`Menu::walk`].
pub struct MenuWalk<'a> {
  stack: Vec<(usize, &'a MenuItem)>,
}

impl<'a> Iterator for MenuWalk<'a> {
  type Item = (usize, &'a MenuItem);

  fn next(&mut self) -> Option<Self::Item> {
    let (depth, item) = self.stack.pop()?;
    self
      .stack
      .extend(item.children.iter().rev().map(|child| (depth + 1, child)));
    Some((depth, item))
  }
}

/// Menu entry; entries nest without a depth limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
  pub title: String,
  pub subtitle: Option<String>,
  #[serde(default)]
  pub icon: String,
  pub url: String,
  #[serde(default)]
  pub styles: Vec<String>,
  #[serde(default)]
  pub children: Vec<MenuItem>,
}

/// Named collection of typed key/value items (site settings, footers, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub items: Vec<LayoutItem>,
}

impl Layout {
  /// Item with the given `uid`, if present.
  pub fn item(&self, uid: &str) -> Option<&LayoutItem> {
    self.items.iter().find(|item| item.uid == uid)
  }
}

/// A layout entry. The wire `type` and `value` fields are fused into
/// [`LayoutValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLayoutItem", into = "RawLayoutItem")]
pub struct LayoutItem {
  pub label: String,
  pub description: Option<String>,
  pub uid: String,
  pub value: LayoutValue,
}

/// Value of a [`LayoutItem`], typed by the item's declared `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutValue {
  Text(String),
  Html(String),
  Boolean(bool),
  Svg(String),
  /// A `type` this client does not know yet.
  Other { kind: String, value: Value },
}

impl LayoutValue {
  pub fn kind(&self) -> &str {
    match self {
      Self::Text(_) => "text",
      Self::Html(_) => "html",
      Self::Boolean(_) => "boolean",
      Self::Svg(_) => "svg",
      Self::Other { kind, .. } => kind,
    }
  }

  /// String payload for `text`, `html` and `svg` items.
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::Text(s) | Self::Html(s) | Self::Svg(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Boolean(b) => Some(*b),
      _ => None,
    }
  }
}

#[derive(Serialize, Deserialize)]
struct RawLayoutItem {
  label: String,
  #[serde(default)]
  description: Option<String>,
  uid: String,
  #[serde(rename = "type")]
  kind: String,
  value: Value,
}

impl TryFrom<RawLayoutItem> for LayoutItem {
  type Error = String;

  fn try_from(raw: RawLayoutItem) -> Result<Self, Self::Error> {
    let mismatch = |expected: &str| format!("layout item `{}` of type `{}` expects a {expected} value", raw.uid, raw.kind);

    let value = match (raw.kind.as_str(), &raw.value) {
      ("text", Value::String(s)) => LayoutValue::Text(s.clone()),
      ("html", Value::String(s)) => LayoutValue::Html(s.clone()),
      ("svg", Value::String(s)) => LayoutValue::Svg(s.clone()),
      ("boolean", Value::Bool(b)) => LayoutValue::Boolean(*b),
      ("text" | "html" | "svg", _) => return Err(mismatch("string")),
      ("boolean", _) => return Err(mismatch("boolean")),
      (other, value) => LayoutValue::Other {
        kind: other.to_string(),
        value: value.clone(),
      },
    };

    Ok(Self {
      label: raw.label,
      description: raw.description,
      uid: raw.uid,
      value,
    })
  }
}

impl From<LayoutItem> for RawLayoutItem {
  fn from(item: LayoutItem) -> Self {
    let (kind, value) = match item.value {
      LayoutValue::Text(s) => ("text".to_string(), Value::String(s)),
      LayoutValue::Html(s) => ("html".to_string(), Value::String(s)),
      LayoutValue::Svg(s) => ("svg".to_string(), Value::String(s)),
      LayoutValue::Boolean(b) => ("boolean".to_string(), Value::Bool(b)),
      LayoutValue::Other { kind, value } => (kind, value),
    };

    Self {
      label: item.label,
      description: item.description,
      uid: item.uid,
      kind,
      value,
    }
  }
}
