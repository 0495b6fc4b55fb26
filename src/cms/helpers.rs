//! Pure helpers for working with fetched content.
//!
//! The helpers operate on small capability traits rather than concrete types,
//! so a block, a menu item or a whole page can be passed wherever it has the
//! required fields.

use super::models::{
  Category, CodeBlock, ContentBlock, CtaBlock, CustomBlock, EmbedBlock, HeaderBlock, Image, ImageBlock, ImageVariant,
  ListBlock, MenuItem, PageDetail, PageSummary, TextBlock,
};

/// Anything carrying CMS style markers.
pub trait Styled {
  fn styles(&self) -> &[String];
}

/// Anything assigned to categories.
pub trait HasCategories {
  fn categories(&self) -> &[Category];
}

macro_rules! impl_styled {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Styled for $ty {
        fn styles(&self) -> &[String] {
          &self.styles
        }
      }
    )*
  };
}

impl_styled!(
  HeaderBlock,
  ListBlock,
  EmbedBlock,
  ImageBlock,
  CodeBlock,
  TextBlock,
  CtaBlock,
  CustomBlock,
  MenuItem,
);

impl Styled for ContentBlock {
  fn styles(&self) -> &[String] {
    ContentBlock::styles(self)
  }
}

impl HasCategories for PageSummary {
  fn categories(&self) -> &[Category] {
    &self.categories
  }
}

impl HasCategories for PageDetail {
  fn categories(&self) -> &[Category] {
    &self.summary.categories
  }
}

/// Whether `block` carries `style`, ignoring case.
pub fn is_block_has_style<B: Styled + ?Sized>(block: &B, style: &str) -> bool {
  let wanted = style.to_lowercase();
  block.styles().iter().any(|s| s.to_lowercase() == wanted)
}

/// The large rendition of `image`: its second variant.
///
/// This is a positional convention of the API; sizes are not inspected.
pub fn get_large_image_variant(image: &Image) -> Option<&ImageVariant> {
  image.variants.get(1)
}

/// First image of an image block.
pub fn get_first_image(block: &ImageBlock) -> Option<&Image> {
  block.images.first()
}

/// Whether `page` belongs to the category with `category_slug`.
pub fn has_category<P: HasCategories + ?Sized>(page: &P, category_slug: &str) -> bool {
  page.categories().iter().any(|category| category.slug == category_slug)
}
