use super::*;

mod collapse_structure;
mod normalize_headings;
mod normalize_links_and_images;
mod sanitize;

pub(crate) use {
  collapse_structure::CollapseStructureStage,
  normalize_headings::NormalizeHeadingsStage,
  normalize_links_and_images::NormalizeLinksAndImagesStage,
  sanitize::SanitizeStage,
};

pub(crate) trait Stage {
  fn name(&self) -> &'static str {
    std::any::type_name::<Self>()
  }

  fn run(&mut self, context: &mut Context<'_>);
}

/// Text nodes holding nothing but whitespace.
pub(crate) fn is_whitespace_text(node: &NodeRef<'_, Node>) -> bool {
  matches!(node.value(), Node::Text(text) if text.trim().is_empty())
}

/// Returns the tag name when `node` is an element.
pub(crate) fn tag_name<'a>(node: &NodeRef<'a, Node>) -> Option<&'a str> {
  match node.value() {
    Node::Element(element) => Some(element.name()),
    _ => None,
  }
}
