use super::*;

/// Adds `target`/`rel` to external links and a fallback `alt` to images.
pub(crate) struct NormalizeLinksAndImagesStage;

impl Stage for NormalizeLinksAndImagesStage {
  fn run(&mut self, context: &mut Context<'_>) {
    let default_alt = context.options().default_image_alt.clone();

    let fragment = context.fragment_mut();

    let (mut links, mut images) = (0, 0);

    for node_id in fragment.element_ids() {
      let Some(mut node) = fragment.html.tree.get_mut(node_id) else {
        continue;
      };

      let Node::Element(element) = node.value() else {
        continue;
      };

      let tag = element.name().to_string();

      match tag.as_str() {
        "a" if Self::is_external_link(element) => {
          if Self::secure_link(element) {
            links += 1;
          }
        }
        "img" if Self::lacks_alt(element) => {
          Self::set_attribute(element, "alt", &default_alt);
          images += 1;
        }
        _ => {}
      }
    }

    debug!("normalized {links} external links and {images} images");
  }
}

impl NormalizeLinksAndImagesStage {
  const SAFETY_TOKENS: [&'static str; 2] = ["noopener", "noreferrer"];

  fn is_external_link(element: &Element) -> bool {
    element.attr("href").is_some_and(allowlist::is_external_url)
  }

  fn lacks_alt(element: &Element) -> bool {
    element.attr("alt").is_none_or(|alt| alt.trim().is_empty())
  }

  /// Appends whichever safety tokens `rel` is missing, or `None` when it
  /// already carries both.
  fn secured_rel(rel: Option<&str>) -> Option<String> {
    let existing = rel.unwrap_or_default();

    let missing = Self::SAFETY_TOKENS
      .into_iter()
      .filter(|token| {
        !existing
          .split_ascii_whitespace()
          .any(|present| present.eq_ignore_ascii_case(token))
      })
      .collect::<Vec<&str>>();

    if missing.is_empty() {
      return None;
    }

    Some(
      existing
        .split_ascii_whitespace()
        .chain(missing)
        .collect::<Vec<&str>>()
        .join(" "),
    )
  }

  /// Returns true when the anchor was modified.
  fn secure_link(element: &mut Element) -> bool {
    let mut changed = false;

    if element.attr("target").is_none() {
      Self::set_attribute(element, "target", "_blank");
      changed = true;
    }

    if let Some(rel) = Self::secured_rel(element.attr("rel")) {
      Self::set_attribute(element, "rel", &rel);
      changed = true;
    }

    changed
  }

  /// `attrs` stays sorted by name, the order scraper builds it in and
  /// relies on for lookups.
  fn set_attribute(element: &mut Element, name: &str, value: &str) {
    let name = QualName::new(None, Namespace::from(""), LocalName::from(name));

    match element
      .attrs
      .binary_search_by(|(attr_name, _)| attr_name.cmp(&name))
    {
      Ok(index) => element.attrs[index].1 = StrTendril::from_slice(value),
      Err(index) => element
        .attrs
        .insert(index, (name, StrTendril::from_slice(value))),
    }
  }
}
