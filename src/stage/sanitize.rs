use super::*;

/// Enforces the allowlist on a parsed fragment.
///
/// Elements outside [`allowlist::ALLOWED_TAGS`] are detached together with
/// their whole subtree, so nested or oddly-cased `<script>`, `<iframe>`,
/// `<object>` and `<embed>` never survive. Comments and doctypes go the same
/// way. Surviving elements keep only the attributes the allowlist grants their
/// tag, and `href`/`src` only when the URL scheme is permitted.
pub(crate) struct SanitizeStage;

impl Stage for SanitizeStage {
  fn run(&mut self, context: &mut Context<'_>) {
    let fragment = context.fragment_mut();

    let removed_nodes = Self::remove_disallowed_nodes(fragment);
    let removed_attributes = Self::strip_attributes(fragment);

    debug!(
      "sanitizer dropped {removed_nodes} nodes and {removed_attributes} attributes"
    );
  }
}

impl SanitizeStage {
  fn is_disallowed(node: &NodeRef<'_, Node>) -> bool {
    match node.value() {
      Node::Element(element) => !allowlist::is_allowed_tag(element.name()),
      Node::Text(_) => false,
      _ => true,
    }
  }

  /// Walks the fragment in document order without descending into subtrees
  /// that are already scheduled for removal.
  fn remove_disallowed_nodes(fragment: &mut Fragment) -> usize {
    let Some(root) = fragment.root() else {
      return 0;
    };

    let mut to_remove = Vec::new();

    let mut stack = root.children().rev().collect::<Vec<_>>();

    while let Some(node) = stack.pop() {
      if Self::is_disallowed(&node) {
        if let Some(tag) = tag_name(&node) {
          trace!("dropping <{tag}> subtree");
        }

        to_remove.push(node.id());
        continue;
      }

      stack.extend(node.children().rev());
    }

    for id in &to_remove {
      if let Some(mut node) = fragment.html.tree.get_mut(*id) {
        node.detach();
      }
    }

    to_remove.len()
  }

  fn strip_attributes(fragment: &mut Fragment) -> usize {
    let mut removed = 0;

    for node_id in fragment.element_ids() {
      let Some(mut node) = fragment.html.tree.get_mut(node_id) else {
        continue;
      };

      let Node::Element(element) = node.value() else {
        continue;
      };

      let tag = element.name().to_string();

      let before = element.attrs.len();

      element.attrs.retain(|(name, value)| {
        allowlist::is_allowed_attribute(&tag, name.local.as_ref(), value)
      });

      removed += before - element.attrs.len();
    }

    removed
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn removes_script_iframe_object_and_embed() {
    assert_eq!(
      sanitize(concat!(
        "<p>Intro</p>",
        "<script>alert(1)</script>",
        "<iframe src=\"https://evil.example\"></iframe>",
        "<object data=\"movie.swf\"><embed src=\"movie.swf\"></object>",
        "<embed src=\"clip.swf\">",
        "<p>Outro</p>",
      )),
      "<p>Intro</p><p>Outro</p>"
    );
  }

  #[test]
  fn removes_nested_and_uppercase_danger_tags() {
    let cleaned = sanitize(
      "<BLOCKQUOTE><p>quote<SCRIPT>steal()</SCRIPT></p></BLOCKQUOTE>",
    );

    assert_eq!(cleaned, "<blockquote><p>quote</p></blockquote>");
  }

  #[test]
  fn drops_disallowed_elements_with_their_subtree() {
    assert_eq!(
      sanitize("<p>keep</p><div><p>inside div</p></div><table><tr><td>cell</td></tr></table>"),
      "<p>keep</p>"
    );
  }

  #[test]
  fn drops_comments() {
    assert_eq!(sanitize("<p>a<!-- secret --></p>"), "<p>a</p>");
  }

  #[test]
  fn strips_attributes_outside_the_map() {
    assert_eq!(
      sanitize(
        r#"<p class="lead" style="color:red" onclick="x()">Hi <a href="/about" title="t" onmouseover="y()">about</a></p>"#
      ),
      r#"<p>Hi <a href="/about">about</a></p>"#
    );
  }

  #[test]
  fn keeps_image_dimensions_and_alt() {
    assert_eq!(
      sanitize(
        r#"<img src="https://cdn.example/cover.png" alt="Cover" width="640" height="480" loading="lazy" onerror="x()">"#
      ),
      r#"<img alt="Cover" height="480" src="https://cdn.example/cover.png" width="640">"#
    );
  }

  #[test]
  fn drops_unsafe_url_schemes() {
    assert_eq!(
      sanitize(r#"<a href="javascript:alert(1)">click</a>"#),
      "<a>click</a>"
    );

    assert_eq!(
      sanitize(r#"<img src="javascript:alert(1)" alt="x">"#),
      r#"<img alt="x">"#
    );
  }

  #[test]
  fn scheme_check_depends_on_attribute() {
    assert_eq!(
      sanitize(r#"<a href="mailto:desk@example.com">mail</a>"#),
      r#"<a href="mailto:desk@example.com">mail</a>"#
    );

    assert_eq!(sanitize(r#"<img src="mailto:desk@example.com">"#), "<img>");
  }

  #[test]
  fn plain_text_passes_through_escaped() {
    assert_eq!(sanitize("5 < 6 & 7 > 3"), "5 &lt; 6 &amp; 7 &gt; 3");
  }

  #[test]
  fn malformed_markup_degrades_without_panicking() {
    assert_eq!(sanitize("<p>open <strong>bold"), "<p>open <strong>bold</strong></p>");
    assert_eq!(sanitize("<scr<script>ipt>alert(1)</script>"), "");
  }
}
