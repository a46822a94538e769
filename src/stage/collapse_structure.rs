use super::*;

/// Removes empty containers and collapses redundant whitespace.
pub(crate) struct CollapseStructureStage;

impl Stage for CollapseStructureStage {
  fn run(&mut self, context: &mut Context<'_>) {
    let fragment = context.fragment_mut();

    let removed = Self::remove_empty_elements(fragment);

    Self::merge_adjacent_text(fragment);
    Self::collapse_whitespace(fragment);

    debug!("removed {removed} empty elements");
  }
}

impl CollapseStructureStage {
  const BLOCK_ELEMENTS: &'static [&'static str] = &[
    "blockquote",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "html",
    "li",
    "ol",
    "p",
    "pre",
    "ul",
  ];

  const PRESERVED_WHITESPACE: &'static [&'static str] = &["code", "pre"];

  const REMOVABLE_WHEN_EMPTY: &'static [&'static str] = &[
    "a",
    "b",
    "blockquote",
    "div",
    "em",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "i",
    "li",
    "ol",
    "p",
    "span",
    "strong",
    "ul",
  ];

  fn collapse_whitespace(fragment: &mut Fragment) {
    let Some(root) = fragment.root() else {
      return;
    };

    let text_ids = root
      .descendants()
      .filter(|node| matches!(node.value(), Node::Text(_)))
      .map(|node| node.id())
      .collect::<Vec<NodeId>>();

    for node_id in text_ids {
      let Some(replacement) = fragment
        .html
        .tree
        .get(node_id)
        .and_then(Self::replacement_text)
      else {
        continue;
      };

      let Some(mut node) = fragment.html.tree.get_mut(node_id) else {
        continue;
      };

      if replacement.is_empty() {
        node.detach();
      } else if let Node::Text(text) = node.value() {
        text.text.clear();
        text.text.push_slice(&replacement);
      }
    }
  }

  /// Runs of ASCII whitespace become a single space.
  fn collapse_runs(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut last_was_space = false;

    for ch in text.chars() {
      if ch.is_ascii_whitespace() {
        if !last_was_space {
          collapsed.push(' ');
          last_was_space = true;
        }
      } else {
        collapsed.push(ch);
        last_was_space = false;
      }
    }

    collapsed
  }

  fn ends_line(node: NodeRef<'_, Node>) -> bool {
    match node.next_sibling() {
      Some(next) => Self::is_line_break(next),
      None => node.parent().is_none_or(Self::is_block),
    }
  }

  fn is_block(node: NodeRef<'_, Node>) -> bool {
    tag_name(&node).is_some_and(|tag| Self::BLOCK_ELEMENTS.contains(&tag))
  }

  /// Empty means no children besides whitespace text, comments and `<br>`.
  fn is_empty(node: NodeRef<'_, Node>) -> bool {
    node.children().all(|child| {
      is_whitespace_text(&child)
        || match child.value() {
          Node::Comment(_) => true,
          Node::Element(element) => element.name() == "br",
          _ => false,
        }
    })
  }

  fn is_line_break(node: NodeRef<'_, Node>) -> bool {
    Self::is_block(node) || tag_name(&node) == Some("br")
  }

  fn is_preformatted(node: NodeRef<'_, Node>) -> bool {
    node.ancestors().any(|ancestor| {
      tag_name(&ancestor)
        .is_some_and(|tag| Self::PRESERVED_WHITESPACE.contains(&tag))
    })
  }

  /// Folds each text node into its preceding text sibling. Removing elements
  /// leaves such pairs behind, and they would merge on the next parse anyway.
  fn merge_adjacent_text(fragment: &mut Fragment) {
    let Some(root) = fragment.root() else {
      return;
    };

    let merge_ids = root
      .descendants()
      .filter(|node| {
        matches!(node.value(), Node::Text(_))
          && node
            .prev_sibling()
            .is_some_and(|prev| matches!(prev.value(), Node::Text(_)))
      })
      .map(|node| node.id())
      .collect::<Vec<NodeId>>();

    for node_id in merge_ids {
      let Some(node) = fragment.html.tree.get(node_id) else {
        continue;
      };

      let (Some(prev), Node::Text(text)) = (node.prev_sibling(), node.value())
      else {
        continue;
      };

      let (prev_id, text) = (prev.id(), text.to_string());

      if let Some(mut prev) = fragment.html.tree.get_mut(prev_id)
        && let Node::Text(prev_text) = prev.value()
      {
        prev_text.text.push_slice(&text);
      }

      if let Some(mut node) = fragment.html.tree.get_mut(node_id) {
        node.detach();
      }
    }
  }

  /// Detaches removable elements whose content is empty. Children are visited
  /// before their parents, so emptiness propagates upwards in one pass.
  fn remove_empty_elements(fragment: &mut Fragment) -> usize {
    let mut removed = 0;

    for node_id in fragment.element_ids().into_iter().rev() {
      let Some(node) = fragment.html.tree.get(node_id) else {
        continue;
      };

      let removable = tag_name(&node)
        .is_some_and(|tag| Self::REMOVABLE_WHEN_EMPTY.contains(&tag))
        && Self::is_empty(node);

      if removable && let Some(mut node) = fragment.html.tree.get_mut(node_id) {
        trace!("removing empty element");
        node.detach();
        removed += 1;
      }
    }

    removed
  }

  /// Computes the new content of a text node. `None` leaves it untouched and
  /// an empty string removes it.
  fn replacement_text(node: NodeRef<'_, Node>) -> Option<String> {
    let Node::Text(text) = node.value() else {
      return None;
    };

    let original: &str = text;

    let replacement = if Self::is_preformatted(node) {
      Self::guard_leading_pre_newline(node, original)
    } else {
      let mut collapsed = Self::collapse_runs(original);

      if Self::ends_line(node) {
        collapsed.truncate(collapsed.trim_end_matches(' ').len());
      }

      if Self::starts_line(node) {
        collapsed = collapsed.trim_start_matches(' ').to_string();
      }

      collapsed
    };

    (replacement != original).then_some(replacement)
  }

  fn starts_line(node: NodeRef<'_, Node>) -> bool {
    match node.prev_sibling() {
      Some(prev) => Self::is_line_break(prev),
      None => node.parent().is_none_or(Self::is_block),
    }
  }

  /// The parser drops one newline right after `<pre>`, and the serializer
  /// does not write it back. A leading newline that is content gets a second
  /// one in front so it survives the next parse.
  fn guard_leading_pre_newline(node: NodeRef<'_, Node>, text: &str) -> String {
    let opens_pre = node.prev_sibling().is_none()
      && node.parent().is_some_and(|parent| tag_name(&parent) == Some("pre"));

    if opens_pre && text.starts_with('\n') {
      format!("\n{text}")
    } else {
      text.to_string()
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn removes_empty_paragraphs_divs_and_spans() {
    assert_eq!(collapse_structure("<p></p><div>  </div><span>\n</span>"), "");
  }

  #[test]
  fn removes_containers_left_empty_by_their_children() {
    assert_eq!(
      collapse_structure("<p><strong> </strong><em></em></p><p>kept</p>"),
      "<p>kept</p>"
    );
  }

  #[test]
  fn removes_line_break_only_paragraphs() {
    assert_eq!(collapse_structure("<p><br></p><p>a<br>b</p>"), "<p>a<br>b</p>");
  }

  #[test]
  fn removes_empty_headings() {
    assert_eq!(
      collapse_structure("<h2>  </h2><h2>Real</h2>"),
      "<h2>Real</h2>"
    );
  }

  #[test]
  fn keeps_elements_with_media() {
    let html = r#"<p><img src="a.png"></p>"#;

    assert_eq!(collapse_structure(html), html);
  }

  #[test]
  fn collapses_whitespace_runs() {
    assert_eq!(
      collapse_structure("<p>one   two\n\n\nthree</p>"),
      "<p>one two three</p>"
    );
  }

  #[test]
  fn trims_whitespace_at_line_boundaries() {
    assert_eq!(
      collapse_structure("\n\n<p>  lead  </p>\n\n  <p>a <br>  b</p>\n"),
      "<p>lead</p><p>a<br>b</p>"
    );
  }

  #[test]
  fn keeps_spaces_between_inline_elements() {
    let html = "<p><strong>bold</strong> <em>italic</em> text</p>";

    assert_eq!(collapse_structure(html), html);
  }

  #[test]
  fn merges_text_split_by_removed_elements() {
    assert_eq!(
      collapse_structure("<p>left  <span></span>  right</p>"),
      "<p>left right</p>"
    );
  }

  #[test]
  fn preserves_preformatted_text() {
    assert_eq!(
      collapse_structure("<pre>fn main() {\n    run();\n}</pre>"),
      "<pre>fn main() {\n    run();\n}</pre>"
    );

    assert_eq!(
      collapse_structure("<p>call <code>a  b</code></p>"),
      "<p>call <code>a  b</code></p>"
    );
  }

  #[test]
  fn non_breaking_spaces_are_content() {
    assert_eq!(
      collapse_structure("<p>a&nbsp;&nbsp;b</p>"),
      "<p>a&nbsp;&nbsp;b</p>"
    );

    assert_eq!(collapse_structure("<p>&nbsp;</p>"), "");
  }

  #[test]
  fn keeps_blank_lines_at_the_start_of_preformatted_text() {
    let html = "<pre>\n\n\nfirst\n</pre>";

    let once = collapse_structure(html);

    assert_eq!(once, html);
    assert_eq!(collapse_structure(&once), once);

    assert_eq!(
      Fragment::parse(&once).text(),
      Fragment::parse(html).text()
    );
  }

  #[test]
  fn single_newline_after_pre_is_markup() {
    assert_eq!(collapse_structure("<pre>\nfirst</pre>"), "<pre>first</pre>");
  }
}
