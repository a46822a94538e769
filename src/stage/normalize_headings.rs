use super::*;

/// Keeps the first `<h1>` in document order and demotes the rest to `<h2>`.
///
/// The article title is rendered from the first heading, so any later `<h1>`
/// pasted into the body would compete with it for SEO.
pub(crate) struct NormalizeHeadingsStage;

impl Stage for NormalizeHeadingsStage {
  fn run(&mut self, context: &mut Context<'_>) {
    let fragment = context.fragment_mut();

    let headings = fragment.elements_named("h1");

    headings.iter().fold(false, |seen, &heading_id| {
      if seen {
        Self::demote(fragment, heading_id);
      } else {
        Self::trim(fragment, heading_id);
      }

      true
    });

    debug!("demoted {} headings", headings.len().saturating_sub(1));
  }
}

impl NormalizeHeadingsStage {
  fn demote(fragment: &mut Fragment, heading_id: NodeId) {
    let Some(mut node) = fragment.html.tree.get_mut(heading_id) else {
      return;
    };

    if let Node::Element(element) = node.value() {
      element.name.local = LocalName::from("h2");
    }
  }

  fn trim(fragment: &mut Fragment, heading_id: NodeId) {
    let Some(mut heading) = fragment.html.tree.get_mut(heading_id) else {
      return;
    };

    if let Some(mut child) = heading.first_child() {
      Self::trim_text(&mut child, str::trim_start);
    }

    if let Some(mut child) = heading.last_child() {
      Self::trim_text(&mut child, str::trim_end);
    }
  }

  fn trim_text(node: &mut NodeMut<'_, Node>, trim: fn(&str) -> &str) {
    let trimmed = match node.value() {
      Node::Text(text) => trim(&text.text).to_string(),
      _ => return,
    };

    if trimmed.is_empty() {
      node.detach();
    } else if let Node::Text(text) = node.value()
      && *text.text != *trimmed
    {
      text.text.clear();
      text.text.push_slice(&trimmed);
    }
  }
}
