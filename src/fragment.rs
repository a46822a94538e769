use super::*;

/// A parsed HTML fragment whose top-level nodes are the children of
/// `root_id`.
#[derive(Debug)]
pub(crate) struct Fragment {
  pub(crate) html: Html,
  pub(crate) root_id: NodeId,
}

impl Fragment {
  /// Number of elements named `tag` anywhere in the fragment.
  pub(crate) fn count_elements(&self, tag: &str) -> usize {
    self
      .root()
      .map(|root| {
        root
          .descendants()
          .filter(|node| {
            matches!(
              node.value(),
              Node::Element(element) if element.name() == tag
            )
          })
          .count()
      })
      .unwrap_or_default()
  }

  /// Ids of every element below the root, in document order.
  pub(crate) fn element_ids(&self) -> Vec<NodeId> {
    self
      .root()
      .map(|root| {
        root
          .descendants()
          .skip(1)
          .filter(|node| matches!(node.value(), Node::Element(_)))
          .map(|node| node.id())
          .collect()
      })
      .unwrap_or_default()
  }

  /// Ids of the elements named `tag`, in document order.
  pub(crate) fn elements_named(&self, tag: &str) -> Vec<NodeId> {
    self
      .element_ids()
      .into_iter()
      .filter(|id| {
        self.html.tree.get(*id).is_some_and(|node| {
          matches!(
            node.value(),
            Node::Element(element) if element.name() == tag
          )
        })
      })
      .collect()
  }

  pub(crate) fn parse(markup: &str) -> Self {
    let html = Html::parse_fragment(markup);

    let root_id = html.root_element().id();

    Self { html, root_id }
  }

  pub(crate) fn root(&self) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(self.root_id)
  }

  pub(crate) fn to_markup(&self) -> String {
    self
      .root()
      .and_then(ElementRef::wrap)
      .map(|root| root.inner_html())
      .unwrap_or_default()
  }

  /// Concatenated text of every text node in the fragment.
  pub(crate) fn text(&self) -> String {
    self
      .root()
      .map(|root| {
        root
          .descendants()
          .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
          })
          .collect()
      })
      .unwrap_or_default()
  }
}
