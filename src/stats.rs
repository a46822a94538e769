use super::*;

/// Executable elements found in the original markup.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct RemovedElements {
  pub scripts: usize,
  pub iframes: usize,
  pub objects: usize,
  pub embeds: usize,
  pub total: usize,
}

impl RemovedElements {
  /// Counts occurrences in the raw string, independently of what the
  /// sanitizer ended up doing with them.
  #[must_use]
  pub fn count(original: &str) -> Self {
    let scripts = re::SCRIPT_ELEMENT.find_iter(original).count();
    let iframes = re::IFRAME_ELEMENT.find_iter(original).count();
    let objects = re::OBJECT_ELEMENT.find_iter(original).count();
    let embeds = re::EMBED_ELEMENT.find_iter(original).count();

    Self {
      scripts,
      iframes,
      objects,
      embeds,
      total: scripts + iframes + objects + embeds,
    }
  }
}

/// Summary of what cleaning did to a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningStats {
  pub original_length: usize,
  pub cleaned_length: usize,
  /// Negative when normalization added more than sanitization removed.
  pub reduction: i64,
  pub reduction_percentage: i64,
  pub h1_converted: usize,
  pub removed_elements: RemovedElements,
}

#[must_use]
pub fn compute_stats(original: &str, cleaned: &str) -> CleaningStats {
  let original_length = original.chars().count();
  let cleaned_length = cleaned.chars().count();

  let reduction = original_length as i64 - cleaned_length as i64;

  let reduction_percentage = if original_length == 0 {
    0
  } else {
    (reduction as f64 / original_length as f64 * 100.0).round() as i64
  };

  let h1_converted = Fragment::parse(original)
    .count_elements("h1")
    .saturating_sub(Fragment::parse(cleaned).count_elements("h1"));

  CleaningStats {
    original_length,
    cleaned_length,
    reduction,
    reduction_percentage,
    h1_converted,
    removed_elements: RemovedElements::count(original),
  }
}
