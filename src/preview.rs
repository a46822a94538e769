use super::*;

/// Before/after report for the authoring UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
  pub original_content: String,
  pub cleaned_content: String,
  pub stats: CleaningStats,
  pub validation: ValidationResult,
  pub has_changes: bool,
}

impl PreviewResult {
  pub(crate) fn new(
    original: &str,
    cleaned: String,
    options: &CleanerOptions,
  ) -> Self {
    Self {
      stats: compute_stats(original, &cleaned),
      validation: validation::validate_with(&cleaned, options),
      has_changes: original != cleaned,
      original_content: original.to_string(),
      cleaned_content: cleaned,
    }
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unchanged_content_has_no_changes() {
    let html = "<h1>Title</h1><p>Body</p>";

    let preview = PreviewResult::new(
      html,
      html.to_string(),
      &CleanerOptions::default(),
    );

    assert!(!preview.has_changes);
    assert_eq!(preview.stats.reduction, 0);
  }

  #[test]
  fn json_uses_camel_case_keys() {
    let preview =
      PreviewResult::new("<p>x</p>", String::new(), &CleanerOptions::default());

    let value: serde_json::Value =
      serde_json::from_str(&preview.to_json().unwrap()).unwrap();

    assert_eq!(value["originalContent"], "<p>x</p>");
    assert_eq!(value["cleanedContent"], "");
    assert_eq!(value["hasChanges"], true);
    assert_eq!(value["validation"]["isValid"], false);
  }
}
