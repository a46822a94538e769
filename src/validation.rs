use {super::*, std::fmt::{self, Display, Formatter}};

/// A problem that blocks publishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Issue {
  EmptyContent,
  MultipleH1 { count: usize },
}

impl Display for Issue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyContent => write!(f, "content is empty after cleaning"),
      Self::MultipleH1 { count } => {
        write!(f, "content has {count} h1 headings, expected at most one")
      }
    }
  }
}

/// An advisory that the caller may choose to ignore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
  MissingAltText { count: usize },
  MissingH1,
  ShortContent { length: usize, minimum: usize },
}

impl Display for Warning {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingAltText { count } => {
        write!(f, "{count} image(s) without alt text")
      }
      Self::MissingH1 => write!(f, "content has no h1 heading"),
      Self::ShortContent { length, minimum } => write!(
        f,
        "content is short: {length} characters of text, at least {minimum} recommended"
      ),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
  pub is_valid: bool,
  pub issues: Vec<Issue>,
  pub warnings: Vec<Warning>,
}

impl ValidationResult {
  pub(crate) fn new(issues: Vec<Issue>, warnings: Vec<Warning>) -> Self {
    Self {
      is_valid: issues.is_empty(),
      issues,
      warnings,
    }
  }
}

/// Validates cleaned content with the default options.
#[must_use]
pub fn validate(cleaned: &str) -> ValidationResult {
  validate_with(cleaned, &CleanerOptions::default())
}

/// The heading count and alt coverage are re-checked here even though the
/// normalizers guarantee them; a failure points at a normalizer bug.
pub(crate) fn validate_with(
  cleaned: &str,
  options: &CleanerOptions,
) -> ValidationResult {
  let fragment = Fragment::parse(cleaned);

  let (mut issues, mut warnings) = (Vec::new(), Vec::new());

  if cleaned.trim().is_empty() {
    issues.push(Issue::EmptyContent);
  }

  match fragment.count_elements("h1") {
    0 => warnings.push(Warning::MissingH1),
    1 => {}
    count => issues.push(Issue::MultipleH1 { count }),
  }

  let length = visible_text_length(&fragment);

  if length < options.min_text_length {
    warnings.push(Warning::ShortContent {
      length,
      minimum: options.min_text_length,
    });
  }

  let missing_alt = fragment
    .elements_named("img")
    .into_iter()
    .filter_map(|id| fragment.html.tree.get(id))
    .filter(|node| {
      matches!(
        node.value(),
        Node::Element(element)
          if element.attr("alt").is_none_or(|alt| alt.trim().is_empty())
      )
    })
    .count();

  if missing_alt > 0 {
    warnings.push(Warning::MissingAltText { count: missing_alt });
  }

  ValidationResult::new(issues, warnings)
}

fn visible_text_length(fragment: &Fragment) -> usize {
  re::WHITESPACE_RUNS
    .replace_all(&fragment.text(), " ")
    .trim()
    .chars()
    .count()
}
