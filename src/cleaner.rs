use {super::*, serde_json::Value};

/// Cleans article markup with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
  options: CleanerOptions,
}

impl Cleaner {
  /// Runs the stage pipeline over one parsed tree and serializes it once.
  #[must_use]
  pub fn clean(&self, raw: &str) -> String {
    let mut fragment = Fragment::parse(raw);

    Pipeline::with_default_stages(Context::new(&mut fragment, &self.options))
      .run();

    let cleaned = fragment.to_markup();

    debug!(
      "cleaned {} characters into {}",
      raw.chars().count(),
      cleaned.chars().count()
    );

    cleaned
  }

  /// Cleans an untyped editor payload. Anything but a JSON string yields an
  /// empty string.
  #[must_use]
  pub fn clean_value(&self, value: &Value) -> String {
    match value {
      Value::String(raw) => self.clean(raw),
      other => {
        debug!("refusing to clean non-string payload: {other}");
        String::new()
      }
    }
  }

  #[must_use]
  pub fn collapse_structure(&self, html: &str) -> String {
    self.apply(CollapseStructureStage, html)
  }

  pub fn new(options: CleanerOptions) -> Result<Self> {
    if options.default_image_alt.trim().is_empty() {
      return Err(Error::InvalidOption {
        name: "default_image_alt",
        reason: "images need a non-empty fallback alt text".into(),
      });
    }

    Ok(Self { options })
  }

  #[must_use]
  pub fn normalize_headings(&self, html: &str) -> String {
    self.apply(NormalizeHeadingsStage, html)
  }

  #[must_use]
  pub fn normalize_links_and_images(&self, html: &str) -> String {
    self.apply(NormalizeLinksAndImagesStage, html)
  }

  #[must_use]
  pub fn options(&self) -> &CleanerOptions {
    &self.options
  }

  #[must_use]
  pub fn preview(&self, raw: &str) -> PreviewResult {
    PreviewResult::new(raw, self.clean(raw), &self.options)
  }

  #[must_use]
  pub fn sanitize(&self, raw: &str) -> String {
    self.apply(SanitizeStage, raw)
  }

  #[must_use]
  pub fn validate(&self, cleaned: &str) -> ValidationResult {
    validation::validate_with(cleaned, &self.options)
  }

  fn apply(&self, stage: impl Stage + 'static, markup: &str) -> String {
    let mut fragment = Fragment::parse(markup);

    let mut pipeline =
      Pipeline::new(Context::new(&mut fragment, &self.options));

    pipeline.add_stage(Box::new(stage));
    pipeline.run();

    fragment.to_markup()
  }
}

/// Sanitizes, normalizes and collapses `raw` with the default options.
#[must_use]
pub fn clean(raw: &str) -> String {
  Cleaner::default().clean(raw)
}

#[must_use]
pub fn clean_value(value: &Value) -> String {
  Cleaner::default().clean_value(value)
}

#[must_use]
pub fn collapse_structure(html: &str) -> String {
  Cleaner::default().collapse_structure(html)
}

#[must_use]
pub fn normalize_headings(html: &str) -> String {
  Cleaner::default().normalize_headings(html)
}

#[must_use]
pub fn normalize_links_and_images(html: &str) -> String {
  Cleaner::default().normalize_links_and_images(html)
}

#[must_use]
pub fn preview(raw: &str) -> PreviewResult {
  Cleaner::default().preview(raw)
}

#[must_use]
pub fn sanitize(raw: &str) -> String {
  Cleaner::default().sanitize(raw)
}
