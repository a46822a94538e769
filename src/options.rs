#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerOptions {
  /// Visible text shorter than this many characters triggers a warning.
  pub min_text_length: usize,
  /// Value written to `alt` on images that have none.
  pub default_image_alt: String,
}

impl Default for CleanerOptions {
  fn default() -> Self {
    Self {
      min_text_length: 100,
      default_image_alt: "image".to_string(),
    }
  }
}

impl CleanerOptions {
  #[must_use]
  pub fn builder() -> CleanerOptionsBuilder {
    CleanerOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct CleanerOptionsBuilder {
  inner: CleanerOptions,
}

impl CleanerOptionsBuilder {
  #[must_use]
  pub fn build(self) -> CleanerOptions {
    self.inner
  }

  #[must_use]
  pub fn default_image_alt(self, default_image_alt: impl Into<String>) -> Self {
    Self {
      inner: CleanerOptions {
        default_image_alt: default_image_alt.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn min_text_length(self, min_text_length: usize) -> Self {
    Self {
      inner: CleanerOptions {
        min_text_length,
        ..self.inner
      },
    }
  }
}
