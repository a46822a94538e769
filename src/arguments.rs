use super::*;

#[derive(Parser)]
#[command(name = "article-cleaner")]
#[command(about = "Sanitize and normalize article HTML", long_about = None)]
pub(crate) struct Arguments {
  #[arg(
    value_name = "FILE",
    help = "Path to the HTML file to clean, stdin when omitted"
  )]
  input: Option<PathBuf>,
  #[arg(long, help = "Print the full preview report as JSON")]
  preview: bool,
  #[arg(
    long,
    value_name = "CHARS",
    default_value_t = 100,
    help = "Visible text below this length produces a warning"
  )]
  min_text_length: usize,
  #[arg(long, value_name = "TEXT", help = "Alt text for images without one")]
  default_alt: Option<String>,
  #[arg(
    long,
    help = "Exit with status 2 when validation reports blocking issues"
  )]
  strict: bool,
}

impl Arguments {
  fn options(&self) -> CleanerOptions {
    let builder =
      CleanerOptions::builder().min_text_length(self.min_text_length);

    match &self.default_alt {
      Some(alt) => builder.default_image_alt(alt.as_str()),
      None => builder,
    }
    .build()
  }

  fn read_input(&self) -> Result<String> {
    match &self.input {
      Some(path) => fs::read_to_string(path).with_context(|| {
        format!("failed to read file from `{}`", path.display())
      }),
      None => {
        let mut html = String::new();

        io::stdin()
          .read_to_string(&mut html)
          .context("failed to read from stdin")?;

        Ok(html)
      }
    }
  }

  /// Returns the process exit code.
  pub(crate) fn run(self) -> Result<i32> {
    let html = self.read_input()?;

    let cleaner =
      Cleaner::new(self.options()).context("invalid cleaner options")?;

    let preview = cleaner.preview(&html);

    if self.preview {
      println!("{}", preview.to_json()?);
    } else {
      println!("{}", preview.cleaned_content);

      for issue in &preview.validation.issues {
        eprintln!("issue: {issue}");
      }

      for warning in &preview.validation.warnings {
        eprintln!("warning: {warning}");
      }
    }

    Ok(if self.strict && !preview.validation.is_valid {
      2
    } else {
      0
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_library_defaults() {
    let arguments = Arguments::parse_from(["article-cleaner"]);

    assert_eq!(arguments.options(), CleanerOptions::default());
    assert!(arguments.input.is_none());
  }

  #[test]
  fn overrides_options_from_flags() {
    let arguments = Arguments::parse_from([
      "article-cleaner",
      "--min-text-length",
      "20",
      "--default-alt",
      "photo",
      "--strict",
      "post.html",
    ]);

    assert_eq!(
      arguments.options(),
      CleanerOptions::builder()
        .min_text_length(20)
        .default_image_alt("photo")
        .build()
    );
    assert!(arguments.strict);
    assert_eq!(arguments.input, Some(PathBuf::from("post.html")));
  }
}
