use super::*;

macro_rules! paired_element {
  ($tag:literal) => {
    LazyLock::new(|| {
      Regex::new(concat!(r"(?is)<", $tag, r"\b[^>]*>.*?</", $tag, r"\s*>"))
        .unwrap()
    })
  };
}

pub(crate) static EMBED_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?is)<embed\b[^>]*>(?:\s*</embed\s*>)?").unwrap()
});

pub(crate) static IFRAME_ELEMENT: LazyLock<Regex> = paired_element!("iframe");

pub(crate) static OBJECT_ELEMENT: LazyLock<Regex> = paired_element!("object");

pub(crate) static SCRIPT_ELEMENT: LazyLock<Regex> = paired_element!("script");

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());
