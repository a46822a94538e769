//! Tags, attributes and URL schemes that survive sanitization.

use super::*;

pub const ALLOWED_TAGS: &[&str] = &[
  "a",
  "b",
  "blockquote",
  "br",
  "code",
  "em",
  "h1",
  "h2",
  "h3",
  "h4",
  "h5",
  "h6",
  "hr",
  "i",
  "img",
  "li",
  "ol",
  "p",
  "pre",
  "strong",
  "ul",
];

pub const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

pub const IMAGE_SCHEMES: &[&str] = &["http", "https", "data"];

/// Attributes an allowed tag may keep. Tags not listed keep none.
#[must_use]
pub fn allowed_attributes(tag: &str) -> &'static [&'static str] {
  match tag {
    "a" => &["href", "target", "rel"],
    "img" => &["src", "alt", "width", "height"],
    _ => &[],
  }
}

#[must_use]
pub fn is_allowed_tag(tag: &str) -> bool {
  ALLOWED_TAGS.contains(&tag)
}

/// Decides whether `name="value"` may stay on a `tag` element.
///
/// URL-bearing attributes are additionally checked against the scheme set of
/// their context: `href` against [`LINK_SCHEMES`], `src` against
/// [`IMAGE_SCHEMES`].
#[must_use]
pub fn is_allowed_attribute(tag: &str, name: &str, value: &str) -> bool {
  if !allowed_attributes(tag).contains(&name) {
    return false;
  }

  match name {
    "href" => is_allowed_url(value, LINK_SCHEMES),
    "src" => is_allowed_url(value, IMAGE_SCHEMES),
    _ => true,
  }
}

/// Returns true when `value` is relative or uses one of `schemes`.
///
/// `data:` URLs are only accepted when they carry an image media type.
#[must_use]
pub fn is_allowed_url(value: &str, schemes: &[&str]) -> bool {
  match Url::parse(value) {
    Ok(url) => {
      let scheme = url.scheme();

      if !schemes.contains(&scheme) {
        return false;
      }

      scheme != "data" || url.path().trim_start().starts_with("image/")
    }
    Err(url::ParseError::RelativeUrlWithoutBase) => true,
    Err(_) => false,
  }
}

/// Base that relative references resolve against when deciding whether they
/// leave the article. The `.invalid` host never names a real site.
static ARTICLE_BASE: LazyLock<Url> =
  LazyLock::new(|| Url::parse("http://article.invalid/").unwrap());

/// Returns true when following `href` leaves the article over `http` or
/// `https`.
///
/// Parsing matches [`is_allowed_url`] and browsers: tabs, newlines and leading
/// control characters are ignored and schemes are case-insensitive.
/// Protocol-relative references such as `//host/path` count as external.
#[must_use]
pub fn is_external_url(href: &str) -> bool {
  match Url::parse(href) {
    Ok(url) => matches!(url.scheme(), "http" | "https"),
    Err(url::ParseError::RelativeUrlWithoutBase) => ARTICLE_BASE
      .join(href)
      .is_ok_and(|url| url.host_str() != ARTICLE_BASE.host_str()),
    Err(_) => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_listed_attributes_only() {
    assert!(is_allowed_attribute("a", "href", "https://example.com"));
    assert!(is_allowed_attribute("a", "rel", "nofollow"));
    assert!(is_allowed_attribute("img", "width", "320"));
    assert!(!is_allowed_attribute("a", "onclick", "alert(1)"));
    assert!(!is_allowed_attribute("p", "class", "lead"));
    assert!(!is_allowed_attribute("img", "href", "https://example.com"));
  }

  #[test]
  fn rejects_script_urls() {
    assert!(!is_allowed_url("javascript:alert(1)", LINK_SCHEMES));
    assert!(!is_allowed_url("  JavaScript:alert(1)", LINK_SCHEMES));
    assert!(!is_allowed_url("java\tscript:alert(1)", LINK_SCHEMES));
    assert!(!is_allowed_url("vbscript:msgbox(1)", LINK_SCHEMES));
  }

  #[test]
  fn schemes_depend_on_context() {
    assert!(is_allowed_url("mailto:editor@example.com", LINK_SCHEMES));
    assert!(!is_allowed_url("mailto:editor@example.com", IMAGE_SCHEMES));
    assert!(is_allowed_url("data:image/png;base64,QUJD", IMAGE_SCHEMES));
    assert!(!is_allowed_url("data:image/png;base64,QUJD", LINK_SCHEMES));
  }

  #[test]
  fn data_urls_must_be_images() {
    assert!(!is_allowed_url("data:text/html,<script>", IMAGE_SCHEMES));
  }

  #[test]
  fn relative_references_have_no_scheme() {
    assert!(is_allowed_url("/articles/rust", LINK_SCHEMES));
    assert!(is_allowed_url("#section-2", LINK_SCHEMES));
    assert!(is_allowed_url("images/cover.png", IMAGE_SCHEMES));
  }

  #[test]
  fn allowlist_excludes_executable_elements() {
    for tag in ["script", "iframe", "object", "embed", "style", "svg"] {
      assert!(!is_allowed_tag(tag), "{tag} should not be allowed");
    }
  }

  #[test]
  fn external_urls_are_classified_like_a_browser() {
    for href in [
      "https://example.com",
      "HTTP://example.com",
      "ht\ttps://example.com",
      "ht\ntps://example.com",
      "\u{1}https://example.com",
      " https://example.com",
      "//example.com/path",
      "/\\example.com",
    ] {
      assert!(is_external_url(href), "{href:?} should be external");
    }
  }

  #[test]
  fn local_and_non_web_urls_are_not_external() {
    for href in [
      "/about",
      "about",
      "#top",
      "?page=2",
      "mailto:desk@example.com",
      "javascript:alert(1)",
      "",
    ] {
      assert!(!is_external_url(href), "{href:?} should not be external");
    }
  }
}
