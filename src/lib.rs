//! Allowlist sanitizer and structural normalizer for article HTML.
//!
//! Raw editor markup goes through four stages in a fixed order: the
//! allowlist sanitizer, heading demotion, structural cleanup and
//! link/image attribute normalization. [`preview`] pairs the cleaned
//! markup with [`CleaningStats`] and a [`ValidationResult`] so the
//! authoring UI can render a before/after report.
//!
//! ```
//! let cleaned = article_cleaner::clean(
//!   "<h1>Title</h1><h1>Second</h1><script>alert(1)</script>",
//! );
//!
//! assert_eq!(cleaned, "<h1>Title</h1><h2>Second</h2>");
//! ```

use {
  context::Context,
  ego_tree::{NodeId, NodeMut, NodeRef},
  fragment::Fragment,
  html5ever::{LocalName, Namespace, QualName, tendril::StrTendril},
  log::{debug, trace},
  pipeline::Pipeline,
  regex::Regex,
  scraper::{ElementRef, Html, Node, node::Element},
  serde::{Deserialize, Serialize},
  stage::{
    CollapseStructureStage, NormalizeHeadingsStage,
    NormalizeLinksAndImagesStage, SanitizeStage, Stage,
  },
  std::sync::LazyLock,
  url::Url,
};

pub use crate::{
  cleaner::{
    Cleaner, clean, clean_value, collapse_structure, normalize_headings,
    normalize_links_and_images, preview, sanitize,
  },
  error::Error,
  options::{CleanerOptions, CleanerOptionsBuilder},
  preview::PreviewResult,
  stats::{CleaningStats, RemovedElements, compute_stats},
  validation::{Issue, ValidationResult, Warning, validate},
};

pub mod allowlist;

mod cleaner;
mod context;
mod error;
mod fragment;
mod options;
mod pipeline;
mod preview;
mod re;
mod stage;
mod stats;
mod validation;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
