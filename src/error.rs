#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid option `{name}`: {reason}")]
  InvalidOption { name: &'static str, reason: String },
  #[error("failed to serialize preview: {source}")]
  Serialize {
    #[from]
    source: serde_json::Error,
  },
}
