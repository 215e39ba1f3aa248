//! Error types for `revisor-core`.

use thiserror::Error;

use crate::RevisionId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown resource type: {0:?}")]
  UnknownResourceType(String),

  #[error("revision {0} content has no {1:?} field")]
  MissingField(RevisionId, &'static str),

  #[error("revision {0} content field {1:?} has an unexpected shape")]
  MalformedField(RevisionId, &'static str),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
