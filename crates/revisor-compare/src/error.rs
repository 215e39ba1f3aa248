//! Error types for the comparison pipeline.

use revisor_core::{PersonId, RevisionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("revision not found: {0}")]
  RevisionNotFound(RevisionId),

  #[error("person not found: {0}")]
  PersonNotFound(PersonId),

  #[error(transparent)]
  Core(#[from] revisor_core::Error),

  #[error("source error: {0}")]
  Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error without retry or recovery; it surfaces to the
  /// caller unchanged in meaning.
  pub(crate) fn source<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Source(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
