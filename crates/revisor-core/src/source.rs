//! Remote-source traits the comparison pipeline is written against.
//!
//! Implemented by backends (e.g. `revisor-mem`). The pipeline layers
//! (`revisor-compare`, `revisor-cli`) depend on these abstractions, not on
//! any concrete backend.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes.

use std::future::Future;

use crate::{
  PersonId, RevisionId, attachment::Attachment, person::Person,
  revision::Revision,
};

/// Remote source of revision records.
pub trait RevisionSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Batched lookup covering all of `ids` in one round trip.
  /// Implementations return only the revisions they hold.
  fn find_by_ids<'a>(
    &'a self,
    ids: &'a [RevisionId],
  ) -> impl Future<Output = Result<Vec<Revision>, Self::Error>> + Send + 'a;

  /// Single-item lookup. Returns `None` if the revision does not exist.
  fn find_one(
    &self,
    id: RevisionId,
  ) -> impl Future<Output = Result<Option<Revision>, Self::Error>> + Send + '_;
}

/// Remote source of person profiles.
pub trait PersonSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Batched lookup covering all of `ids` in one round trip.
  /// Implementations return only the people they hold.
  fn find_by_ids<'a>(
    &'a self,
    ids: &'a [PersonId],
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;
}

/// Remote source of attachment listings, keyed by folder reference.
pub trait AttachmentSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// List the attachments in `folder`. An unknown folder is an empty list.
  fn list_by_folder<'a>(
    &'a self,
    folder: &'a str,
  ) -> impl Future<Output = Result<Vec<Attachment>, Self::Error>> + Send + 'a;
}
