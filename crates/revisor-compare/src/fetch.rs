//! Cache-first fetching of the two revisions under comparison.

use revisor_core::{
  RevisionId, cache::RevisionCache, revision::Revision, source::RevisionSource,
};

use crate::error::{Error, Result};

/// Fetch `left` and `right`, preferring the cache.
///
/// Zero cache misses issue no remote call; exactly one miss issues a single
/// `find_one`; two misses issue one batched `find_by_ids` covering both.
/// The output order is always `(left, right)` regardless of strategy, and
/// fetched revisions are written back to the cache.
pub async fn fetch_pair<S: RevisionSource>(
  source: &S,
  cache: &RevisionCache,
  left: RevisionId,
  right: RevisionId,
) -> Result<(Revision, Revision)> {
  let mut missing: Vec<RevisionId> = Vec::new();
  for id in [left, right] {
    if cache.get(&id).is_none() && !missing.contains(&id) {
      missing.push(id);
    }
  }

  match missing.as_slice() {
    [] => {}
    [id] => {
      tracing::debug!(id = *id, "fetching one revision");
      let revision = source
        .find_one(*id)
        .await
        .map_err(Error::source)?
        .ok_or(Error::RevisionNotFound(*id))?;
      cache.put(revision.id, revision);
    }
    ids => {
      tracing::debug!(?ids, "batch-fetching revisions");
      let revisions = source.find_by_ids(ids).await.map_err(Error::source)?;
      cache.put_all(revisions.into_iter().map(|r| (r.id, r)));
    }
  }

  let take =
    |id: RevisionId| cache.get(&id).ok_or(Error::RevisionNotFound(id));
  Ok((take(left)?, take(right)?))
}

#[cfg(test)]
mod tests {
  use std::{
    collections::HashMap,
    convert::Infallible,
    sync::atomic::{AtomicUsize, Ordering},
  };

  use revisor_core::{RevisionId, cache::RevisionCache, revision::Revision};

  use super::*;

  fn revision(id: RevisionId) -> Revision {
    serde_json::from_value(serde_json::json!({
      "id": id,
      "resource_type": "Control",
      "resource_id": 5,
      "content": {"id": 5},
      "created_at": "2018-03-01T12:00:00Z",
    }))
    .unwrap()
  }

  /// Revision source instrumented with per-strategy call counters.
  #[derive(Default)]
  struct CountingSource {
    revisions:      HashMap<RevisionId, Revision>,
    batch_calls:    AtomicUsize,
    find_one_calls: AtomicUsize,
  }

  impl CountingSource {
    fn with(ids: &[RevisionId]) -> Self {
      Self {
        revisions: ids.iter().map(|&id| (id, revision(id))).collect(),
        ..Self::default()
      }
    }
  }

  impl RevisionSource for CountingSource {
    type Error = Infallible;

    async fn find_by_ids(
      &self,
      ids: &[RevisionId],
    ) -> Result<Vec<Revision>, Infallible> {
      self.batch_calls.fetch_add(1, Ordering::SeqCst);
      Ok(
        ids
          .iter()
          .filter_map(|id| self.revisions.get(id).cloned())
          .collect(),
      )
    }

    async fn find_one(
      &self,
      id: RevisionId,
    ) -> Result<Option<Revision>, Infallible> {
      self.find_one_calls.fetch_add(1, Ordering::SeqCst);
      Ok(self.revisions.get(&id).cloned())
    }
  }

  #[tokio::test]
  async fn both_cached_issues_no_remote_calls() {
    let source = CountingSource::with(&[]);
    let cache = RevisionCache::new();
    cache.put(42, revision(42));
    cache.put(11, revision(11));

    let (a, b) = fetch_pair(&source, &cache, 42, 11).await.unwrap();
    assert_eq!((a.id, b.id), (42, 11));
    assert_eq!(source.batch_calls.load(Ordering::SeqCst), 0);
    assert_eq!(source.find_one_calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn one_cached_issues_exactly_one_find_one() {
    let source = CountingSource::with(&[11]);
    let cache = RevisionCache::new();
    cache.put(42, revision(42));

    let (a, b) = fetch_pair(&source, &cache, 42, 11).await.unwrap();
    assert_eq!((a.id, b.id), (42, 11));
    assert_eq!(source.find_one_calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.batch_calls.load(Ordering::SeqCst), 0);
    // The fetched revision is now cached.
    assert!(cache.get(&11).is_some());
  }

  #[tokio::test]
  async fn none_cached_issues_exactly_one_batch() {
    let source = CountingSource::with(&[42, 11]);
    let cache = RevisionCache::new();

    let (a, b) = fetch_pair(&source, &cache, 42, 11).await.unwrap();
    assert_eq!((a.id, b.id), (42, 11));
    assert_eq!(source.batch_calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.find_one_calls.load(Ordering::SeqCst), 0);
    assert_eq!(cache.len(), 2);
  }

  #[tokio::test]
  async fn output_order_matches_input_order() {
    let source = CountingSource::with(&[42, 11]);
    let cache = RevisionCache::new();

    let (a, b) = fetch_pair(&source, &cache, 11, 42).await.unwrap();
    assert_eq!((a.id, b.id), (11, 42));
  }

  #[tokio::test]
  async fn missing_revision_surfaces_not_found() {
    let source = CountingSource::with(&[42]);
    let cache = RevisionCache::new();

    let err = fetch_pair(&source, &cache, 42, 999).await.unwrap_err();
    assert!(matches!(err, Error::RevisionNotFound(999)));
  }

  /// Source whose every call fails; rejections must propagate unchanged.
  struct FailingSource;

  #[derive(Debug, thiserror::Error)]
  #[error("remote unavailable")]
  struct Unavailable;

  impl RevisionSource for FailingSource {
    type Error = Unavailable;

    async fn find_by_ids(
      &self,
      _ids: &[RevisionId],
    ) -> Result<Vec<Revision>, Unavailable> {
      Err(Unavailable)
    }

    async fn find_one(
      &self,
      _id: RevisionId,
    ) -> Result<Option<Revision>, Unavailable> {
      Err(Unavailable)
    }
  }

  #[tokio::test]
  async fn fetch_failure_propagates_to_caller() {
    let cache = RevisionCache::new();
    let err = fetch_pair(&FailingSource, &cache, 1, 2).await.unwrap_err();
    assert!(matches!(err, Error::Source(_)));
  }
}
