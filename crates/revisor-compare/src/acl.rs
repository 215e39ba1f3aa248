//! Access-control-list person resolution.
//!
//! Cache hits attach synchronously; misses are collected into a
//! [`RefreshQueue`] and fetched in one batched round trip. Completion waits
//! for every enqueued id, not just the first.

use std::collections::HashSet;

use revisor_core::{
  PersonId, cache::PersonCache, instance::Instance, person::Person,
  source::PersonSource,
};

use crate::error::{Error, Result};

/// Deduplicating registry of person ids awaiting a batched refresh.
///
/// Enqueueing the same id twice records it once; this is the mechanism that
/// prevents double-fetching when overlapping entries resolve within one
/// batch.
#[derive(Debug, Default)]
pub struct RefreshQueue {
  ids:  Vec<PersonId>,
  seen: HashSet<PersonId>,
}

impl RefreshQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn enqueue(&mut self, id: PersonId) {
    if self.seen.insert(id) {
      self.ids.push(id);
    }
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  /// The enqueued ids, in first-enqueue order.
  pub fn ids(&self) -> &[PersonId] {
    &self.ids
  }

  /// Fetch every enqueued person in one batched call. An empty queue
  /// resolves immediately without touching the source.
  pub async fn trigger<P: PersonSource>(
    self,
    source: &P,
  ) -> Result<Vec<Person>> {
    if self.ids.is_empty() {
      return Ok(Vec::new());
    }
    tracing::debug!(ids = ?self.ids, "batch-refreshing people");
    source.find_by_ids(&self.ids).await.map_err(Error::source)
  }
}

/// Attach a resolved person profile to every access-control entry of
/// `instance`, in place.
///
/// Resolves once every entry has a person. An instance with an empty list is
/// a no-op success. A person the source cannot produce is an error — the
/// post-resolution invariant requires every entry to carry a profile with a
/// matching id.
pub async fn resolve_acl<P: PersonSource>(
  instance: &mut Instance,
  cache: &PersonCache,
  source: &P,
) -> Result<()> {
  let mut queue = RefreshQueue::new();
  for entry in &mut instance.access_control_list {
    match cache.get(&entry.person_id) {
      Some(person) => entry.person = Some(person),
      None => queue.enqueue(entry.person_id),
    }
  }

  if queue.is_empty() {
    return Ok(());
  }

  let requested = queue.ids().to_vec();
  let people = queue.trigger(source).await?;
  cache.put_all(people.into_iter().map(|p| (p.id, p)));

  for id in requested {
    if cache.get(&id).is_none() {
      return Err(Error::PersonNotFound(id));
    }
  }

  // A person may back multiple entries (same person, different role).
  for entry in &mut instance.access_control_list {
    if entry.person.is_none() {
      entry.person = cache.get(&entry.person_id);
    }
  }
  Ok(())
}
