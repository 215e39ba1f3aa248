//! Explicit, passed-in caches for revisions and people.
//!
//! Process-wide from the pipeline's perspective: read-shared and append-only.
//! Nothing here evicts or invalidates; a comparison session simply drops the
//! whole cache when it ends.

use std::{
  collections::HashMap,
  hash::Hash,
  sync::{Mutex, PoisonError},
};

use crate::{PersonId, RevisionId, person::Person, revision::Revision};

/// An append-only `get`/`put` map guarded for shared use across concurrent
/// resolutions. Values are cloned out; the lock is never held across `await`.
#[derive(Debug)]
pub struct Cache<K, V> {
  inner: Mutex<HashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> Cache<K, V> {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(HashMap::new()),
    }
  }

  pub fn get(&self, key: &K) -> Option<V> {
    self.lock().get(key).cloned()
  }

  pub fn put(&self, key: K, value: V) {
    self.lock().insert(key, value);
  }

  pub fn put_all(&self, entries: impl IntoIterator<Item = (K, V)>) {
    self.lock().extend(entries);
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<K, V>> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<K: Eq + Hash, V: Clone> Default for Cache<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

pub type RevisionCache = Cache<RevisionId, Revision>;
pub type PersonCache = Cache<PersonId, Person>;
