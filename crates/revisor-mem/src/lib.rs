//! In-memory backend for the revisor source traits.
//!
//! Backs the CLI and the pipeline tests. Seedable from a JSON fixture
//! document:
//!
//! ```json
//! {
//!   "revisions":   [ ... ],
//!   "people":      [ ... ],
//!   "attachments": { "<folder>": [ ... ] }
//! }
//! ```

use std::{collections::HashMap, convert::Infallible};

use revisor_core::{
  PersonId, RevisionId,
  attachment::Attachment,
  person::Person,
  revision::Revision,
  source::{AttachmentSource, PersonSource, RevisionSource},
};
use serde::Deserialize;

#[cfg(test)]
mod tests;

/// The JSON fixture document a [`MemorySource`] is seeded from.
#[derive(Debug, Default, Deserialize)]
pub struct Fixtures {
  #[serde(default)]
  pub revisions:   Vec<Revision>,
  #[serde(default)]
  pub people:      Vec<Person>,
  #[serde(default)]
  pub attachments: HashMap<String, Vec<Attachment>>,
}

/// `HashMap`-backed implementation of all three source traits.
#[derive(Debug, Default)]
pub struct MemorySource {
  revisions:   HashMap<RevisionId, Revision>,
  people:      HashMap<PersonId, Person>,
  attachments: HashMap<String, Vec<Attachment>>,
}

impl MemorySource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_fixtures(fixtures: Fixtures) -> Self {
    Self {
      revisions: fixtures
        .revisions
        .into_iter()
        .map(|r| (r.id, r))
        .collect(),
      people: fixtures.people.into_iter().map(|p| (p.id, p)).collect(),
      attachments: fixtures.attachments,
    }
  }

  pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
    Ok(Self::from_fixtures(serde_json::from_str(raw)?))
  }

  pub fn insert_revision(&mut self, revision: Revision) {
    self.revisions.insert(revision.id, revision);
  }

  pub fn insert_person(&mut self, person: Person) {
    self.people.insert(person.id, person);
  }

  pub fn insert_attachments(
    &mut self,
    folder: impl Into<String>,
    attachments: Vec<Attachment>,
  ) {
    self.attachments.insert(folder.into(), attachments);
  }
}

impl RevisionSource for MemorySource {
  type Error = Infallible;

  async fn find_by_ids(
    &self,
    ids: &[RevisionId],
  ) -> Result<Vec<Revision>, Infallible> {
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
    Ok(self.revisions.get(&id).cloned())
  }
}

impl PersonSource for MemorySource {
  type Error = Infallible;

  async fn find_by_ids(
    &self,
    ids: &[PersonId],
  ) -> Result<Vec<Person>, Infallible> {
    Ok(
      ids
        .iter()
        .filter_map(|id| self.people.get(id).cloned())
        .collect(),
    )
  }
}

impl AttachmentSource for MemorySource {
  type Error = Infallible;

  async fn list_by_folder(
    &self,
    folder: &str,
  ) -> Result<Vec<Attachment>, Infallible> {
    Ok(self.attachments.get(folder).cloned().unwrap_or_default())
  }
}
