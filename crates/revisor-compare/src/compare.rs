//! The comparison orchestrator: fetch, materialize, resolve, diff.

use std::sync::Arc;

use revisor_core::{
  RevisionId,
  attribute::{AttributeEntry, prepare_attributes},
  cache::{PersonCache, RevisionCache},
  instance::Instance,
  person::Person,
  revision::{PersonStub, Revision},
  source::{PersonSource, RevisionSource},
};

use crate::{
  acl::resolve_acl,
  diff::{self, PairedAttribute},
  error::{Error, Result},
  fetch::fetch_pair,
};

/// One side of a comparison: the revision, its materialized instance, and
/// its prepared custom attributes.
#[derive(Debug, Clone)]
pub struct PreparedRevision {
  pub revision:   Revision,
  pub instance:   Instance,
  pub attributes: Vec<AttributeEntry>,
}

/// The computed result of comparing two revisions — never persisted.
#[derive(Debug, Clone)]
pub struct Comparison {
  pub left:  PreparedRevision,
  pub right: PreparedRevision,
  /// Aligned, classified attribute pairs for the custom-attribute section.
  pub paired: Vec<PairedAttribute>,
  /// Resolved authorship of each side, when the source knows the person.
  pub left_modified_by:  Option<Person>,
  pub right_modified_by: Option<Person>,
}

/// Runs the comparison pipeline against a revision source and a person
/// source, sharing a pair of append-only caches across invocations.
pub struct Comparer<R, P> {
  revision_source: Arc<R>,
  person_source:   Arc<P>,
  revision_cache:  Arc<RevisionCache>,
  person_cache:    Arc<PersonCache>,
}

impl<R, P> Comparer<R, P>
where
  R: RevisionSource,
  P: PersonSource,
{
  /// Build a comparer with fresh caches.
  pub fn new(revision_source: Arc<R>, person_source: Arc<P>) -> Self {
    Self::with_caches(
      revision_source,
      person_source,
      Arc::new(RevisionCache::new()),
      Arc::new(PersonCache::new()),
    )
  }

  /// Build a comparer sharing caches with other pipeline consumers.
  pub fn with_caches(
    revision_source: Arc<R>,
    person_source: Arc<P>,
    revision_cache: Arc<RevisionCache>,
    person_cache: Arc<PersonCache>,
  ) -> Self {
    Self {
      revision_source,
      person_source,
      revision_cache,
      person_cache,
    }
  }

  pub fn revision_cache(&self) -> &Arc<RevisionCache> {
    &self.revision_cache
  }

  pub fn person_cache(&self) -> &Arc<PersonCache> {
    &self.person_cache
  }

  /// Compare two revisions by id.
  ///
  /// Fetches both (cache-first), materializes their instances, resolves the
  /// two access-control lists concurrently, then aligns and classifies the
  /// prepared custom attributes. Attachment fetches are not part of this
  /// pipeline; see [`crate::attachments::attachment_fetches`].
  pub async fn compare(
    &self,
    left_id: RevisionId,
    right_id: RevisionId,
  ) -> Result<Comparison> {
    tracing::info!(left_id, right_id, "comparing revisions");

    let (left_rev, right_rev) = fetch_pair(
      self.revision_source.as_ref(),
      &self.revision_cache,
      left_id,
      right_id,
    )
    .await?;

    let mut left_inst = Instance::materialize(&left_rev)?;
    let mut right_inst = Instance::materialize(&right_rev)?;

    // The two resolutions share the person cache but have no ordering
    // constraint relative to each other.
    let (left_res, right_res) = tokio::join!(
      resolve_acl(
        &mut left_inst,
        &self.person_cache,
        self.person_source.as_ref(),
      ),
      resolve_acl(
        &mut right_inst,
        &self.person_cache,
        self.person_source.as_ref(),
      ),
    );
    left_res?;
    right_res?;

    let left_modified_by = self.resolve_person(left_rev.modified_by).await?;
    let right_modified_by = self.resolve_person(right_rev.modified_by).await?;

    let left = prepare(left_rev, left_inst);
    let right = prepare(right_rev, right_inst);
    let paired = diff::pair(&left.attributes, &right.attributes);
    tracing::debug!(pairs = paired.len(), "attribute pairing complete");

    Ok(Comparison {
      left,
      right,
      paired,
      left_modified_by,
      right_modified_by,
    })
  }

  /// Resolve an authorship stub to a full profile, cache-first.
  ///
  /// Authorship is display metadata: a person the source no longer knows
  /// resolves to `None` rather than an error.
  async fn resolve_person(
    &self,
    stub: Option<PersonStub>,
  ) -> Result<Option<Person>> {
    let Some(stub) = stub else {
      return Ok(None);
    };
    if let Some(person) = self.person_cache.get(&stub.id) {
      return Ok(Some(person));
    }
    let people = self
      .person_source
      .find_by_ids(&[stub.id])
      .await
      .map_err(Error::source)?;
    self.person_cache.put_all(people.into_iter().map(|p| (p.id, p)));
    Ok(self.person_cache.get(&stub.id))
  }
}

fn prepare(revision: Revision, instance: Instance) -> PreparedRevision {
  let attributes = prepare_attributes(
    &instance.custom_attribute_definitions,
    &instance.custom_attribute_values,
  );
  PreparedRevision {
    revision,
    instance,
    attributes,
  }
}
