//! Revision — an immutable snapshot of an object at a point in time.
//!
//! Revisions are produced by the remote source and never mutated. Once
//! fetched they stay in the revision cache for the rest of the comparison
//! session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{PersonId, RevisionId};

/// What the revision recorded about its object.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RevisionAction {
  Created,
  Modified,
  Deleted,
}

/// A bare reference to a person, as embedded in revision metadata.
/// The full profile is resolved on demand through the person source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonStub {
  pub id: PersonId,
}

/// An immutable snapshot of one object's field values at a point in time.
/// Identity is `id`; `content` maps field name to snapshot value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revision {
  pub id:            RevisionId,
  /// Discriminant naming the snapshotted object's kind (e.g. `"Control"`).
  pub resource_type: String,
  pub resource_id:   u64,
  #[serde(default)]
  pub action:        Option<RevisionAction>,
  /// The object's field values at the time of the revision.
  pub content:       serde_json::Map<String, serde_json::Value>,
  #[serde(default)]
  pub modified_by:   Option<PersonStub>,
  pub created_at:    DateTime<Utc>,
}

impl Revision {
  /// Whether this revision recorded the object's creation.
  pub fn is_created(&self) -> bool {
    matches!(self.action, Some(RevisionAction::Created))
  }
}
