//! Custom-attribute diff engine: stable-key alignment of two prepared
//! attribute lists.
//!
//! This is not a content-based sequence diff — entries are joined by
//! `custom_attribute_id`, and each aligned pair is classified.

use std::collections::{HashMap, HashSet};

use revisor_core::{AttributeId, attribute::AttributeEntry};
use strum::Display;

/// Classification of one aligned attribute pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DiffStatus {
  Unchanged,
  Changed,
  Added,
  Removed,
}

/// One aligned pair of attribute entries across the two revisions.
///
/// Exactly one side may be absent (`added`/`removed`); both are present for
/// `unchanged`/`changed`. Computed per render, never persisted.
#[derive(Debug, Clone)]
pub struct PairedAttribute {
  pub left:   Option<AttributeEntry>,
  pub right:  Option<AttributeEntry>,
  pub status: DiffStatus,
}

/// Align `left` and `right` by `custom_attribute_id` and classify each pair.
///
/// Output order: left-originated pairs in left's original order, then
/// right-only (`added`) pairs in right's original order. A difference in
/// either the value or the definition title classifies a matched pair
/// `changed`.
pub fn pair(
  left: &[AttributeEntry],
  right: &[AttributeEntry],
) -> Vec<PairedAttribute> {
  let right_by_id: HashMap<AttributeId, &AttributeEntry> = right
    .iter()
    .map(|entry| (entry.custom_attribute_id, entry))
    .collect();

  let mut consumed: HashSet<AttributeId> = HashSet::new();
  let mut paired = Vec::with_capacity(left.len() + right.len());

  for entry in left {
    match right_by_id.get(&entry.custom_attribute_id) {
      Some(matched) => {
        consumed.insert(entry.custom_attribute_id);
        let status = if entry.attribute_value == matched.attribute_value
          && entry.def.title == matched.def.title
        {
          DiffStatus::Unchanged
        } else {
          DiffStatus::Changed
        };
        paired.push(PairedAttribute {
          left:  Some(entry.clone()),
          right: Some((*matched).clone()),
          status,
        });
      }
      None => paired.push(PairedAttribute {
        left:   Some(entry.clone()),
        right:  None,
        status: DiffStatus::Removed,
      }),
    }
  }

  for entry in right {
    if !consumed.contains(&entry.custom_attribute_id) {
      paired.push(PairedAttribute {
        left:   None,
        right:  Some(entry.clone()),
        status: DiffStatus::Added,
      });
    }
  }

  paired
}
