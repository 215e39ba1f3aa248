//! Custom-attribute definitions, values, and prepared entries.
//!
//! A revision snapshot carries the attribute *definitions* and *values* as
//! separate lists; [`prepare_attributes`] joins them into the entries the
//! diff engine consumes. Within one revision's prepared list the
//! `custom_attribute_id` values are unique.

use serde::{Deserialize, Serialize};

use crate::AttributeId;

/// A custom-attribute definition: the stable id plus its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDef {
  pub id:    AttributeId,
  pub title: String,
}

/// The value recorded for one custom attribute in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
  pub custom_attribute_id: AttributeId,
  pub attribute_value:     String,
}

/// A definition joined with its value — the diff engine's input unit.
/// `custom_attribute_id` is the join key across the two revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
  pub custom_attribute_id: AttributeId,
  pub def:                 AttributeDef,
  pub attribute_value:     String,
}

/// Join definitions with their values, in definition order.
/// A definition with no recorded value yields an empty `attribute_value`.
pub fn prepare_attributes(
  defs: &[AttributeDef],
  values: &[AttributeValue],
) -> Vec<AttributeEntry> {
  defs
    .iter()
    .map(|def| {
      let attribute_value = values
        .iter()
        .find(|v| v.custom_attribute_id == def.id)
        .map(|v| v.attribute_value.clone())
        .unwrap_or_default();
      AttributeEntry {
        custom_attribute_id: def.id,
        def: def.clone(),
        attribute_value,
      }
    })
    .collect()
}
