//! Instance — the materialized, read-only view over a revision's content.
//!
//! One instance per revision, derived and never persisted. Materialization is
//! synchronous and side-effect-free; the identity fields mirror the content
//! snapshot exactly.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum::{Display, EnumString};

use crate::{
  Error, PersonId, Result,
  attribute::{AttributeDef, AttributeValue},
  person::Person,
  revision::Revision,
};

/// The kinds of object that can appear in a revision snapshot.
/// Parsed from the revision's `resource_type` discriminant.
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
pub enum ResourceKind {
  AccessGroup,
  Contract,
  Control,
  Market,
  Objective,
  OrgGroup,
  Policy,
  Process,
  Product,
  Regulation,
  Requirement,
  Risk,
  Standard,
  System,
  Threat,
  Vendor,
}

/// One role/person pair in an instance's access-control list.
/// Duplicates by role+person are allowed; order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AclEntry {
  pub ac_role_id: u64,
  pub person_id:  PersonId,
  /// `None` until the access-control resolver attaches the profile. After
  /// resolution this is always `Some(p)` with `p.id == person_id`.
  #[serde(default)]
  pub person:     Option<Person>,
}

/// The typed, queryable view of one revision's content snapshot.
#[derive(Debug, Clone)]
pub struct Instance {
  pub kind: ResourceKind,
  pub id:   u64,
  /// Marks the instance as historical: read-only, never persistable.
  pub is_revision: bool,

  pub access_control_list: Vec<AclEntry>,
  /// Reference to the external evidence folder, when one is set.
  pub folder: Option<String>,

  pub custom_attribute_definitions: Vec<AttributeDef>,
  pub custom_attribute_values:      Vec<AttributeValue>,

  /// The residual snapshot fields not lifted into typed members.
  pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Instance {
  /// Build the typed view over `revision.content`.
  ///
  /// The concrete kind is selected from `resource_type`; identity fields are
  /// copied from the content without coercion. Access-control entries start
  /// with no resolved person, regardless of what the snapshot embedded.
  pub fn materialize(revision: &Revision) -> Result<Self> {
    let kind: ResourceKind = revision
      .resource_type
      .parse()
      .map_err(|_| Error::UnknownResourceType(revision.resource_type.clone()))?;

    let mut fields = revision.content.clone();

    let id = fields
      .get("id")
      .ok_or(Error::MissingField(revision.id, "id"))?
      .as_u64()
      .ok_or(Error::MalformedField(revision.id, "id"))?;

    let mut access_control_list: Vec<AclEntry> =
      take_list(&mut fields, "access_control_list", revision.id)?;
    for entry in &mut access_control_list {
      entry.person = None;
    }

    let folder = match fields.remove("folder") {
      Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
      _ => None,
    };

    let custom_attribute_definitions =
      take_list(&mut fields, "custom_attribute_definitions", revision.id)?;
    let custom_attribute_values =
      take_list(&mut fields, "custom_attribute_values", revision.id)?;

    Ok(Self {
      kind,
      id,
      is_revision: true,
      access_control_list,
      folder,
      custom_attribute_definitions,
      custom_attribute_values,
      fields,
    })
  }
}

/// Remove `key` from the snapshot and deserialize it as a list.
/// A missing key is an empty list, not an error.
fn take_list<T: DeserializeOwned>(
  fields: &mut serde_json::Map<String, serde_json::Value>,
  key: &'static str,
  revision_id: crate::RevisionId,
) -> Result<Vec<T>> {
  match fields.remove(key) {
    Some(value) => serde_json::from_value(value)
      .map_err(|_| Error::MalformedField(revision_id, key)),
    None => Ok(Vec::new()),
  }
}
