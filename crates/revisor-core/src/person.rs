//! Person — the resolved profile attached to access-control entries and
//! revision authorship.

use serde::{Deserialize, Serialize};

use crate::PersonId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:    PersonId,
  pub name:  String,
  pub email: String,
}
