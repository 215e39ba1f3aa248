//! Attachment — one file in an instance's evidence folder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
  pub id:    u64,
  pub title: String,
}
