//! Attachment-listing fetches, one per instance with an evidence folder.

use std::sync::Arc;

use revisor_core::{attachment::Attachment, source::AttachmentSource};
use tokio::task::JoinHandle;

use crate::{
  compare::PreparedRevision,
  error::{Error, Result},
};

/// Spawn one attachment-listing fetch per entry whose instance carries a
/// folder reference.
///
/// Entries without a folder contribute nothing, so the output order follows
/// the input order and its length equals the count of foldered entries. The
/// fetches are independent of the comparison pipeline and of each other.
pub fn attachment_fetches<A>(
  source: &Arc<A>,
  prepared: &[PreparedRevision],
) -> Vec<JoinHandle<Result<Vec<Attachment>>>>
where
  A: AttachmentSource + 'static,
{
  prepared
    .iter()
    .filter_map(|p| p.instance.folder.clone())
    .map(|folder| {
      let source = Arc::clone(source);
      tokio::spawn(async move {
        source
          .list_by_folder(&folder)
          .await
          .map_err(Error::source)
      })
    })
    .collect()
}
