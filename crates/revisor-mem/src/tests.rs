//! Tests for `MemorySource` against the fixture document format.

use revisor_core::{
  attachment::Attachment,
  person::Person,
  source::{AttachmentSource, PersonSource, RevisionSource},
};

use crate::MemorySource;

const FIXTURES: &str = r#"{
  "revisions": [
    {
      "id": 42,
      "resource_type": "Control",
      "resource_id": 5,
      "action": "created",
      "content": {"id": 5, "title": "Access policy"},
      "created_at": "2018-03-01T12:00:00Z"
    },
    {
      "id": 11,
      "resource_type": "Control",
      "resource_id": 5,
      "action": "modified",
      "content": {"id": 5, "title": "Access policy v2"},
      "modified_by": {"id": 7},
      "created_at": "2018-04-01T12:00:00Z"
    }
  ],
  "people": [
    {"id": 7, "name": "Alice", "email": "alice@example.com"}
  ],
  "attachments": {
    "EWheNKvwjhrcwWer": [{"id": 1, "title": "evidence.pdf"}]
  }
}"#;

fn source() -> MemorySource {
  MemorySource::from_json(FIXTURES).expect("fixtures parse")
}

#[tokio::test]
async fn find_by_ids_returns_only_held_revisions() {
  let s = source();
  let revisions = RevisionSource::find_by_ids(&s, &[42, 11, 999])
    .await
    .unwrap();
  assert_eq!(revisions.len(), 2);
}

#[tokio::test]
async fn find_one_missing_returns_none() {
  let s = source();
  assert!(s.find_one(999).await.unwrap().is_none());
  let found = s.find_one(42).await.unwrap().unwrap();
  assert_eq!(found.id, 42);
  assert!(found.is_created());
}

#[tokio::test]
async fn people_lookup_by_ids() {
  let s = source();
  let people = PersonSource::find_by_ids(&s, &[7, 8]).await.unwrap();
  assert_eq!(people, vec![Person {
    id:    7,
    name:  "Alice".to_string(),
    email: "alice@example.com".to_string(),
  }]);
}

#[tokio::test]
async fn unknown_folder_lists_empty() {
  let s = source();
  assert!(s.list_by_folder("nope").await.unwrap().is_empty());
  assert_eq!(s.list_by_folder("EWheNKvwjhrcwWer").await.unwrap(), vec![
    Attachment {
      id:    1,
      title: "evidence.pdf".to_string(),
    }
  ]);
}
