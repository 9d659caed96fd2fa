use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::{DocumentStore, Query};
use crate::modules::catalog::infrastructure::models::TitleRecord;
use crate::shared::errors::{AppError, AppResult};

/// Document store backed by a concurrent map.
///
/// Stands in for the external driver in tests and fixture imports; query
/// evaluation follows the semantics of [`Query`] with map iteration order
/// as the (unspecified) result order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: DashMap<String, TitleRecord>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn assign_id(record: &mut TitleRecord) -> String {
        let id = Uuid::new_v4().to_string();
        record.id = Some(id.clone());
        id
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<TitleRecord>> {
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_many(&self, query: &Query) -> AppResult<Vec<TitleRecord>> {
        Ok(self
            .documents
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| query.project(entry.value().clone()))
            .collect())
    }

    async fn find_one(&self, query: &Query) -> AppResult<Option<TitleRecord>> {
        Ok(self
            .documents
            .iter()
            .find(|entry| query.matches(entry.value()))
            .map(|entry| query.project(entry.value().clone())))
    }

    async fn insert(&self, mut record: TitleRecord) -> AppResult<TitleRecord> {
        let id = match &record.id {
            Some(id) => {
                if self.documents.contains_key(id) {
                    return Err(AppError::AlreadyExists(format!(
                        "title with id '{}' already exists",
                        id
                    )));
                }
                id.clone()
            }
            None => Self::assign_id(&mut record),
        };
        self.documents.insert(id, record.clone());
        Ok(record)
    }

    async fn save(&self, mut record: TitleRecord) -> AppResult<TitleRecord> {
        let id = match &record.id {
            Some(id) => id.clone(),
            None => Self::assign_id(&mut record),
        };
        self.documents.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.documents.remove(id).is_some())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.documents.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::entities::{Title, TitleKind};
    use crate::modules::catalog::infrastructure::models::ParentRef;

    fn record(name: &str) -> TitleRecord {
        let mut record = TitleRecord::from_title(&Title::empty(TitleKind::Bonus));
        record.name = Some(name.to_owned());
        record
    }

    #[tokio::test]
    async fn insert_assigns_an_id() {
        let store = InMemoryDocumentStore::new();
        let saved = store.insert(record("Test Bonus Title")).await.unwrap();

        let id = saved.id.expect("store must assign an id");
        assert!(store.find_by_id(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn insert_rejects_a_colliding_id() {
        let store = InMemoryDocumentStore::new();
        let saved = store.insert(record("first")).await.unwrap();

        let mut duplicate = record("second");
        duplicate.id = saved.id.clone();
        let err = store.insert(duplicate).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn save_upserts_by_id() {
        let store = InMemoryDocumentStore::new();

        let mut fresh = record("ghost");
        fresh.id = Some("12345678900987654321abcd".to_owned());
        store.save(fresh).await.unwrap();
        assert!(store.exists_by_id("12345678900987654321abcd").await.unwrap());

        let mut replacement = record("renamed");
        replacement.id = Some("12345678900987654321abcd".to_owned());
        store.save(replacement).await.unwrap();

        let found = store
            .find_by_id("12345678900987654321abcd")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name.as_deref(), Some("renamed"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let store = InMemoryDocumentStore::new();
        let saved = store.insert(record("doomed")).await.unwrap();
        let id = saved.id.unwrap();

        assert!(store.delete_by_id(&id).await.unwrap());
        assert!(!store.delete_by_id(&id).await.unwrap());
        assert!(!store.exists_by_id(&id).await.unwrap());
    }

    #[tokio::test]
    async fn find_one_returns_a_single_projected_match() {
        let store = InMemoryDocumentStore::new();
        store.insert(record("Making Of")).await.unwrap();

        let mut linked = record("Deleted Scenes");
        linked.parent = Some(ParentRef {
            id: "f1".to_owned(),
            kind: TitleKind::Feature,
        });
        store.insert(linked).await.unwrap();

        let found = store
            .find_one(&Query::new().matching(Some("deleted")).exclude_parent())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name.as_deref(), Some("Deleted Scenes"));
        assert!(found.parent.is_none());

        let missing = store
            .find_one(&Query::new().matching(Some("gag")))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn find_many_applies_criteria_and_projection() {
        let store = InMemoryDocumentStore::new();
        store.insert(record("Making Of")).await.unwrap();
        store.insert(record("Deleted Scenes")).await.unwrap();

        let found = store
            .find_many(&Query::new().matching(Some("making")))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_deref(), Some("Making Of"));
    }
}
