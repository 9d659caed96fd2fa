pub mod memory;
pub mod query;

pub use memory::InMemoryDocumentStore;
pub use query::{Criteria, Projection, Query, TextCriteria};

use crate::modules::catalog::infrastructure::models::TitleRecord;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Capability surface of the backing document store.
///
/// The real driver lives outside this crate; everything the catalog needs
/// from it is captured here, over stored records and composed [`Query`]s.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<TitleRecord>>;

    async fn find_many(&self, query: &Query) -> AppResult<Vec<TitleRecord>>;

    async fn find_one(&self, query: &Query) -> AppResult<Option<TitleRecord>>;

    /// Insert a new document, assigning an id when the record has none.
    /// Fails with `AlreadyExists` if a supplied id collides.
    async fn insert(&self, record: TitleRecord) -> AppResult<TitleRecord>;

    /// Upsert by id (assigning one when absent).
    async fn save(&self, record: TitleRecord) -> AppResult<TitleRecord>;

    /// Returns whether the document existed and was removed.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;
}
