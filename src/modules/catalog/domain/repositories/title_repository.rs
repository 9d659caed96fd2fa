use crate::modules::catalog::domain::entities::{Title, TitleKind};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence port for the title catalog.
///
/// Children lists and parent references live only on the read side: stored
/// documents carry a weak parent reference, and the association views are
/// reconstructed per query (the store cannot resolve the intentionally
/// circular parent/children graph natively).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleRepository: Send + Sync {
    /// Single document by id; the parent reference is an identity stub.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Title>>;

    /// Single document by id with the parent hydrated and the derived
    /// children views populated from back references.
    async fn find_by_id_with_children(&self, id: &str) -> AppResult<Option<Title>>;

    /// Summaries filtered by variant (empty = all) and optional search
    /// terms. Summaries never carry a parent or children.
    async fn find_all_summaries(
        &self,
        terms: Option<String>,
        kinds: Vec<TitleKind>,
    ) -> AppResult<Vec<Title>>;

    /// Insert with a store-assigned id. Fails with `AlreadyExists` only if
    /// a caller-supplied id collides.
    async fn create(&self, title: Title) -> AppResult<Title>;

    /// Upsert by id: replaces the stored document, creating it if absent.
    async fn update(&self, title: Title) -> AppResult<Title>;

    /// Returns whether a document existed and was removed.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;
}
