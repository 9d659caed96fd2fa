use std::sync::Arc;

use async_trait::async_trait;

use crate::log_debug;
use crate::modules::catalog::domain::entities::{Title, TitleKind};
use crate::modules::catalog::domain::repositories::TitleRepository;
use crate::modules::catalog::domain::services::{ChildrenPopulator, ParentSetter};
use crate::modules::catalog::infrastructure::models::TitleRecord;
use crate::modules::catalog::infrastructure::store::{DocumentStore, Query};
use crate::shared::errors::AppResult;

/// Title repository over the document store.
///
/// The store cannot resolve the circular parent/children graph natively, so
/// associations are reconstructed here: stored documents carry only a weak
/// parent reference, and children views come from a second back-reference
/// query per lookup.
pub struct TitleRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

impl TitleRepositoryImpl {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All documents whose parent reference points at `parent_id`. Their
    /// own parent field is excluded; it would only restate `parent_id`.
    async fn find_children(&self, parent_id: &str) -> AppResult<Vec<Title>> {
        let records = self
            .store
            .find_many(&Query::new().by_parent(parent_id).exclude_parent())
            .await?;
        Ok(records.into_iter().map(TitleRecord::into_title).collect())
    }

    /// Replace the identity stub from storage with the full parent
    /// document, so responses can show the parent's own fields.
    async fn hydrate_parent(&self, record: &TitleRecord, title: &mut Title) -> AppResult<()> {
        let Some(parent_id) = record.parent_id() else {
            return Ok(());
        };
        if let Some(parent_record) = self.store.find_by_id(parent_id).await? {
            title.accept(&mut ParentSetter::new(parent_record.into_title()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl TitleRepository for TitleRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Title>> {
        let record = self.store.find_by_id(id).await?;
        Ok(record.map(TitleRecord::into_title))
    }

    async fn find_by_id_with_children(&self, id: &str) -> AppResult<Option<Title>> {
        let Some(record) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        let children = self.find_children(id).await?;
        log_debug!("Resolved {} children for title {}", children.len(), id);

        let mut title = record.clone().into_title();
        self.hydrate_parent(&record, &mut title).await?;
        title.accept(&mut ChildrenPopulator::new(children));
        Ok(Some(title))
    }

    async fn find_all_summaries(
        &self,
        terms: Option<String>,
        kinds: Vec<TitleKind>,
    ) -> AppResult<Vec<Title>> {
        let query = Query::new()
            .kinds(&kinds)
            .matching(terms.as_deref())
            .exclude_parent();
        let records = self.store.find_many(&query).await?;
        Ok(records.into_iter().map(TitleRecord::into_title).collect())
    }

    async fn create(&self, title: Title) -> AppResult<Title> {
        let record = self.store.insert(TitleRecord::from_title(&title)).await?;
        Ok(record.into_title())
    }

    async fn update(&self, title: Title) -> AppResult<Title> {
        let record = self.store.save(TitleRecord::from_title(&title)).await?;
        Ok(record.into_title())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        self.store.delete_by_id(id).await
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        self.store.exists_by_id(id).await
    }
}
