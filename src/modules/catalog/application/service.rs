use std::sync::Arc;

use crate::modules::catalog::domain::entities::{Title, TitleKind};
use crate::modules::catalog::domain::repositories::TitleRepository;
use crate::modules::catalog::domain::services::{ParentSetter, ParentUnsetter, TitleUpdater};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// The catalog's public operation surface, consumed by the request-handling
/// layer. Every operation either yields a title (or titles) or one of the
/// catalog error kinds; nothing is retried or coerced to a default here.
pub struct CatalogService {
    title_repo: Arc<dyn TitleRepository>,
}

impl CatalogService {
    pub fn new(title_repo: Arc<dyn TitleRepository>) -> Self {
        Self { title_repo }
    }

    /// Fully hydrated single title: parent plus derived children views.
    pub async fn get_title(&self, id: &str) -> AppResult<Title> {
        self.title_repo
            .find_by_id_with_children(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title with ID {} not found", id)))
    }

    /// Summaries filtered by variant names and optional search terms.
    /// Unknown variant names are rejected before touching the store.
    pub async fn find_all_summaries(
        &self,
        terms: Option<String>,
        types: &[String],
    ) -> AppResult<Vec<Title>> {
        let kinds = types
            .iter()
            .map(|name| {
                name.parse::<TitleKind>()
                    .map_err(|_| AppError::InvalidType(name.clone()))
            })
            .collect::<AppResult<Vec<_>>>()?;

        self.title_repo.find_all_summaries(terms, kinds).await
    }

    pub async fn create_title(&self, title: Title) -> AppResult<Title> {
        let created = self.title_repo.create(title).await?;
        log_info!("Created {}", created);
        Ok(created)
    }

    /// Delta-update the title with the given id. The target's variant must
    /// match the payload's; absent payload fields leave the target alone.
    pub async fn update_title(&self, id: &str, update: Title) -> AppResult<Title> {
        let mut title = self
            .title_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title with ID {} not found", id)))?;

        title.accept(&mut TitleUpdater::new(update))?;
        self.title_repo.update(title).await
    }

    pub async fn delete_title(&self, id: &str) -> AppResult<()> {
        if !self.title_repo.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Title with ID {} not found", id)));
        }
        self.title_repo.delete_by_id(id).await?;
        log_info!("Deleted title {}", id);
        Ok(())
    }

    /// Link `child_id` under `parent_id`. The two lookups are independent
    /// and run concurrently. The link is two documents wide but only the
    /// child is written, so there is no cross-document atomicity to lose.
    pub async fn add_child(&self, parent_id: &str, child_id: &str) -> AppResult<Title> {
        log_debug!("Linking child {} under parent {}", child_id, parent_id);
        let (parent, child) = tokio::try_join!(
            self.title_repo.find_by_id(parent_id),
            self.title_repo.find_by_id(child_id),
        )?;
        let parent = parent
            .ok_or_else(|| AppError::NotFound(format!("Title with ID {} not found", parent_id)))?;
        let mut child = child
            .ok_or_else(|| AppError::NotFound(format!("Title with ID {} not found", child_id)))?;

        child.accept(&mut ParentSetter::new(parent))?;
        self.title_repo.update(child).await
    }

    /// Unlink `child_id` from `parent_id`; fails if that is not the child's
    /// current parent.
    pub async fn remove_child(&self, parent_id: &str, child_id: &str) -> AppResult<Title> {
        log_debug!("Unlinking child {} from parent {}", child_id, parent_id);
        let mut child = self
            .title_repo
            .find_by_id(child_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title with ID {} not found", child_id)))?;

        child.accept(&mut ParentUnsetter::new(parent_id))?;
        self.title_repo.update(child).await
    }
}
