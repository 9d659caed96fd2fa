use std::path::Path;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::modules::catalog::domain::entities::Title;
use crate::modules::catalog::domain::repositories::TitleRepository;
use crate::modules::catalog::domain::services::ParentSetter;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};

/// Bulk-imports a nested title fixture into the catalog.
///
/// Fixture files nest children inside their owners; storage does not. Each
/// owner is created first (the store assigns its id), then its children are
/// linked to it through the regular relationship rules and created in turn.
pub struct TitleImportService {
    title_repo: Arc<dyn TitleRepository>,
}

impl TitleImportService {
    pub fn new(title_repo: Arc<dyn TitleRepository>) -> Self {
        Self { title_repo }
    }

    /// Import a JSON array of nested titles. Returns the number of
    /// documents created.
    pub async fn import_from_path(&self, path: impl AsRef<Path>) -> AppResult<usize> {
        let path = path.as_ref();
        log_info!("Loading titles from {}", path.display());

        let raw = tokio::fs::read(path).await?;
        let titles: Vec<Title> = serde_json::from_slice(&raw)?;
        self.import(titles).await
    }

    pub async fn import(&self, titles: Vec<Title>) -> AppResult<usize> {
        let mut count = 0;
        for title in titles {
            count += self.import_tree(title, None).await?;
        }
        log_info!("Imported {} titles", count);
        Ok(count)
    }

    fn import_tree<'a>(
        &'a self,
        title: Title,
        parent: Option<Title>,
    ) -> BoxFuture<'a, AppResult<usize>> {
        Box::pin(async move {
            let (mut title, children) = detach_children(title);
            if let Some(parent) = parent {
                title.accept(&mut ParentSetter::new(parent))?;
            }

            let created = self.title_repo.create(title).await?;
            log_debug!("Imported {}", created);

            let mut count = 1;
            for child in children {
                count += self.import_tree(child, Some(created.clone())).await?;
            }
            Ok(count)
        })
    }
}

/// Split a nested fixture title into the bare title and its embedded
/// children, so the children can be created as documents of their own.
fn detach_children(mut title: Title) -> (Title, Vec<Title>) {
    let mut children: Vec<Title> = Vec::new();
    match &mut title {
        Title::Feature(feature) => {
            children.extend(feature.bonuses.take().into_iter().flatten().map(Title::Bonus));
        }
        Title::TvSeries(series) => {
            children.extend(series.seasons.take().into_iter().flatten().map(Title::Season));
            children.extend(series.bonuses.take().into_iter().flatten().map(Title::Bonus));
        }
        Title::Season(season) => {
            children.extend(season.episodes.take().into_iter().flatten().map(Title::Episode));
            children.extend(season.bonuses.take().into_iter().flatten().map(Title::Bonus));
        }
        Title::Episode(episode) => {
            children.extend(episode.bonuses.take().into_iter().flatten().map(Title::Bonus));
        }
        Title::Bonus(_) => {}
    }
    (title, children)
}
