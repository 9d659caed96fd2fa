use std::sync::Arc;

use title_catalog::modules::catalog::infrastructure::store::InMemoryDocumentStore;
use title_catalog::{CatalogService, TitleImportService, TitleRepository, TitleRepositoryImpl};

pub const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/titles.json");

pub struct TestCatalog {
    pub repo: Arc<dyn TitleRepository>,
    pub service: CatalogService,
}

/// Catalog over a fresh in-memory store, seeded with the 44-title fixture.
pub async fn catalog_with_fixture() -> TestCatalog {
    let store = Arc::new(InMemoryDocumentStore::new());
    let repo: Arc<dyn TitleRepository> = Arc::new(TitleRepositoryImpl::new(store));

    let imported = TitleImportService::new(repo.clone())
        .import_from_path(FIXTURE_PATH)
        .await
        .expect("fixture import");
    assert_eq!(imported, 44);

    TestCatalog {
        service: CatalogService::new(repo.clone()),
        repo,
    }
}

/// Catalog over an empty in-memory store.
pub fn empty_catalog() -> TestCatalog {
    let store = Arc::new(InMemoryDocumentStore::new());
    let repo: Arc<dyn TitleRepository> = Arc::new(TitleRepositoryImpl::new(store));
    TestCatalog {
        service: CatalogService::new(repo.clone()),
        repo,
    }
}
