//! CRUD backend core for a media-title catalog.
//!
//! The catalog holds a closed hierarchy of title variants (features, TV
//! series, seasons, episodes, bonus content). Parent/children associations
//! are never stored as embedded documents; children views are derived at
//! read time from weak parent back references, because the backing document
//! store cannot resolve the circular graph natively.

pub mod modules;
pub mod shared;

pub use modules::catalog::{
    CatalogService, Title, TitleKind, TitleRepository, TitleRepositoryImpl, TitleVisitor,
};
pub use modules::data_import::TitleImportService;
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
