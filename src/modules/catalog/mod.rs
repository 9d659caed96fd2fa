pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::CatalogService;
pub use domain::{Title, TitleKind, TitleRepository, TitleVisitor};
pub use infrastructure::TitleRepositoryImpl;
