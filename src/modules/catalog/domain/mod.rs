pub mod entities;
pub mod repositories;
pub mod services;
pub mod visitor;

// Re-exports for easy access
pub use entities::{Bonus, Episode, Feature, Season, Title, TitleKind, TvSeries};
pub use repositories::TitleRepository;
pub use visitor::TitleVisitor;
