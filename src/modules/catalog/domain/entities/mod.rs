pub mod title;
pub mod title_kind;

// Re-exports for easy access
pub use title::{Bonus, Episode, Feature, Season, Title, TvSeries};
pub use title_kind::TitleKind;
