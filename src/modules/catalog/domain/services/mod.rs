pub mod children_populator;
pub mod parent_link;
pub mod title_updater;

// Re-exports for easy access
pub use children_populator::ChildrenPopulator;
pub use parent_link::{ParentSetter, ParentUnsetter};
pub use title_updater::TitleUpdater;
