pub mod title_repository;

pub use title_repository::TitleRepository;

#[cfg(test)]
pub use title_repository::MockTitleRepository;
