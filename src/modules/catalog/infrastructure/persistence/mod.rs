pub mod title_repository_impl;

pub use title_repository_impl::TitleRepositoryImpl;
