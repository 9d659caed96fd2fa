pub mod application;

pub use application::TitleImportService;
