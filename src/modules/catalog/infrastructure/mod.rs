pub mod models;
pub mod persistence;
pub mod store;

pub use persistence::TitleRepositoryImpl;
pub use store::{DocumentStore, InMemoryDocumentStore, Query};
