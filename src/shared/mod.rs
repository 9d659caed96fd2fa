// Shared kernel: error types and cross-cutting utilities

pub mod errors;
pub mod utils;

pub use errors::{AppError, AppResult};
