use crate::modules::catalog::domain::entities::TitleKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Incompatible update type: got {offered}, expected {expected}")]
    IncompatibleUpdateType {
        offered: TitleKind,
        expected: TitleKind,
    },

    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    #[error("Parent mismatch: expected parent '{expected}', found '{actual}'")]
    ParentMismatch { expected: String, actual: String },

    #[error("Invalid title type: {0}")]
    InvalidType(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StoreError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
