// src/infrastructure/error.rs
use thiserror::Error;

pub type InfraResult<T> = Result<T, InfraError>;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid metadata document: {0}")]
    Json(#[from] serde_json::Error),
}
