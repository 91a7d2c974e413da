// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid slug {value:?}: {reason}")]
    InvalidSlug { value: String, reason: SlugViolation },
}

/// The first rule a candidate slug breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlugViolation {
    #[error("character {ch:?} at byte {index} is not allowed")]
    Character { ch: char, index: usize },
    #[error("repeated hyphen at byte {index}")]
    RepeatedHyphen { index: usize },
}
