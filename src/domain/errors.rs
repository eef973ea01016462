// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Human-readable rule violations collected for a single submission.
pub type Violations = Vec<String>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("article not found: {0}")]
    NotFound(String),
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Violations),
    #[error("corrupt record for `{slug}`: {reason}")]
    CorruptRecord { slug: String, reason: String },
    #[error("slug already in use: {0}")]
    SlugCollision(String),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    pub fn corrupt(slug: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptRecord {
            slug: slug.into(),
            reason: reason.to_string(),
        }
    }
}
