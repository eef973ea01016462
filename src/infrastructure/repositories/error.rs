// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use std::io;

pub fn map_join(err: tokio::task::JoinError) -> DomainError {
    DomainError::Storage(io::Error::other(format!("storage task failed: {err}")))
}

pub fn map_encode(err: serde_json::Error) -> DomainError {
    DomainError::Storage(io::Error::other(format!("failed to encode record: {err}")))
}

/// Read failures that mean "this file is not a usable record" rather than
/// "the storage is unavailable".
pub fn map_read(slug: &str, err: io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::InvalidData => DomainError::corrupt(slug, "record is not valid UTF-8"),
        _ => DomainError::Storage(err),
    }
}
