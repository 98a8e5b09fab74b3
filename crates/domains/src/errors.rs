//! # Domain errors
//!
//! Failures the store can report to callers, plus the persistence taxonomy
//! it keeps internally.

use thiserror::Error;

/// The primary error type for store operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Resource not found (e.g. Listing)
    #[error("{entity} not found with ID {id}")]
    NotFound { entity: &'static str, id: String },

    /// Validation failure (e.g. empty title, negative distance)
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource already exists (e.g. the id source keeps repeating an id)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Claim asks for more than the listing has left
    #[error("insufficient stock: requested {requested}, {available} left")]
    InsufficientStock { requested: u32, available: u32 },
}

/// Failures while reading or writing the persisted snapshot.
///
/// Never surfaced through the public store API; the store logs them and
/// keeps its last good in-memory state.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The key-value slot itself failed (I/O, unavailable)
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// The persisted value is not a JSON array of listings
    #[error("corrupt snapshot: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The snapshot is an array, but none of its records is a listing
    #[error("snapshot holds no valid listing ({dropped} malformed records)")]
    NoValidRecords { dropped: usize },

    /// The in-memory collection could not be encoded
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<anyhow::Error> for PersistenceError {
    fn from(err: anyhow::Error) -> Self {
        PersistenceError::Storage(format!("{err:#}"))
    }
}

/// A specialized Result type for Hicki logic.
pub type Result<T> = std::result::Result<T, DomainError>;
