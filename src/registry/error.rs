//! This module contains the error types for the registry layer.

use thiserror::Error;

use crate::persistence::error::PersistenceError;

/// Errors that can occur while operating on a stored collection.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The requested item was not found in the collection.
    #[error("{0}")]
    NotFound(String),

    /// An item with the same identifier already exists.
    #[error("{0}")]
    Conflict(String),

    /// The underlying blob store operation failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The stored collection could not be serialized or deserialized.
    #[error("Failed to serialize or deserialize collection: {0}")]
    Serialization(#[from] serde_json::Error),
}
