//! This module defines the blob store contract used throughout the
//! application.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::error::PersistenceError;

/// A generic key-value store holding whole documents by key.
///
/// Each key maps to one opaque document, read and written wholesale. The
/// store offers no transactions and no locking: concurrent writers to the
/// same key are last-writer-wins. A missing key is `Ok(None)`; callers
/// supply their own defaults.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Retrieves the JSON document stored under `key`.
    async fn get_json(&self, key: &str) -> Result<Option<serde_json::Value>, PersistenceError>;

    /// Stores a JSON document under `key`, replacing any existing document.
    async fn put_json(&self, key: &str, value: &serde_json::Value)
        -> Result<(), PersistenceError>;

    /// Retrieves the text document stored under `key`.
    async fn get_text(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores a text document under `key`, replacing any existing document.
    async fn put_text(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
