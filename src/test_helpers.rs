//! A set of helpers for testing

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{
    persistence::{error::PersistenceError, traits::BlobStore},
    secrets::SecretStore,
};

/// An in-memory blob store for tests that do not need a real database.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blobs: DashMap<String, String>,
}

impl InMemoryBlobStore {
    /// Creates a new, empty in-memory blob store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get_json(&self, key: &str) -> Result<Option<serde_json::Value>, PersistenceError> {
        match self.blobs.get(key) {
            Some(text) => serde_json::from_str(text.value())
                .map(Some)
                .map_err(|e| PersistenceError::SerializationError(e.to_string())),
            None => Ok(None),
        }
    }

    async fn put_json(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), PersistenceError> {
        let text = serde_json::to_string(value)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        self.blobs.insert(key.to_string(), text);
        Ok(())
    }

    async fn get_text(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.blobs.get(key).map(|entry| entry.value().clone()))
    }

    async fn put_text(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A secret store with fixed contents for tests.
#[derive(Debug, Default)]
pub struct StaticSecretStore {
    secrets: HashMap<String, String>,
}

impl StaticSecretStore {
    /// Creates a store holding no secrets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store holding a single named secret.
    pub fn with_secret(name: &str, value: &str) -> Self {
        let mut secrets = HashMap::new();
        secrets.insert(name.to_string(), value.to_string());
        Self { secrets }
    }
}

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn get(&self, name: &str) -> Option<String> {
        self.secrets.get(name).cloned()
    }
}
