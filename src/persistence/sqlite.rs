//! This module provides a concrete implementation of the BlobStore using
//! SQLite.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteConnectOptions};

use super::{error::PersistenceError, traits::BlobStore};

/// SQL query constants for blob operations
mod blob_sql {
    /// Select the document stored under a key
    pub const SELECT_BLOB: &str = "SELECT value FROM blobs WHERE key = ?";

    /// Insert or replace the document stored under a key
    pub const UPSERT_BLOB: &str = "INSERT INTO blobs (key, value, updated_at) \
        VALUES (?, ?, datetime('now')) \
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
}

/// A concrete implementation of the BlobStore using SQLite.
pub struct SqliteBlobStore {
    /// The SQLite connection pool used for database operations.
    pool: SqlitePool,
}

impl SqliteBlobStore {
    /// Creates a new instance of SqliteBlobStore with the provided database
    /// URL. This will create the database file if it does not exist.
    #[tracing::instrument(level = "info")]
    pub async fn new(database_url: &str) -> Result<Self, PersistenceError> {
        tracing::debug!(database_url, "Attempting to connect to SQLite database.");
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| PersistenceError::InvalidInput(e.to_string()))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await.map_err(|e| {
            PersistenceError::OperationFailed(format!("Failed to connect to database: {}", e))
        })?;
        tracing::info!(database_url, "Successfully connected to SQLite database.");
        Ok(Self { pool })
    }

    /// Runs database migrations.
    #[tracing::instrument(skip(self), level = "info")]
    pub async fn run_migrations(&self) -> Result<(), PersistenceError> {
        tracing::debug!("Running database migrations.");
        sqlx::migrate!("./migrations").run(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to run database migrations.");
            PersistenceError::MigrationError(e.to_string())
        })?;
        tracing::info!("Database migrations completed successfully.");
        Ok(())
    }

    /// Gets access to the underlying connection pool for advanced operations.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the connection pool gracefully.
    #[tracing::instrument(skip(self), level = "info")]
    pub async fn close(&self) {
        tracing::debug!("Closing SQLite connection pool.");
        self.pool.close().await;
        tracing::info!("SQLite connection pool closed successfully.");
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    /// Retrieves the JSON document stored under `key`.
    #[tracing::instrument(skip(self), level = "debug")]
    async fn get_json(&self, key: &str) -> Result<Option<serde_json::Value>, PersistenceError> {
        match self.get_text(key).await? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| PersistenceError::SerializationError(e.to_string())),
            None => Ok(None),
        }
    }

    /// Stores a JSON document under `key`, replacing any existing document.
    #[tracing::instrument(skip(self, value), level = "debug")]
    async fn put_json(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), PersistenceError> {
        let text = serde_json::to_string(value)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        self.put_text(key, &text).await
    }

    /// Retrieves the text document stored under `key`.
    #[tracing::instrument(skip(self), level = "debug")]
    async fn get_text(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        tracing::debug!(key, "Querying blob store.");
        let row = sqlx::query(blob_sql::SELECT_BLOB)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key, "Blob store read failed.");
                PersistenceError::OperationFailed(e.to_string())
            })?;

        match row {
            Some(row) => {
                let value: String = row
                    .try_get("value")
                    .map_err(|e| PersistenceError::OperationFailed(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Stores a text document under `key`, replacing any existing document.
    #[tracing::instrument(skip(self, value), level = "debug")]
    async fn put_text(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        tracing::debug!(key, "Writing blob store document.");
        sqlx::query(blob_sql::UPSERT_BLOB)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key, "Blob store write failed.");
                PersistenceError::OperationFailed(e.to_string())
            })?;
        Ok(())
    }
}
