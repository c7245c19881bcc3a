//! Best-effort audit logging for notification deliveries.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;

use crate::persistence::{error::PersistenceError, traits::BlobStore};

/// Blob store key holding the notification audit log.
pub const NOTIFICATION_LOG_KEY: &str = "notification_logs";

/// Text returned when no notifications have been logged yet.
pub const EMPTY_LOG_PLACEHOLDER: &str = "No notifications logged yet.";

/// Appends timestamped delivery records to a single text blob, newest first.
///
/// Writes are best-effort: storage failures are traced and swallowed so a
/// broken audit trail never blocks the notification path. The
/// read-modify-write pair is serialized through an internal mutex so
/// concurrent appends cannot drop each other's entries.
pub struct AuditLog {
    store: Arc<dyn BlobStore>,
    write_lock: Mutex<()>,
}

impl AuditLog {
    /// Creates an audit log over the given blob store.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    /// Records one delivery, addressed to `phone` or to the literal `ADMIN`
    /// when no phone number was involved.
    pub async fn append(&self, message: &str, phone: Option<&str>) {
        if let Err(e) = self.try_append(message, phone).await {
            tracing::error!(error = %e, "Failed to write notification audit entry.");
        }
    }

    async fn try_append(&self, message: &str, phone: Option<&str>) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().await;

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let entry = format!("[{}] TO: {} - {}\n", timestamp, phone.unwrap_or("ADMIN"), message);

        let existing = self.store.get_text(NOTIFICATION_LOG_KEY).await?.unwrap_or_default();
        // Newest at the top.
        let logs = format!("{entry}{existing}");
        self.store.put_text(NOTIFICATION_LOG_KEY, &logs).await
    }

    /// Returns the full log text, or the placeholder when nothing has been
    /// logged yet.
    pub async fn read_all(&self) -> Result<String, PersistenceError> {
        Ok(self
            .store
            .get_text(NOTIFICATION_LOG_KEY)
            .await?
            .unwrap_or_else(|| EMPTY_LOG_PLACEHOLDER.to_string()))
    }
}
