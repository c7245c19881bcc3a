//! Error types for the notification service.

use thiserror::Error;

use crate::persistence::error::PersistenceError;

/// Defines the possible errors that can occur within the notification
/// service.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The audit log could not be read back.
    #[error("Failed to retrieve notification logs: {0}")]
    LogRetrieval(#[from] PersistenceError),
}
