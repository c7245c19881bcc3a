//! This module defines the request and response bodies for the SMS
//! notification endpoint.

use serde::{Deserialize, Serialize};

/// Request body for sending an SMS notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsNotificationRequest {
    /// The message text to deliver.
    pub message: String,
    /// Recipient class; only "admin" is currently routed.
    #[serde(default = "default_recipient_type")]
    pub recipient_type: String,
    /// When true, duplicate suppression is bypassed entirely.
    #[serde(default)]
    pub test_mode: bool,
}

/// Provides the default value for recipient_type.
fn default_recipient_type() -> String {
    "admin".to_string()
}

/// Response body reporting the outcome of a notification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsNotificationResponse {
    /// Whether the request was handled; suppression and simulation both
    /// count as handled.
    pub success: bool,
    /// Human-readable description of the outcome.
    pub message: String,
}
