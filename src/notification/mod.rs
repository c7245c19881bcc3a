//! # Notification Service
//!
//! This module is responsible for relaying SMS alerts to the administrator.
//! It acts as the dispatch point for every inbound notification request.
//!
//! ## Core Components
//!
//! - **`NotificationService`**: decides, per request, whether to suppress a
//!   duplicate, simulate a send (no phone number configured), or schedule a
//!   real send as a detached background task.
//! - **`NotificationThrottle`**: an in-memory map suppressing identical
//!   notifications inside a fixed window.
//! - **`AuditLog`**: a best-effort, newest-first delivery record stored as a
//!   single text blob.
//!
//! ## Workflow
//!
//! 1. The administrator phone number is resolved from the secret store;
//!    absence is a normal condition, not a failure.
//! 2. Unless the request is in test mode, the throttle is consulted; a
//!    suppressed request reports success without touching any state.
//! 3. Without a phone number the send is simulated: one audit entry
//!    addressed to `ADMIN` is written before the response returns.
//! 4. With a phone number the send is scheduled onto a background task and
//!    the response returns immediately; the task writes its audit entry when
//!    it completes, and its failures are traced but never surfaced.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

pub mod audit;
pub mod error;
pub mod throttle;

use audit::AuditLog;
use error::NotificationError;
use throttle::NotificationThrottle;

use crate::{
    models::{SmsNotificationRequest, SmsNotificationResponse},
    secrets::{ADMIN_PHONE_SECRET, SecretStore},
};

/// Pause inside the background send simulating provider API latency.
const SIMULATED_SEND_DELAY: Duration = Duration::from_secs(1);

/// Dispatches SMS notification requests to the administrator.
pub struct NotificationService {
    throttle: NotificationThrottle,
    audit: Arc<AuditLog>,
    secrets: Arc<dyn SecretStore>,
}

impl NotificationService {
    /// Creates a service with the given suppression window, audit log, and
    /// secret store.
    pub fn new(throttle_window: Duration, audit: AuditLog, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            throttle: NotificationThrottle::new(throttle_window),
            audit: Arc::new(audit),
            secrets,
        }
    }

    /// Handles one notification request.
    ///
    /// Every handled outcome reports success, including suppression and
    /// simulation; the response message describes which outcome occurred.
    pub async fn dispatch(&self, request: SmsNotificationRequest) -> SmsNotificationResponse {
        let admin_phone = self.secrets.get(ADMIN_PHONE_SECRET).await;

        if !request.test_mode
            && !self.throttle.allow(&request.recipient_type, &request.message, Instant::now())
        {
            tracing::debug!(
                recipient_type = %request.recipient_type,
                "Suppressed duplicate notification."
            );
            return SmsNotificationResponse {
                success: true,
                message: "Duplicate notification suppressed (sent within last minute)"
                    .to_string(),
            };
        }

        let Some(phone) = admin_phone else {
            tracing::info!(sms = %request.message, "Admin SMS notification (no phone configured).");
            self.audit.append(&request.message, None).await;
            return SmsNotificationResponse {
                success: true,
                message:
                    "SMS notification would be sent to admin (simulated - no phone number available)"
                        .to_string(),
            };
        };

        // Fire-and-forget: the HTTP response returns before the send
        // completes, and the task's outcome is observable only through the
        // audit log.
        let audit = Arc::clone(&self.audit);
        let message = request.message.clone();
        tokio::spawn(async move {
            send_sms_in_background(&message, &phone, &audit).await;
        });

        SmsNotificationResponse {
            success: true,
            message: "SMS notification scheduled to be sent to admin".to_string(),
        }
    }

    /// Returns the full audit log text.
    pub async fn logs(&self) -> Result<String, NotificationError> {
        Ok(self.audit.read_all().await?)
    }
}

/// Performs the deferred send and records it in the audit log.
///
/// A real deployment would call an SMS provider here; the send is simulated
/// with a trace line and a short delay. The audit entry is written
/// unconditionally once the send completes.
async fn send_sms_in_background(message: &str, phone: &str, audit: &AuditLog) {
    tracing::info!(phone, sms = %message, "Sending admin SMS notification.");
    tokio::time::sleep(SIMULATED_SEND_DELAY).await;
    audit.append(message, Some(phone)).await;
}
