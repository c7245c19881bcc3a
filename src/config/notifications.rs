use std::time::Duration;

use serde::Deserialize;

use super::deserialize_duration_from_seconds;

/// Configuration for the notification relay.
#[derive(Debug, Deserialize, Clone)]
pub struct NotificationsConfig {
    /// Window during which identical notifications are suppressed as
    /// duplicates.
    #[serde(
        rename = "throttle_window_secs",
        deserialize_with = "deserialize_duration_from_seconds",
        default = "default_throttle_window"
    )]
    pub throttle_window: Duration,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { throttle_window: default_throttle_window() }
    }
}

/// Provides the default value for throttle_window.
fn default_throttle_window() -> Duration {
    Duration::from_secs(60)
}
