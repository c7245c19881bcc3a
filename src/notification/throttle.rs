//! Time-windowed duplicate suppression for outbound notifications.

use std::time::{Duration, Instant};

use dashmap::{DashMap, mapref::entry::Entry};

/// Map size above which a sweep of stale entries is attempted.
const SWEEP_THRESHOLD: usize = 1024;

/// Entries older than this multiple of the window are dropped by a sweep.
const SWEEP_FACTOR: u32 = 4;

/// Suppresses repeated identical notifications within a fixed window.
///
/// Keys are the exact `recipient_type:message` pair with no normalization,
/// so two messages differing only in whitespace are distinct. State lives in
/// process memory only and does not survive a restart.
pub struct NotificationThrottle {
    window: Duration,
    recent: DashMap<String, Instant>,
}

impl NotificationThrottle {
    /// Creates a throttle with the given suppression window.
    pub fn new(window: Duration) -> Self {
        Self { window, recent: DashMap::new() }
    }

    /// Decides whether a notification may be sent at `now`.
    ///
    /// Returns false when an identical notification was recorded within the
    /// window. Otherwise records `now` for this key before returning true,
    /// so a second identical request is suppressed even while the first is
    /// still in flight.
    pub fn allow(&self, recipient_type: &str, message: &str, now: Instant) -> bool {
        let key = format!("{recipient_type}:{message}");
        let allowed = match self.recent.entry(key) {
            Entry::Occupied(mut entry) => {
                if now.duration_since(*entry.get()) < self.window {
                    false
                } else {
                    entry.insert(now);
                    true
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                true
            }
        };

        if self.recent.len() > SWEEP_THRESHOLD {
            self.sweep(now);
        }

        allowed
    }

    /// Drops entries too old to influence any future suppression decision.
    fn sweep(&self, now: Instant) {
        let horizon = self.window * SWEEP_FACTOR;
        self.recent.retain(|_, last| now.duration_since(*last) < horizon);
    }

    /// Number of tracked notification keys.
    pub fn tracked_keys(&self) -> usize {
        self.recent.len()
    }
}
