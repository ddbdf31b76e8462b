//! Engine configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reference poll period for the records endpoint
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;

/// Sync engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Poll period in milliseconds
    pub poll_interval_ms: u64,
    /// Optional bound on retained notifications (oldest dropped first)
    pub max_notifications: Option<usize>,
}

impl SyncConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a poll interval
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With a notification cap
    #[inline]
    #[must_use]
    pub fn with_max_notifications(mut self, cap: usize) -> Self {
        self.max_notifications = Some(cap);
        self
    }

    /// Poll period as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_notifications: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = SyncConfig::new();
        assert_eq!(config.poll_interval(), Duration::from_millis(3000));
        assert_eq!(config.max_notifications, None);
    }

    #[test]
    fn config_builders() {
        let config = SyncConfig::new()
            .with_poll_interval(Duration::from_millis(500))
            .with_max_notifications(50);
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.max_notifications, Some(50));
    }
}
