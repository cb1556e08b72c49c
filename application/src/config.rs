//! Application-level configuration.
//!
//! This module provides configuration types that control how the
//! conversation session behaves.

use std::time::Duration;
use tutor_domain::DEFAULT_HISTORY_CAPACITY;

/// Conversation session configuration.
///
/// `reply_delay` is informational for adapters that build a latency strategy;
/// the session itself only sees the injected strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of turns kept in the history window.
    pub history_capacity: usize,
    /// Simulated delay before each reply.
    pub reply_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            reply_delay: Duration::from_millis(500),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig with the delay specified in milliseconds.
    pub fn with_delay_millis(mut self, millis: u64) -> Self {
        self.reply_delay = Duration::from_millis(millis);
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.reply_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_delay_millis(0)
            .with_history_capacity(4);
        assert_eq!(config.reply_delay, Duration::ZERO);
        assert_eq!(config.history_capacity, 4);
    }
}
