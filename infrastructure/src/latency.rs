//! Timer-backed reply latency

use async_trait::async_trait;
use std::time::Duration;
use tutor_application::{LatencyError, LatencyStrategy};

/// Delays every reply by a fixed duration using the tokio timer
#[derive(Debug, Clone, Copy)]
pub struct FixedLatency {
    delay: Duration,
}

impl FixedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl LatencyStrategy for FixedLatency {
    async fn wait(&self) -> Result<(), LatencyError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(())
    }
}
