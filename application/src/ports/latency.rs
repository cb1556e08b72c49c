//! Reply latency port
//!
//! The tutor answers locally, but replies are delayed as if they came from a
//! remote service. The delay is a strategy so tests can run without waiting.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while waiting for a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatencyError {
    #[error("Reply failed: {0}")]
    Failed(String),
}

/// Strategy awaited once per exchange before the reply is produced
#[async_trait]
pub trait LatencyStrategy: Send + Sync {
    async fn wait(&self) -> Result<(), LatencyError>;
}

/// Replies immediately
pub struct NoLatency;

#[async_trait]
impl LatencyStrategy for NoLatency {
    async fn wait(&self) -> Result<(), LatencyError> {
        Ok(())
    }
}
