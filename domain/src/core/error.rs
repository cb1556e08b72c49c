//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Rule '{0}' has no keywords")]
    EmptyRule(String),

    #[error("Rule '{0}' has a blank keyword")]
    BlankKeyword(String),

    #[error("Fallback response cannot be empty")]
    EmptyFallback,

    #[error("History capacity must be a positive even number, got {0}")]
    InvalidHistoryCapacity(usize),
}
