//! Application layer for js-tutor
//!
//! This crate contains the conversation session use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    latency::{LatencyError, LatencyStrategy, NoLatency},
};
pub use use_cases::conversation::{APOLOGY_MESSAGE, ConversationSession, ExchangeError};
