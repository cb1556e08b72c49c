//! Infrastructure layer for js-tutor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod latency;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig,
};
pub use latency::FixedLatency;
pub use logging::JsonlConversationLogger;
