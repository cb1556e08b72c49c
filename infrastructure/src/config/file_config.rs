//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [session]
//! latency_ms = 500
//! history_limit = 10
//!
//! [output]
//! color = true
//!
//! [repl]
//! typing_indicator = true
//!
//! [logging]
//! conversation_log = "~/tutor.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tutor_application::SessionConfig;
use tutor_domain::DEFAULT_HISTORY_CAPACITY;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("history_limit must be a positive even number, got {0}")]
    InvalidHistoryLimit(usize),

    #[error("conversation_log cannot be empty")]
    EmptyConversationLog,
}

/// Raw session configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Simulated reply delay in milliseconds
    pub latency_ms: u64,
    /// Number of turns kept in history
    pub history_limit: usize,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            history_limit: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while the tutor is "typing"
    pub typing_indicator: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            typing_indicator: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path; no transcript when unset
    pub conversation_log: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub session: FileSessionConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let limit = self.session.history_limit;
        if limit == 0 || limit % 2 != 0 {
            return Err(ConfigValidationError::InvalidHistoryLimit(limit));
        }
        if let Some(path) = &self.logging.conversation_log {
            if path.trim().is_empty() {
                return Err(ConfigValidationError::EmptyConversationLog);
            }
        }
        Ok(())
    }

    /// Session settings for the application layer
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_delay_millis(self.session.latency_ms)
            .with_history_capacity(self.session.history_limit)
    }

    /// Transcript path, if configured
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.logging.conversation_log.as_ref().map(PathBuf::from)
    }
}
