//! Configuration file loading for js-tutor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./tutor.toml` or `./.tutor.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/js-tutor/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
    FileSessionConfig,
};
pub use loader::ConfigLoader;
