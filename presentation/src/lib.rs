//! Presentation layer for js-tutor
//!
//! This crate contains CLI definitions, output formatters,
//! the typing indicator, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use output::{console::ConsoleFormatter, markup::MarkupRenderer};
pub use progress::typing::TypingIndicator;
