//! Domain layer for js-tutor
//!
//! This crate contains the core entities and the keyword responder.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! - **Turn**: one role-tagged message (user or assistant) with a timestamp
//! - **History**: bounded window over the most recent turns, evicted oldest first
//!
//! ## Responder
//!
//! - **Rule**: keyword predicate plus canned response
//! - **ResponseGenerator**: first-match dispatch over an ordered rule set

pub mod conversation;
pub mod core;
pub mod responder;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    history::{DEFAULT_HISTORY_CAPACITY, History},
    turn::{Role, Turn},
};
pub use core::{error::DomainError, message::UserMessage};
pub use responder::{ResponseGenerator, Rule, RuleSet, WELCOME_MESSAGE};
