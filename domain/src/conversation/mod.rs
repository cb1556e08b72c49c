//! Conversation domain.
//!
//! - [`turn::Turn`]: a single role-tagged message with its timestamp
//! - [`history::History`]: bounded window over the most recent turns

pub mod history;
pub mod turn;
