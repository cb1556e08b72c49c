//! Core domain concepts shared across all subdomains.
//!
//! - [`message::UserMessage`]: validated text submitted by the user
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod message;
