//! Progress feedback while the tutor prepares a reply

pub mod typing;
