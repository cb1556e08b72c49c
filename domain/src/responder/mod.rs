//! Keyword responder.
//!
//! - [`rule::Rule`] / [`rule::RuleSet`]: ordered keyword rules with a fallback
//! - [`generator::ResponseGenerator`]: first-match dispatch over a rule set
//! - [`catalog`]: the built-in JavaScript tutor texts

pub mod catalog;
pub mod generator;
pub mod rule;

pub use catalog::{
    ARRAYS_RESPONSE, FUNCTIONS_RESPONSE, GREETING_RESPONSE, HELP_RESPONSE, QUIZ_RESPONSE,
    TOPICS_RESPONSE, VARIABLES_RESPONSE, WELCOME_MESSAGE,
};
pub use generator::{Answer, ResponseGenerator};
pub use rule::{Rule, RuleSet};
