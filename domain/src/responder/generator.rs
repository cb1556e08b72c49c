//! First-match keyword response generator

use super::rule::RuleSet;

/// Maps user input to a canned response
///
/// `generate` is total and pure: the input is case-folded, the rules are
/// evaluated in order, and the first match wins. Input matching no rule gets
/// the rule set's fallback.
///
/// # Example
///
/// ```
/// use tutor_domain::responder::{ResponseGenerator, RuleSet, TOPICS_RESPONSE};
///
/// let generator = ResponseGenerator::new(RuleSet::javascript_tutor());
/// assert_eq!(generator.generate("asdkfj"), TOPICS_RESPONSE);
/// ```
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    rules: RuleSet,
}

impl ResponseGenerator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn generate(&self, input: &str) -> String {
        self.respond(input).to_string()
    }

    /// Borrowing variant of [`generate`](Self::generate)
    pub fn respond(&self, input: &str) -> &str {
        self.answer(input).response
    }

    /// Name of the rule that answers `input`, if any
    pub fn matched_rule(&self, input: &str) -> Option<&str> {
        self.answer(input).rule
    }

    /// Resolve `input` once, yielding the response and the rule behind it
    pub fn answer(&self, input: &str) -> Answer<'_> {
        let normalized = input.to_lowercase();
        match self.rules.first_match(&normalized) {
            Some(rule) => Answer {
                rule: Some(rule.name()),
                response: rule.response(),
            },
            None => Answer {
                rule: None,
                response: self.rules.fallback(),
            },
        }
    }
}

/// Outcome of one dispatch: the matched rule name (`None` for the fallback)
/// and the response text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer<'a> {
    pub rule: Option<&'a str>,
    pub response: &'a str,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new(RuleSet::javascript_tutor())
    }
}
