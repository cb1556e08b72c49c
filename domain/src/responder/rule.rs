//! Keyword rules for response dispatch

use crate::core::error::DomainError;

/// A canned response guarded by a keyword predicate
///
/// The predicate holds when the normalized input contains any of the
/// keywords as a plain substring. Keywords are stored lowercased.
///
/// # Example
///
/// ```
/// use tutor_domain::responder::Rule;
///
/// let rule = Rule::new("arrays", &["Array"], "Arrays hold ordered values.");
/// assert!(rule.matches("show me array examples"));
/// assert!(!rule.matches("what is a closure"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    keywords: Vec<String>,
    response: String,
}

impl Rule {
    pub fn new(name: impl Into<String>, keywords: &[&str], response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: response.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Check the predicate against input that is already case-folded
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.keywords.is_empty() {
            return Err(DomainError::EmptyRule(self.name.clone()));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(DomainError::BlankKeyword(self.name.clone()));
        }
        Ok(())
    }
}

/// Ordered rules plus the response used when none of them match
///
/// Order is significant: predicates may overlap and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: String,
}

impl RuleSet {
    /// Build a rule set, rejecting rules that could never or always match
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Result<Self, DomainError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(DomainError::EmptyFallback);
        }
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules, fallback })
    }

    /// A rule set that always answers with the fallback
    pub fn empty(fallback: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Vec::new(), fallback)
    }

    pub(crate) fn from_parts(rules: Vec<Rule>, fallback: String) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// First rule whose predicate holds for the normalized input
    pub fn first_match(&self, normalized: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }
}
