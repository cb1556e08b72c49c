//! User message value object

/// Text the user submitted from a chat surface (Value Object)
///
/// The surface rejects blank input before starting an exchange; this type
/// carries that check. The conversation session itself accepts any string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    content: String,
}

impl UserMessage {
    /// Trim the input, returning `None` if nothing is left
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for UserMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
