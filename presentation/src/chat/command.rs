//! Slash commands understood by the chat REPL

/// A parsed REPL command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Clear,
    Theme,
    Quit,
    Unknown,
}

impl ReplCommand {
    /// Parse a line that starts with `/`; other lines are chat messages
    pub fn parse(line: &str) -> Option<Self> {
        let cmd = line.trim();
        if !cmd.starts_with('/') {
            return None;
        }

        let name = cmd.split_whitespace().next().unwrap_or(cmd);
        Some(match name.to_lowercase().as_str() {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => ReplCommand::History,
            "/clear" | "/reset" => ReplCommand::Clear,
            "/theme" => ReplCommand::Theme,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown,
        })
    }

    pub fn help_text() -> &'static str {
        "Commands:\n\
         \x20 /help, /h, /?      - Show this help\n\
         \x20 /history           - Show the recent conversation\n\
         \x20 /clear, /reset     - Clear the conversation\n\
         \x20 /theme             - Toggle colored output\n\
         \x20 /quit, /exit, /q   - Exit chat\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(ReplCommand::parse("explain variables"), None);
        assert_eq!(ReplCommand::parse("what does a/b mean"), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ReplCommand::parse("/h"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("  /EXIT "), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/reset"), Some(ReplCommand::Clear));
        assert_eq!(ReplCommand::parse("/history"), Some(ReplCommand::History));
        assert_eq!(ReplCommand::parse("/theme dark"), Some(ReplCommand::Theme));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(ReplCommand::parse("/models"), Some(ReplCommand::Unknown));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = ReplCommand::help_text();
        for cmd in ["/help", "/history", "/clear", "/theme", "/quit"] {
            assert!(help.contains(cmd), "{cmd}");
        }
    }
}
