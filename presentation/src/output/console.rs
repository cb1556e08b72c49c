//! Console output formatter for tutor conversations

use crate::output::markup::MarkupRenderer;
use chrono::Local;
use colored::Colorize;
use tutor_domain::{Role, Turn};

/// Formats turns and replies for console display
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    markup: MarkupRenderer,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self {
            markup: MarkupRenderer::new(color),
        }
    }

    pub fn color(&self) -> bool {
        self.markup.color()
    }

    /// Format a tutor reply as it arrives
    pub fn format_reply(&self, text: &str) -> String {
        format!("{}\n{}\n", self.label(Role::Assistant), self.markup.render(text))
    }

    /// Format one history entry with its local `HH:MM` time
    pub fn format_turn(&self, turn: &Turn) -> String {
        let time = turn
            .timestamp()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();
        let time = if self.color() {
            time.dimmed().to_string()
        } else {
            time
        };
        format!(
            "{} {}\n{}\n",
            time,
            self.label(turn.role()),
            self.markup.render(turn.content())
        )
    }

    pub fn format_history(&self, turns: &[Turn]) -> String {
        if turns.is_empty() {
            return "(no messages yet)\n".to_string();
        }
        turns
            .iter()
            .map(|turn| self.format_turn(turn))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_notice(&self, text: &str) -> String {
        if self.color() {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, role: Role) -> String {
        let label = match role {
            Role::User => "You:",
            Role::Assistant => "Tutor:",
        };
        match (self.color(), role) {
            (false, _) => label.to_string(),
            (true, Role::User) => label.green().bold().to_string(),
            (true, Role::Assistant) => label.magenta().bold().to_string(),
        }
    }
}
